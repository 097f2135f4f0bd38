//! Tests for the canonical re-serialization of decoded documents

use query_syntax::{decode_document, decode_str};
use serde_json::json;

#[test]
fn test_canonical_form_fills_in_sort_order() {
    let query = decode_document(&json!({
        "filter": {"EQ": {"a": 1}},
        "sort": [{"key": "a"}],
        "page": {"limit": 5}
    }))
    .unwrap();

    assert_eq!(
        serde_json::to_value(&query).unwrap(),
        json!({
            "filter": {"EQ": {"a": 1}},
            "sort": [{"key": "a", "order": "ASC"}],
            "page": {"limit": 5}
        })
    );
}

#[test]
fn test_decoding_canonical_form_is_idempotent() {
    let source = r#"{
        "filter": {"OR": [
            {"AND": [{"EQ": {"a": "x"}}, {"IN": {"b": [1, 2.5, true]}}]},
            {"EQ": {"c": false}}
        ]},
        "sort": [{"key": "b", "order": "DESC"}, {"key": "a"}],
        "page": {"limit": 10, "token": "t0"},
        "ignored": 1
    }"#;

    let first = decode_str(source).unwrap();
    let canonical = serde_json::to_string(&first).unwrap();
    let second = decode_str(&canonical).unwrap();

    assert_eq!(first, second);
    assert_eq!(serde_json::to_string(&second).unwrap(), canonical);
}

#[test]
fn test_empty_document_round_trips_to_empty_object() {
    let query = decode_str("{}").unwrap();
    assert_eq!(serde_json::to_string(&query).unwrap(), "{}");
}
