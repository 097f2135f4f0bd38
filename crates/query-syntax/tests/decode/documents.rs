//! Tests for decoding complete query documents

use query_model::{FilterNode, Pagination, SortOrder, Sorting};
use query_syntax::{DecodeError, ParseError, decode_document, decode_str};
use serde_json::json;

#[test]
fn test_decode_complete_document() {
    let source = r#"
        {
            "filter": {
                "AND": [
                    {"EQ": {"state": "CA"}},
                    {"IN": {"person.org": ["Dev Ops", "Hardware"]}}
                ]
            },
            "sort": [
                {"key": "state", "order": "DESC"},
                {"key": "person.id"}
            ],
            "page": {"limit": 3, "token": "opaque-cursor"}
        }
    "#;

    let query = decode_str(source).unwrap();

    assert_eq!(
        query.filter,
        Some(
            FilterNode::and(vec![
                FilterNode::equal("state", "CA"),
                FilterNode::in_values("person.org", vec!["Dev Ops".into(), "Hardware".into()])
                    .unwrap(),
            ])
            .unwrap()
        )
    );
    assert_eq!(
        query.sort,
        vec![Sorting::desc("state"), Sorting::asc("person.id")]
    );
    assert_eq!(query.page, Pagination::new(3).with_token("opaque-cursor"));
}

#[test]
fn test_sort_preserves_order_and_defaults_to_asc() {
    let query = decode_document(&json!({
        "sort": [
            {"key": "c"},
            {"key": "a", "order": "DESC"},
            {"key": "b", "order": "ASC"},
            {"key": "d"}
        ]
    }))
    .unwrap();

    let keys: Vec<_> = query.sort.iter().map(|s| s.key.as_str()).collect();
    let orders: Vec<_> = query.sort.iter().map(|s| s.order).collect();

    assert_eq!(keys, vec!["c", "a", "b", "d"]);
    assert_eq!(
        orders,
        vec![
            SortOrder::Asc,
            SortOrder::Desc,
            SortOrder::Asc,
            SortOrder::Asc
        ]
    );
}

#[test]
fn test_sort_must_be_sequence() {
    let err = decode_document(&json!({"sort": "not-an-array"})).unwrap_err();

    assert_eq!(err.field_name(), Some("sort"));
    assert_eq!(err.to_string(), r#""sort" must be a sequence, found string"#);
}

#[test]
fn test_sort_entry_shape() {
    let err = decode_document(&json!({"sort": [{"key": "a"}, "b"]})).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#""sort" entry 1 must be a mapping, found string"#
    );

    let err = decode_document(&json!({"sort": [{"order": "ASC"}]})).unwrap_err();
    assert_eq!(err.field_name(), Some("sort"));
    assert!(err.to_string().contains("key"), "{err}");
}

#[test]
fn test_sort_order_is_a_closed_set() {
    let err = decode_document(&json!({"sort": [{"key": "a", "order": "RANDOM"}]})).unwrap_err();
    assert_eq!(err.field_name(), Some("sort"));
    assert!(err.to_string().contains("RANDOM"), "{err}");
}

#[test]
fn test_page_must_be_mapping() {
    let err = decode_document(&json!({"page": [1, 2]})).unwrap_err();

    assert_eq!(err.field_name(), Some("page"));
    assert_eq!(err.to_string(), r#""page" must be a mapping, found sequence"#);
}

#[test]
fn test_page_token_is_optional_and_opaque() {
    let query = decode_document(&json!({"page": {"limit": 25}})).unwrap();
    assert_eq!(query.page, Pagination::new(25));

    let query = decode_document(&json!({"page": {"limit": 1, "token": "%%not*base64=="}})).unwrap();
    assert_eq!(query.page.token.as_deref(), Some("%%not*base64=="));
}

#[test]
fn test_page_limit_must_be_non_negative_integer() {
    for limit in [json!(-1), json!("10"), json!(1.5)] {
        let err = decode_document(&json!({"page": {"limit": limit}})).unwrap_err();
        assert_eq!(err.field_name(), Some("page"), "{err}");
    }
}

#[test]
fn test_filter_error_is_wrapped() {
    let err = decode_document(&json!({"filter": {"AND": []}})).unwrap_err();

    assert_eq!(err.field_name(), Some("filter"));
    assert!(matches!(
        err,
        DecodeError::Filter(ParseError::EmptyOperand { .. })
    ));
}

#[test]
fn test_first_error_wins() {
    let err = decode_document(&json!({
        "filter": {"GT": {"a": 1}},
        "sort": "bad",
        "page": "bad"
    }))
    .unwrap_err();
    assert_eq!(err.field_name(), Some("filter"));

    let err = decode_document(&json!({"sort": "bad", "page": "bad"})).unwrap_err();
    assert_eq!(err.field_name(), Some("sort"));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let query = decode_document(&json!({"metadata": {"trace": true}})).unwrap();
    assert!(query.is_unfiltered());
}

#[test]
fn test_invalid_json_text() {
    let err = decode_str("{\"filter\": ").unwrap_err();
    assert!(matches!(err, DecodeError::Json(_)));
    assert_eq!(err.field_name(), None);
}
