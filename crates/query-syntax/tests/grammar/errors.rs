//! Tests for malformed filter documents

use query_model::{NodePath, Operator};
use query_syntax::{ParseError, parse_filter};
use serde_json::{Value, json};

fn parse_err(doc: Value) -> ParseError {
    match parse_filter(&doc) {
        Ok(node) => panic!("expected {doc} to be rejected, parsed {node:?}"),
        Err(err) => err,
    }
}

#[test]
fn test_unknown_operator_is_named() {
    let err = parse_err(json!({"GT": {"a": 1}}));

    assert_eq!(
        err,
        ParseError::UnsupportedOperator {
            path: NodePath::root(),
            operator: "GT".to_string(),
        }
    );
    assert_eq!(err.to_string(), r#"filter: unsupported filter operator "GT""#);
}

#[test]
fn test_equal_with_two_keys() {
    let err = parse_err(json!({"EQ": {"a": 1, "b": 2}}));

    assert!(matches!(
        err,
        ParseError::FieldCount {
            operator: Operator::Eq,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "filter.EQ: EQ operand must contain exactly one key, found 2 (a, b)"
    );
}

#[test]
fn test_equal_with_no_keys() {
    let err = parse_err(json!({"EQ": {}}));
    assert!(err.to_string().ends_with("found none"));
}

#[test]
fn test_filter_with_two_operators() {
    let err = parse_err(json!({"EQ": {"a": 1}, "IN": {"b": [1]}}));
    match err {
        ParseError::OperatorCount { keys, .. } => assert_eq!(keys.len(), 2),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_empty_filter_mapping() {
    let err = parse_err(json!({}));
    assert!(matches!(err, ParseError::OperatorCount { ref keys, .. } if keys.is_empty()));
}

#[test]
fn test_filter_must_be_a_mapping() {
    let err = parse_err(json!("EQ"));
    assert_eq!(
        err,
        ParseError::NotAMapping {
            path: NodePath::root(),
            found: "string",
        }
    );
}

#[test]
fn test_equal_value_must_be_scalar() {
    for value in [json!({"nested": 1}), json!([1, 2]), json!(null)] {
        let err = parse_err(json!({"EQ": {"a": value}}));
        assert!(
            matches!(err, ParseError::NonScalarValue { operator: Operator::Eq, .. }),
            "unexpected error: {err:?}"
        );
        assert_eq!(err.path().to_string(), "filter.EQ.a");
    }
}

#[test]
fn test_in_value_must_be_sequence() {
    let err = parse_err(json!({"IN": {"a": 1}}));
    assert_eq!(
        err.to_string(),
        "filter.IN.a: IN operand must be a sequence of scalars, found number"
    );
}

#[test]
fn test_in_sequence_must_not_be_empty() {
    let err = parse_err(json!({"IN": {"a": []}}));
    assert_eq!(
        err,
        ParseError::EmptyOperand {
            path: NodePath::root().operator(Operator::In).field("a"),
            operator: Operator::In,
        }
    );
}

#[test]
fn test_in_elements_must_be_scalars() {
    let err = parse_err(json!({"IN": {"a": [1, {"EQ": {"b": 2}}]}}));
    assert_eq!(err.path().to_string(), "filter.IN.a[1]");
    assert!(err.to_string().contains("found mapping"));
}

#[test]
fn test_empty_and_or() {
    let and = parse_err(json!({"AND": []}));
    assert_eq!(and.to_string(), "filter.AND: AND requires at least one operand");

    let or = parse_err(json!({"OR": []}));
    assert_eq!(or.to_string(), "filter.OR: OR requires at least one operand");
}

#[test]
fn test_group_operand_must_be_sequence() {
    let err = parse_err(json!({"AND": {"EQ": {"a": 1}}}));
    assert!(matches!(
        err,
        ParseError::OperandShape {
            operator: Operator::And,
            expected: "a sequence of filters",
            found: "mapping",
            ..
        }
    ));
}

#[test]
fn test_nested_error_reports_path_and_aborts() {
    let err = parse_err(json!({
        "AND": [
            {"EQ": {"a": 1}},
            {"OR": [
                {"EQ": {"b": 1}},
                {"LIKE": {"c": "x%"}}
            ]},
            {"GT": {"d": 1}}
        ]
    }));

    assert_eq!(
        err,
        ParseError::UnsupportedOperator {
            path: NodePath::root()
                .operator(Operator::And)
                .index(1)
                .operator(Operator::Or)
                .index(1),
            operator: "LIKE".to_string(),
        }
    );
}
