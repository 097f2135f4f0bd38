use query_model::{NodePath, Operator};
use thiserror::Error;

/// A filter document violates the filter grammar.
///
/// Every variant carries the path of the node that failed, e.g.
/// `filter.AND[1].IN`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{path}: filter must be a mapping, found {found}")]
    NotAMapping { path: NodePath, found: &'static str },

    #[error("{path}: filter must contain exactly one operator, found {}", describe_keys(.keys))]
    OperatorCount { path: NodePath, keys: Vec<String> },

    #[error("{path}: unsupported filter operator \"{operator}\"")]
    UnsupportedOperator { path: NodePath, operator: String },

    #[error("{path}: {operator} operand must be {expected}, found {found}")]
    OperandShape {
        path: NodePath,
        operator: Operator,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{path}: {operator} operand must contain exactly one key, found {}", describe_keys(.keys))]
    FieldCount {
        path: NodePath,
        operator: Operator,
        keys: Vec<String>,
    },

    #[error("{path}: {operator} value must be a scalar (string, number or boolean), found {found}")]
    NonScalarValue {
        path: NodePath,
        operator: Operator,
        found: &'static str,
    },

    #[error("{path}: {operator} requires at least one operand")]
    EmptyOperand { path: NodePath, operator: Operator },

    #[error("{path}: IN has {count} values, more than the allowed {limit}")]
    TooManyValues {
        path: NodePath,
        count: usize,
        limit: usize,
    },

    #[error("{path}: filter nesting exceeds the maximum depth of {max_depth}")]
    TooDeep { path: NodePath, max_depth: usize },
}

impl ParseError {
    pub fn path(&self) -> &NodePath {
        match self {
            ParseError::NotAMapping { path, .. }
            | ParseError::OperatorCount { path, .. }
            | ParseError::UnsupportedOperator { path, .. }
            | ParseError::OperandShape { path, .. }
            | ParseError::FieldCount { path, .. }
            | ParseError::NonScalarValue { path, .. }
            | ParseError::EmptyOperand { path, .. }
            | ParseError::TooManyValues { path, .. }
            | ParseError::TooDeep { path, .. } => path,
        }
    }
}

fn describe_keys(keys: &[String]) -> String {
    if keys.is_empty() {
        "none".to_string()
    } else {
        format!("{} ({})", keys.len(), keys.join(", "))
    }
}

/// The wire document, or one of its `sort`/`page` fields, has the wrong shape.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid query document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("query document must be a mapping, found {found}")]
    NotADocument { found: &'static str },

    #[error("\"{field}\" {reason}")]
    Field { field: &'static str, reason: String },

    #[error("invalid \"filter\": {0}")]
    Filter(#[from] ParseError),
}

impl DecodeError {
    pub(crate) fn field(field: &'static str, reason: impl Into<String>) -> Self {
        DecodeError::Field {
            field,
            reason: reason.into(),
        }
    }

    /// The top-level wire field the error refers to, if any.
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            DecodeError::Field { field, .. } => Some(*field),
            DecodeError::Filter(_) => Some(query_model::document::FILTER),
            DecodeError::Json(_) | DecodeError::NotADocument { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
