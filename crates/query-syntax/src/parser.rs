//! Recursive-descent parser for the filter grammar.
//!
//! ```text
//! filter := {"EQ":  {key: scalar}}
//!         | {"IN":  {key: [scalar, ...]}}
//!         | {"AND": [filter, ...]}
//!         | {"OR":  [filter, ...]}
//! ```
//!
//! Children are parsed before their parent is built, and the first error
//! anywhere in the document aborts the parse.

use crate::{error::ParseError, json_type, settings::ParseSettings};
use query_model::{And, Equal, FilterNode, In, NodePath, Operator, Or, Scalar};
use serde_json::{Map, Value};
use tracing::debug;

/// Parses a filter document with the default settings.
pub fn parse_filter(doc: &Value) -> Result<FilterNode, ParseError> {
    FilterParser::default().parse(doc)
}

#[derive(Debug, Clone, Default)]
pub struct FilterParser {
    settings: ParseSettings,
}

impl FilterParser {
    pub fn new(settings: ParseSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ParseSettings {
        &self.settings
    }

    pub fn parse(&self, doc: &Value) -> Result<FilterNode, ParseError> {
        self.parse_node(doc, &NodePath::root(), 0).inspect_err(|err| {
            debug!(path = %err.path(), "Rejected filter document: {}", err);
        })
    }

    /// `depth` is the number of `AND`/`OR` groups enclosing `value`.
    fn parse_node(
        &self,
        value: &Value,
        path: &NodePath,
        depth: usize,
    ) -> Result<FilterNode, ParseError> {
        let map = value.as_object().ok_or_else(|| ParseError::NotAMapping {
            path: path.clone(),
            found: json_type(value),
        })?;

        let (tag, operand) = single_entry(map).ok_or_else(|| ParseError::OperatorCount {
            path: path.clone(),
            keys: map.keys().cloned().collect(),
        })?;

        let operator: Operator = tag.parse().map_err(|_| ParseError::UnsupportedOperator {
            path: path.clone(),
            operator: tag.clone(),
        })?;

        let path = path.operator(operator);
        if operator.is_group() && depth >= self.settings.max_depth {
            return Err(ParseError::TooDeep {
                path,
                max_depth: self.settings.max_depth,
            });
        }

        match operator {
            Operator::Eq => self.parse_equal(operand, &path).map(FilterNode::Equal),
            Operator::In => self.parse_in(operand, &path).map(FilterNode::In),
            Operator::And => {
                let children = self.parse_children(operator, operand, &path, depth)?;
                And::new(children)
                    .map(FilterNode::And)
                    .map_err(|_| empty_operand(&path, operator))
            }
            Operator::Or => {
                let children = self.parse_children(operator, operand, &path, depth)?;
                Or::new(children)
                    .map(FilterNode::Or)
                    .map_err(|_| empty_operand(&path, operator))
            }
        }
    }

    fn parse_equal(&self, operand: &Value, path: &NodePath) -> Result<Equal, ParseError> {
        let (key, value) = field_operand(Operator::Eq, operand, path)?;
        let scalar = Scalar::from_json(value).ok_or_else(|| ParseError::NonScalarValue {
            path: path.field(key),
            operator: Operator::Eq,
            found: json_type(value),
        })?;
        Ok(Equal::new(key.as_str(), scalar))
    }

    fn parse_in(&self, operand: &Value, path: &NodePath) -> Result<In, ParseError> {
        let (key, value) = field_operand(Operator::In, operand, path)?;
        let path = path.field(key);

        let items = value.as_array().ok_or_else(|| ParseError::OperandShape {
            path: path.clone(),
            operator: Operator::In,
            expected: "a sequence of scalars",
            found: json_type(value),
        })?;

        if let Some(limit) = self.settings.max_in_values
            && items.len() > limit
        {
            return Err(ParseError::TooManyValues {
                path,
                count: items.len(),
                limit,
            });
        }

        let values = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                Scalar::from_json(item).ok_or_else(|| ParseError::NonScalarValue {
                    path: path.index(i),
                    operator: Operator::In,
                    found: json_type(item),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        In::new(key.as_str(), values).map_err(|_| empty_operand(&path, Operator::In))
    }

    fn parse_children(
        &self,
        operator: Operator,
        operand: &Value,
        path: &NodePath,
        depth: usize,
    ) -> Result<Vec<FilterNode>, ParseError> {
        let items = operand.as_array().ok_or_else(|| ParseError::OperandShape {
            path: path.clone(),
            operator,
            expected: "a sequence of filters",
            found: json_type(operand),
        })?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.parse_node(item, &path.index(i), depth + 1))
            .collect()
    }
}

/// Splits the `{key: value}` operand of `EQ`/`IN`.
fn field_operand<'a>(
    operator: Operator,
    operand: &'a Value,
    path: &NodePath,
) -> Result<(&'a String, &'a Value), ParseError> {
    let map = operand.as_object().ok_or_else(|| ParseError::OperandShape {
        path: path.clone(),
        operator,
        expected: "a mapping with one key",
        found: json_type(operand),
    })?;

    single_entry(map).ok_or_else(|| ParseError::FieldCount {
        path: path.clone(),
        operator,
        keys: map.keys().cloned().collect(),
    })
}

fn single_entry(map: &Map<String, Value>) -> Option<(&String, &Value)> {
    if map.len() == 1 {
        map.iter().next()
    } else {
        None
    }
}

fn empty_operand(path: &NodePath, operator: Operator) -> ParseError {
    ParseError::EmptyOperand {
        path: path.clone(),
        operator,
    }
}
