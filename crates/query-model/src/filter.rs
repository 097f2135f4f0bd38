//! The filter tree: a boolean expression over document fields.
//!
//! Nodes are immutable once built. Group nodes (`AND`, `OR`) and `IN` always
//! hold at least one operand; the constructors reject empty operand lists so
//! a tree that exists is always well formed.

use crate::{
    core::{operator::Operator, scalar::Scalar},
    error::ModelError,
};
use serde::{Serialize, Serializer, ser::SerializeMap};

/// `field == value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equal {
    key: String,
    value: Scalar,
}

impl Equal {
    pub fn new(key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Scalar {
        &self.value
    }
}

/// `field` equals any of `values`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct In {
    key: String,
    values: Vec<Scalar>,
}

impl In {
    pub fn new(key: impl Into<String>, values: Vec<Scalar>) -> Result<Self, ModelError> {
        if values.is_empty() {
            return Err(ModelError::EmptyOperand(Operator::In));
        }
        Ok(Self {
            key: key.into(),
            values,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn values(&self) -> &[Scalar] {
        &self.values
    }
}

/// Conjunction of child filters. Child order carries no meaning but is kept
/// so translated output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct And {
    children: Vec<FilterNode>,
}

impl And {
    pub fn new(children: Vec<FilterNode>) -> Result<Self, ModelError> {
        if children.is_empty() {
            return Err(ModelError::EmptyOperand(Operator::And));
        }
        Ok(Self { children })
    }

    pub fn children(&self) -> &[FilterNode] {
        &self.children
    }
}

/// Disjunction of child filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Or {
    children: Vec<FilterNode>,
}

impl Or {
    pub fn new(children: Vec<FilterNode>) -> Result<Self, ModelError> {
        if children.is_empty() {
            return Err(ModelError::EmptyOperand(Operator::Or));
        }
        Ok(Self { children })
    }

    pub fn children(&self) -> &[FilterNode] {
        &self.children
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterNode {
    Equal(Equal),
    In(In),
    And(And),
    Or(Or),
}

impl FilterNode {
    pub fn equal(key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        FilterNode::Equal(Equal::new(key, value))
    }

    pub fn in_values(key: impl Into<String>, values: Vec<Scalar>) -> Result<Self, ModelError> {
        In::new(key, values).map(FilterNode::In)
    }

    pub fn and(children: Vec<FilterNode>) -> Result<Self, ModelError> {
        And::new(children).map(FilterNode::And)
    }

    pub fn or(children: Vec<FilterNode>) -> Result<Self, ModelError> {
        Or::new(children).map(FilterNode::Or)
    }

    pub fn kind(&self) -> Operator {
        match self {
            FilterNode::Equal(_) => Operator::Eq,
            FilterNode::In(_) => Operator::In,
            FilterNode::And(_) => Operator::And,
            FilterNode::Or(_) => Operator::Or,
        }
    }

    /// Child filters of a group node; empty for `EQ` and `IN`.
    pub fn children(&self) -> &[FilterNode] {
        match self {
            FilterNode::And(and) => and.children(),
            FilterNode::Or(or) => or.children(),
            FilterNode::Equal(_) | FilterNode::In(_) => &[],
        }
    }

    /// Number of node levels: a lone comparison has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(FilterNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Field keys referenced by the tree, in first-appearance order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        self.collect_keys(&mut keys);
        keys
    }

    fn collect_keys<'a>(&'a self, keys: &mut Vec<&'a str>) {
        let key = match self {
            FilterNode::Equal(eq) => eq.key(),
            FilterNode::In(i) => i.key(),
            FilterNode::And(_) | FilterNode::Or(_) => {
                for child in self.children() {
                    child.collect_keys(keys);
                }
                return;
            }
        };
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
}

/// Serializes a node back into its grammar form, e.g. `{"EQ": {"a": 1}}`.
impl Serialize for FilterNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        let tag = self.kind().as_str();
        match self {
            FilterNode::Equal(eq) => map.serialize_entry(tag, &Entry(eq.key(), eq.value()))?,
            FilterNode::In(i) => map.serialize_entry(tag, &Entry(i.key(), i.values()))?,
            FilterNode::And(and) => map.serialize_entry(tag, and.children())?,
            FilterNode::Or(or) => map.serialize_entry(tag, or.children())?,
        }
        map.end()
    }
}

/// A single-entry mapping `{key: value}`.
struct Entry<'a, V: ?Sized>(&'a str, &'a V);

impl<V: Serialize + ?Sized> Serialize for Entry<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0, self.1)?;
        map.end()
    }
}
