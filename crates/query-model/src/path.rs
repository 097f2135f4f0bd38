//! Location of a node inside a filter document, used to point error messages
//! at the offending part of the tree.

use crate::core::operator::Operator;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// The operator tag of a filter node, e.g. `AND`.
    Operator(Operator),
    /// Position of a child inside an `AND`/`OR` group or of a value inside `IN`.
    Index(usize),
    /// Field key inside an `EQ`/`IN` operand.
    Field(String),
}

/// A path such as `filter.AND[1].IN.status`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath {
    segments: Vec<PathSegment>,
}

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns a new path extended by `segment`, leaving `self` untouched.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    pub fn operator(&self, op: Operator) -> Self {
        self.child(PathSegment::Operator(op))
    }

    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    pub fn field(&self, key: &str) -> Self {
        self.child(PathSegment::Field(key.to_string()))
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("filter")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Operator(op) => write!(f, ".{op}")?,
                PathSegment::Index(i) => write!(f, "[{i}]")?,
                PathSegment::Field(key) => write!(f, ".{key}")?,
            }
        }
        Ok(())
    }
}
