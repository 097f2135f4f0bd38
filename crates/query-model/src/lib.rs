//! Backend-neutral description of a data-store query: a filter tree, a sort
//! order and a pagination cursor.

pub mod core;
pub mod document;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod path;
pub mod sort;

pub use crate::core::{operator::Operator, scalar::Scalar};
pub use document::QueryDocument;
pub use error::ModelError;
pub use filter::{And, Equal, FilterNode, In, Or};
pub use pagination::Pagination;
pub use path::{NodePath, PathSegment};
pub use sort::{SortOrder, Sorting};
