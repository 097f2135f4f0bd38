//! Translation of query documents into backend-native queries.
//!
//! A backend implements [`Translator`]; [`QueryBuilder`] walks the filter tree
//! of a [`QueryDocument`](query_model::QueryDocument) and drives it.

pub mod builder;
pub mod error;
pub mod translator;

pub use builder::{QueryBuilder, build_query};
pub use error::BuildError;
pub use translator::Translator;
