use query_model::{NodePath, Operator};
use thiserror::Error;

/// A translator rejected a node or failed to finalize the native query.
#[derive(Debug, Error)]
pub enum BuildError<E: std::error::Error + 'static> {
    #[error("failed to translate {operator} node at {path}: {source}")]
    Translation {
        operator: Operator,
        path: NodePath,
        #[source]
        source: E,
    },

    #[error("failed to finalize native query: {0}")]
    Finalize(#[source] E),
}

impl<E: std::error::Error + 'static> BuildError<E> {
    /// The error reported by the translator.
    pub fn translator_error(&self) -> &E {
        match self {
            BuildError::Translation { source, .. } => source,
            BuildError::Finalize(source) => source,
        }
    }

    pub fn into_translator_error(self) -> E {
        match self {
            BuildError::Translation { source, .. } => source,
            BuildError::Finalize(source) => source,
        }
    }
}
