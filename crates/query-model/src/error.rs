use crate::core::operator::Operator;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An `IN`, `AND` or `OR` node was built without operands.
    #[error("{0} requires at least one operand")]
    EmptyOperand(Operator),

    #[error("unsupported filter operator \"{0}\"")]
    UnsupportedOperator(String),

    #[error("unsupported sort order \"{0}\", expected ASC or DESC")]
    UnsupportedSortOrder(String),
}
