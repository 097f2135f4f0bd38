pub mod operator;
pub mod scalar;
