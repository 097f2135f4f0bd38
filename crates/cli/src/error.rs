use query_builder::BuildError;
use query_syntax::{DecodeError, SettingsError};
use std::convert::Infallible;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode the query document: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to load settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Failed to render the query document: {0}")]
    Build(#[from] BuildError<Infallible>),

    #[error("Invalid log level \"{0}\"")]
    InvalidLogLevel(String),
}
