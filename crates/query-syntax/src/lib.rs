//! Parsing of untyped query documents into the typed query model.

pub mod decode;
pub mod error;
pub mod parser;
pub mod settings;

pub use decode::{DocumentDecoder, decode_document, decode_str};
pub use error::{DecodeError, ParseError, SettingsError};
pub use parser::{FilterParser, parse_filter};
pub use settings::ParseSettings;

use serde_json::Value;

/// Human-readable name of a JSON value's shape, used in error messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
