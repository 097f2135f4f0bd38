use crate::error::CliError;
use query_model::QueryDocument;

pub fn to_json(doc: &QueryDocument, compact: bool) -> Result<String, CliError> {
    let json = if compact {
        serde_json::to_string(doc)
    } else {
        serde_json::to_string_pretty(doc)
    };
    json.map_err(CliError::JsonSerialize)
}

/// Writes `content` to `path`, or prints it when no path is given.
pub fn emit(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, content)?,
        None => println!("{content}"),
    }
    Ok(())
}
