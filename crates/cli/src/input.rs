use crate::error::CliError;
use query_syntax::{ParseSettings, settings::ENV_VARS};
use std::io::Read;
use tracing::info;

/// Reads the query document from a file, or from stdin when `path` is `-`.
pub fn read_source(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Loads parse settings from an optional JSON file, then applies
/// `QUERYDOC_*` overrides from `vars`.
pub fn load_settings<I>(path: Option<&str>, vars: I) -> Result<ParseSettings, CliError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let settings = match path {
        Some(path) => {
            info!("Loading settings from {}", path);
            ParseSettings::from_json_str(&std::fs::read_to_string(path)?)?
        }
        None => ParseSettings::default(),
    };
    Ok(settings.with_env_overrides(vars)?)
}

/// Collects the `QUERYDOC_*` settings overrides that `lookup` can resolve.
/// Other variables are never read.
pub fn settings_env<F>(lookup: F) -> Vec<(String, String)>
where
    F: Fn(&str) -> Option<String>,
{
    ENV_VARS
        .iter()
        .filter_map(|name| lookup(name).map(|value| (name.to_string(), value)))
        .collect()
}
