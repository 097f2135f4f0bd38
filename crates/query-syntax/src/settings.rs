//! Limits applied while decoding query documents.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const ENV_MAX_DEPTH: &str = "QUERYDOC_MAX_DEPTH";
pub const ENV_MAX_IN_VALUES: &str = "QUERYDOC_MAX_IN_VALUES";
pub const ENV_MAX_PAGE_LIMIT: &str = "QUERYDOC_MAX_PAGE_LIMIT";

/// Every environment variable read by [`ParseSettings::with_env_overrides`].
pub const ENV_VARS: [&str; 3] = [ENV_MAX_DEPTH, ENV_MAX_IN_VALUES, ENV_MAX_PAGE_LIMIT];

const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseSettings {
    /// Maximum nesting of `AND`/`OR` groups in a filter tree. A bare `EQ` or
    /// `IN` has no groups; `{"AND": [{"EQ": ...}]}` nests one.
    pub max_depth: usize,

    /// Upper bound on the number of values in one `IN` operand.
    pub max_in_values: Option<usize>,

    /// Upper bound on `page.limit`.
    pub max_page_limit: Option<u64>,
}

impl Default for ParseSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_in_values: None,
            max_page_limit: None,
        }
    }
}

impl ParseSettings {
    /// Reads settings from JSON. Missing fields keep their defaults.
    pub fn from_json_str(source: &str) -> Result<Self, SettingsError> {
        let settings: ParseSettings = serde_json::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_depth == 0 {
            return Err(invalid("max_depth", "must be at least 1"));
        }
        if self.max_in_values == Some(0) {
            return Err(invalid("max_in_values", "must be at least 1"));
        }
        if self.max_page_limit == Some(0) {
            return Err(invalid("max_page_limit", "must be at least 1"));
        }
        Ok(())
    }

    /// Applies `QUERYDOC_*` overrides from the given variables. Unrelated
    /// variables are ignored.
    pub fn with_env_overrides<I>(mut self, vars: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in vars {
            match name.as_str() {
                ENV_MAX_DEPTH => self.max_depth = parse_number(&name, &value)?,
                ENV_MAX_IN_VALUES => self.max_in_values = Some(parse_number(&name, &value)?),
                ENV_MAX_PAGE_LIMIT => self.max_page_limit = Some(parse_number(&name, &value)?),
                _ => continue,
            }
            debug!("Applied settings override {}={}", name, value);
        }
        self.validate()?;
        Ok(self)
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, SettingsError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(name, format!("expected a positive integer, got \"{value}\"")))
}

fn invalid(name: &str, reason: impl Into<String>) -> SettingsError {
    SettingsError::InvalidValue {
        name: name.to_string(),
        reason: reason.into(),
    }
}
