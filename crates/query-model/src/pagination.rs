use serde::{Deserialize, Serialize};

/// Page size and continuation cursor.
///
/// `token` is produced and consumed by the backend only; its encoding is
/// never inspected here. A `limit` of 0 leaves the page size to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub limit: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Pagination {
    pub fn new(limit: u64) -> Self {
        Self { limit, token: None }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// True when neither a limit nor a token was supplied.
    pub fn is_unset(&self) -> bool {
        self.limit == 0 && self.token.is_none()
    }
}
