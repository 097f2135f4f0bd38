use crate::{filter::FilterNode, pagination::Pagination, sort::Sorting};
use serde::Serialize;

/// Wire field holding the filter tree.
pub const FILTER: &str = "filter";
/// Wire field holding the sort sequence.
pub const SORT: &str = "sort";
/// Wire field holding the pagination mapping.
pub const PAGE: &str = "page";

/// A decoded, backend-neutral query.
///
/// Serializing a document produces its canonical wire form: absent parts are
/// omitted and every sort entry carries an explicit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterNode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<Sorting>,
    #[serde(skip_serializing_if = "Pagination::is_unset")]
    pub page: Pagination,
}

impl QueryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: FilterNode) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_sort(mut self, sort: Vec<Sorting>) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }

    /// True when the query matches every record.
    pub fn is_unfiltered(&self) -> bool {
        self.filter.is_none()
    }
}
