//! Decoding of the top-level wire document into a [`QueryDocument`].

use crate::{error::DecodeError, json_type, parser::FilterParser, settings::ParseSettings};
use query_model::{
    Pagination, QueryDocument, Sorting,
    document::{FILTER, PAGE, SORT},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

/// Decodes a wire document with the default settings.
pub fn decode_document(doc: &Value) -> Result<QueryDocument, DecodeError> {
    DocumentDecoder::default().decode(doc)
}

/// Decodes a wire document from JSON text with the default settings.
pub fn decode_str(source: &str) -> Result<QueryDocument, DecodeError> {
    DocumentDecoder::default().decode_str(source)
}

#[derive(Debug, Clone, Default)]
pub struct DocumentDecoder {
    parser: FilterParser,
}

impl DocumentDecoder {
    pub fn new(settings: ParseSettings) -> Self {
        Self {
            parser: FilterParser::new(settings),
        }
    }

    pub fn settings(&self) -> &ParseSettings {
        self.parser.settings()
    }

    pub fn decode_str(&self, source: &str) -> Result<QueryDocument, DecodeError> {
        let value: Value = serde_json::from_str(source)?;
        self.decode(&value)
    }

    /// Fields are decoded in `filter`, `sort`, `page` order and the first
    /// failure is returned. Unknown top-level fields are ignored.
    pub fn decode(&self, doc: &Value) -> Result<QueryDocument, DecodeError> {
        let map = doc.as_object().ok_or_else(|| DecodeError::NotADocument {
            found: json_type(doc),
        })?;

        let mut query = QueryDocument::new();

        if let Some(filter) = map.get(FILTER) {
            query.filter = Some(self.parser.parse(filter)?);
        }
        if let Some(sort) = map.get(SORT) {
            query.sort = decode_sort(sort)?;
        }
        if let Some(page) = map.get(PAGE) {
            query.page = self.decode_page(page)?;
        }

        trace!(
            filtered = query.filter.is_some(),
            sort_keys = query.sort.len(),
            limit = query.page.limit,
            "Decoded query document"
        );
        Ok(query)
    }

    fn decode_page(&self, value: &Value) -> Result<Pagination, DecodeError> {
        if !value.is_object() {
            return Err(DecodeError::field(
                PAGE,
                format!("must be a mapping, found {}", json_type(value)),
            ));
        }

        let page =
            Pagination::deserialize(value).map_err(|e| DecodeError::field(PAGE, e.to_string()))?;

        if let Some(max) = self.settings().max_page_limit
            && page.limit > max
        {
            debug!("Rejected page limit {} above maximum {}", page.limit, max);
            return Err(DecodeError::field(
                PAGE,
                format!("limit {} exceeds the maximum of {}", page.limit, max),
            ));
        }

        Ok(page)
    }
}

fn decode_sort(value: &Value) -> Result<Vec<Sorting>, DecodeError> {
    let items = value.as_array().ok_or_else(|| {
        DecodeError::field(SORT, format!("must be a sequence, found {}", json_type(value)))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if !item.is_object() {
                return Err(DecodeError::field(
                    SORT,
                    format!("entry {i} must be a mapping, found {}", json_type(item)),
                ));
            }
            Sorting::deserialize(item)
                .map_err(|e| DecodeError::field(SORT, format!("entry {i}: {e}")))
        })
        .collect()
}
