//! Resource-envelope decoding and pagination normalization.
//!
//! Wire shape: `{ "data": {id, type, attributes} | [ ... ], "meta": {...} }`.
//! Each record is flattened into `{id, ...attributes}` before it reaches the
//! domain type. Pagination metadata arrives either flat
//! (`current_page`, `total_pages`, ...) or nested under `page`
//! (`number`, `totalPages`, `total`, `size`); both decode into one
//! [`PaginationMeta`] here so resource clients never repeat the mapping.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ContractViolation};
use crate::config::DEFAULT_PER_PAGE;

/// Canonical pagination block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u32,
    pub per_page: u32,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self { current_page: 1, total_pages: 1, total_count: 0, per_page: DEFAULT_PER_PAGE }
    }
}

impl PaginationMeta {
    #[must_use]
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }
}

/// One page of flattened records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Deserialize)]
struct RawResource {
    id: serde_json::Value,
    #[serde(default)]
    attributes: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawData {
    Many(Vec<RawResource>),
    One(RawResource),
}

#[derive(Debug, Default, Deserialize)]
struct WirePage {
    number: Option<u32>,
    #[serde(rename = "totalPages")]
    total_pages: Option<u32>,
    total: Option<u32>,
    size: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct WireMeta {
    current_page: Option<u32>,
    total_pages: Option<u32>,
    total_count: Option<u32>,
    per_page: Option<u32>,
    page: Option<WirePage>,
}

impl WireMeta {
    /// Nested `page` values win over flat ones. Absent or zero fields take
    /// defaults.
    fn normalize(self, item_count: usize) -> PaginationMeta {
        fn pick(nested: Option<u32>, flat: Option<u32>) -> Option<u32> {
            nested.filter(|n| *n > 0).or(flat.filter(|n| *n > 0))
        }
        let page = self.page.unwrap_or_default();
        let fallback_count = u32::try_from(item_count).unwrap_or(u32::MAX);
        PaginationMeta {
            current_page: pick(page.number, self.current_page).unwrap_or(1),
            total_pages: pick(page.total_pages, self.total_pages).unwrap_or(1),
            total_count: pick(page.total, self.total_count).unwrap_or(fallback_count),
            per_page: pick(page.size, self.per_page).unwrap_or(DEFAULT_PER_PAGE),
        }
    }
}

/// A decoded response document whose cardinality is not yet resolved.
#[derive(Debug, Deserialize)]
pub struct Document {
    data: RawData,
    #[serde(default)]
    meta: Option<WireMeta>,
}

impl Document {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body is not an envelope.
    pub fn parse(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Resolve to exactly one record.
    ///
    /// # Errors
    ///
    /// Returns `ContractViolation::ExpectedSingleRecord` for a collection, or
    /// `ApiError::Decode` if the record does not fit `T`.
    pub fn into_one<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self.data {
            RawData::One(resource) => flatten(resource),
            RawData::Many(_) => Err(ContractViolation::ExpectedSingleRecord.into()),
        }
    }

    /// Resolve to a page. A single record becomes a one-element page.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if any record does not fit `T`.
    pub fn into_page<T: DeserializeOwned>(self) -> Result<Page<T>, ApiError> {
        let resources = match self.data {
            RawData::Many(resources) => resources,
            RawData::One(resource) => vec![resource],
        };
        let items = resources.into_iter().map(flatten).collect::<Result<Vec<T>, _>>()?;
        let meta = self.meta.unwrap_or_default().normalize(items.len());
        Ok(Page { items, meta })
    }
}

fn flatten<T: DeserializeOwned>(resource: RawResource) -> Result<T, ApiError> {
    let mut attributes = resource.attributes;
    attributes.insert("id".to_owned(), resource.id);
    serde_json::from_value(serde_json::Value::Object(attributes)).map_err(|e| ApiError::Decode(e.to_string()))
}
