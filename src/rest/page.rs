//! One fetched page of list results.
//!
//! List responses wrap their record array under a resource-specific key and
//! carry a `meta` object describing the page:
//!
//! ```json
//! {
//!   "interactions": [ ... ],
//!   "meta": {
//!     "page": 0,
//!     "page_size": 50,
//!     "first_page_url": "https://...?PageSize=50&Page=0",
//!     "previous_page_url": null,
//!     "next_page_url": "https://...?PageSize=50&PageToken=PAKI...",
//!     "url": "https://...?PageSize=50&Page=0",
//!     "key": "interactions"
//!   }
//! }
//! ```
//!
//! The record array is read under `meta.key` — different families name their
//! arrays differently (`interactions`, `records`, `triggers`) and the key in
//! the metadata is authoritative.
//!
//! A page is either *has-more* (a `next_page_url` is present) or *exhausted*.
//! Navigating from an exhausted page is a no-op returning `Ok(None)`, never
//! an error; the same holds for `previous_page` on a first page. An empty
//! record array with `next_page_url: null` is a valid terminal page.

use serde::Deserialize;
use serde_json::Value;

use crate::rest::errors::RestError;
use crate::rest::instance::ResourceInstance;
use crate::rest::resource::Resource;
use crate::rest::solution::Solution;
use crate::rest::Version;

/// Pagination metadata carried in every list response body.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    /// Zero-based index of this page.
    pub page: u64,
    /// The page size the server applied (which may differ from the hint).
    pub page_size: u64,
    /// Name of the body field holding the record array.
    pub key: String,
    /// Absolute URL of the first page.
    #[serde(default)]
    pub first_page_url: Option<String>,
    /// Absolute URL of the previous page, when one exists.
    #[serde(default)]
    pub previous_page_url: Option<String>,
    /// Absolute URL of the next page, when one exists.
    #[serde(default)]
    pub next_page_url: Option<String>,
    /// Absolute URL of this page.
    #[serde(default)]
    pub url: Option<String>,
}

/// One fetched page of results for a resource family.
///
/// A page is an immutable snapshot: records in server order, the metadata
/// needed to navigate, and the version/solution needed to materialize
/// instances. Advancing produces a *new* page.
#[derive(Debug, Clone)]
pub struct RecordPage<T: Resource> {
    version: Version,
    solution: Solution,
    records: Vec<T>,
    meta: PageMeta,
}

impl<T: Resource> RecordPage<T> {
    /// Builds a page from a list response body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MalformedResponse`] when the body is missing its
    /// `meta` object, the `meta.key` record array is absent or not an array,
    /// or a record does not deserialize into the resource's field shape.
    pub fn from_body(
        version: Version,
        solution: Solution,
        body: &Value,
        url: &str,
    ) -> Result<Self, RestError> {
        let malformed = |detail: String| RestError::MalformedResponse {
            url: url.to_string(),
            detail,
        };

        let meta_value = body
            .get("meta")
            .ok_or_else(|| malformed("list response is missing 'meta'".to_string()))?;
        let meta: PageMeta = serde_json::from_value(meta_value.clone())
            .map_err(|e| malformed(format!("invalid 'meta' object: {e}")))?;

        let raw_records = body
            .get(&meta.key)
            .ok_or_else(|| malformed(format!("missing record array '{}'", meta.key)))?
            .as_array()
            .ok_or_else(|| malformed(format!("'{}' is not an array", meta.key)))?;

        let records = raw_records
            .iter()
            .map(|raw| {
                serde_json::from_value(raw.clone()).map_err(|e| {
                    malformed(format!("record does not deserialize as {}: {e}", T::NAME))
                })
            })
            .collect::<Result<Vec<T>, RestError>>()?;

        Ok(Self {
            version,
            solution,
            records,
            meta,
        })
    }

    /// Returns the records of this page in server order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Returns the number of records in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the pagination metadata of this page.
    #[must_use]
    pub const fn meta(&self) -> &PageMeta {
        &self.meta
    }

    /// Returns `true` while a next page exists.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.meta.next_page_url.is_some()
    }

    /// Fetches the next page.
    ///
    /// Returns `Ok(None)` when this page is exhausted (no `next_page_url`).
    /// The stored URL is issued verbatim; it already encodes page size and
    /// cursor.
    ///
    /// # Errors
    ///
    /// Propagates the request's [`RestError`] when fetching fails.
    pub async fn next_page(&self) -> Result<Option<Self>, RestError> {
        self.fetch_adjacent(self.meta.next_page_url.as_deref()).await
    }

    /// Fetches the previous page.
    ///
    /// Returns `Ok(None)` when no `previous_page_url` is present.
    ///
    /// # Errors
    ///
    /// Propagates the request's [`RestError`] when fetching fails.
    pub async fn previous_page(&self) -> Result<Option<Self>, RestError> {
        self.fetch_adjacent(self.meta.previous_page_url.as_deref())
            .await
    }

    async fn fetch_adjacent(&self, url: Option<&str>) -> Result<Option<Self>, RestError> {
        let Some(url) = url else {
            return Ok(None);
        };

        let body = self.version.page(url, None).await?;
        Self::from_body(self.version.clone(), self.solution.clone(), &body, url).map(Some)
    }

    /// Materializes every record of this page as an instance, in order.
    #[must_use]
    pub fn instances(&self) -> Vec<ResourceInstance<T>> {
        self.records
            .iter()
            .cloned()
            .map(|record| {
                ResourceInstance::new(self.version.clone(), self.solution.clone(), record)
            })
            .collect()
    }

    /// Consumes the page, materializing every record as an instance.
    #[must_use]
    pub fn into_instances(self) -> Vec<ResourceInstance<T>> {
        let Self {
            version,
            solution,
            records,
            ..
        } = self;

        records
            .into_iter()
            .map(|record| ResourceInstance::new(version.clone(), solution.clone(), record))
            .collect()
    }
}
