//! Cursor pagination.
//!
//! Every list endpoint answers with the same envelope:
//!
//! ```json
//! {"object": "list", "data": [...], "first_id": "...", "last_id": "...", "has_more": true}
//! ```
//!
//! [`paginate`] walks such an endpoint page by page. A walk stops as soon as
//! a page reports `has_more: false` *or* comes back empty, so an inconsistent
//! server cannot trap it in a loop. The cursor for the next page is the
//! page's `last_id`, falling back to the `id` of its final record when the
//! envelope omits `last_id`.

use std::future::Future;

use async_stream::try_stream;
use futures_core::Stream;
use futures_util::TryStreamExt;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::Result;
use crate::resources::null_as_default;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A validated page size in `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    /// Clamp a requested size. Anything outside `1..=100` becomes 100.
    pub fn new(requested: i64) -> Self {
        if (1..=i64::from(MAX_PAGE_SIZE)).contains(&requested) {
            Self(requested as u32)
        } else {
            Self(MAX_PAGE_SIZE)
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(MAX_PAGE_SIZE)
    }
}

/// A record that can serve as a pagination cursor.
pub trait Identified {
    /// The record's ID, unique within its resource family.
    fn id(&self) -> &str;
}

/// One page of a list response.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub data: Vec<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_more: bool,
    #[serde(default)]
    pub first_id: Option<String>,
    #[serde(default)]
    pub last_id: Option<String>,
}

impl<T> Page<T> {
    /// A page with the given records and metadata.
    pub fn new(data: Vec<T>, has_more: bool, last_id: Option<&str>) -> Self {
        Self {
            data,
            has_more,
            first_id: None,
            last_id: last_id.map(str::to_string),
        }
    }
}

impl<T: Identified> Page<T> {
    /// Cursor for the page after this one, or `None` if the walk is over.
    pub fn next_cursor(&self) -> Option<String> {
        if !self.has_more {
            return None;
        }
        let last = self.data.last()?;
        match self.last_id.as_deref() {
            Some(id) if !id.is_empty() => Some(id.to_string()),
            _ => Some(last.id().to_string()),
        }
    }
}

/// Parameters for fetching a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: PageSize,
    /// `None` requests the first page.
    pub after: Option<String>,
}

impl PageRequest {
    /// Query parameters: `limit`, plus `after` when a cursor is set.
    pub fn query(&self) -> Vec<(String, String)> {
        let mut query = vec![("limit".to_string(), self.limit.get().to_string())];
        if let Some(after) = &self.after {
            query.push(("after".to_string(), after.clone()));
        }
        query
    }
}

/// Lazily walk every page produced by `fetch`, yielding records in page order.
///
/// Pages are fetched strictly one after another; the first error ends the
/// stream after the records of earlier pages have been yielded.
pub fn paginate<T, F, Fut>(limit: PageSize, mut fetch: F) -> impl Stream<Item = Result<T>>
where
    T: Identified,
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    try_stream! {
        let mut after: Option<String> = None;
        let mut pages = 0usize;
        loop {
            let request = PageRequest { limit, after: after.take() };
            trace!(?request, "fetching page");

            let page = fetch(request).await?;
            pages += 1;

            let next = page.next_cursor();
            debug!(page = pages, records = page.data.len(), has_more = page.has_more, "page received");

            for record in page.data {
                yield record;
            }

            match next {
                Some(cursor) => after = Some(cursor),
                None => break,
            }
        }
    }
}

/// Collect every record from a paginated walk.
pub async fn list_all<T, F, Fut>(limit: PageSize, fetch: F) -> Result<Vec<T>>
where
    T: Identified,
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    paginate(limit, fetch).try_collect().await
}
