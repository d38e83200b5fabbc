// web_app/list/source.rs - Where list rows come from
//
// A list is driven either by an injected async fetch function or by a
// fixed set of items held in memory.

use std::fmt;
use std::sync::Arc;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use super::error::FetchError;
use super::query::PageRequest;

/// One page of rows plus the size of the whole collection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> ListResult<T> {
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }
}

/// Pagination block of a list payload
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Wire shape returned by data sources: `{ list, pagination: { total } }`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub list: Vec<T>,
    pub pagination: Pagination,
}

impl<T> ListResponse<T> {
    pub fn new(list: Vec<T>, total: u64) -> Self {
        Self {
            list,
            pagination: Pagination {
                total,
                ..Pagination::default()
            },
        }
    }
}

impl<T> From<ListResponse<T>> for ListResult<T> {
    fn from(response: ListResponse<T>) -> Self {
        ListResult {
            items: response.list,
            total_count: response.pagination.total,
        }
    }
}

/// The future a fetch function hands back. Browser futures are not `Send`.
pub type FetchFuture<T> = LocalBoxFuture<'static, Result<ListResponse<T>, FetchError>>;

/// Injected asynchronous page fetch
pub struct FetchPage<T>(Arc<dyn Fn(PageRequest) -> FetchFuture<T> + Send + Sync>);

impl<T> FetchPage<T> {
    pub fn new<F>(fetch: F) -> Self
    where
        F: Fn(PageRequest) -> FetchFuture<T> + Send + Sync + 'static,
    {
        Self(Arc::new(fetch))
    }

    pub fn call(&self, request: PageRequest) -> FetchFuture<T> {
        (self.0)(request)
    }
}

impl<T> Clone for FetchPage<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for FetchPage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FetchPage(..)")
    }
}

/// What drives the rows of a list
#[derive(Clone, Debug)]
pub enum DataSource<T> {
    /// Nothing configured; the list shows its empty state
    None,
    /// Server-backed pages
    Remote(FetchPage<T>),
    /// In-memory rows paged and searched client-side
    Static(Vec<T>),
}

impl<T> DataSource<T> {
    pub fn is_configured(&self) -> bool {
        !matches!(self, DataSource::None)
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, DataSource::Remote(_))
    }
}
