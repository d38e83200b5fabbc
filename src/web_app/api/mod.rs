// web_app/api/mod.rs - Upstream admin API access (SSR only)
//
// This module holds the HTTP client for the API manager's REST APIs and
// the key manager and endpoint certificate calls built on it. Both
// collections come back whole from upstream, so `window` does search and
// paging here.

pub mod client;
pub mod endpoint_certificates;
pub mod key_managers;

use crate::web_app::list::{ListResponse, PageRequest, Pagination};

/// Filter by the request's search term, then cut the requested page
pub fn window<T, F>(items: Vec<T>, request: &PageRequest, matches: F) -> ListResponse<T>
where
    F: Fn(&T, &str) -> bool,
{
    let matching: Vec<T> = items
        .into_iter()
        .filter(|item| matches(item, &request.query))
        .collect();

    let total = matching.len() as u64;
    let offset = usize::try_from(request.offset).unwrap_or(usize::MAX);
    let list = matching
        .into_iter()
        .skip(offset)
        .take(request.limit as usize)
        .collect();

    ListResponse {
        list,
        pagination: Pagination {
            total,
            offset: Some(request.offset),
            limit: Some(request.limit),
        },
    }
}
