// tests/common/mod.rs - Shared fixtures for the list controller tests
//
// Rows, columns and data sources that record what they were asked for.
// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use futures::FutureExt;

use admin_console::web_app::list::{
    ColumnDescriptor, FetchError, ListConfig, ListConfigBuilder, ListResponse, PageRequest,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub name: String,
    pub group: String,
}

pub fn row(id: u32, name: &str, group: &str) -> Row {
    Row {
        id,
        name: name.to_string(),
        group: group.to_string(),
    }
}

pub fn name_column() -> ColumnDescriptor<Row> {
    ColumnDescriptor::new("name", "Name", |r: &Row| r.name.as_str().into()).sortable()
}

pub fn group_column() -> ColumnDescriptor<Row> {
    ColumnDescriptor::new("group", "Group", |r: &Row| r.group.as_str().into()).sortable()
}

pub fn id_column() -> ColumnDescriptor<Row> {
    ColumnDescriptor::new("id", "Id", |r: &Row| i64::from(r.id).into())
}

pub type RequestLog = Arc<Mutex<Vec<PageRequest>>>;

pub fn requests(log: &RequestLog) -> Vec<PageRequest> {
    log.lock().unwrap().clone()
}

pub fn request(limit: u32, offset: u64, query: &str) -> PageRequest {
    PageRequest {
        limit,
        offset,
        query: query.to_string(),
    }
}

/// Remote builder whose fetch answers immediately via `respond` and logs every request
pub fn recording_builder<F>(respond: F) -> (ListConfigBuilder<Row>, RequestLog)
where
    F: Fn(&PageRequest) -> Result<ListResponse<Row>, FetchError> + Send + Sync + 'static,
{
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&log);
    let builder = ListConfig::builder()
        .column(name_column())
        .column(group_column())
        .column(id_column())
        .fetch_page(move |req: PageRequest| {
            seen.lock().unwrap().push(req.clone());
            let outcome = respond(&req);
            async move { outcome }.boxed_local()
        });
    (builder, log)
}

/// Answers every request with `total` and the rows named by the offset
pub fn paged_response(
    total: u64,
) -> impl Fn(&PageRequest) -> Result<ListResponse<Row>, FetchError> + Send + Sync + 'static {
    move |req: &PageRequest| {
        let rows = (req.offset..(req.offset + u64::from(req.limit)).min(total))
            .map(|i| row(i as u32, &format!("item-{}", i), "g"))
            .collect();
        Ok(ListResponse::new(rows, total))
    }
}

pub type Responder = oneshot::Sender<Result<ListResponse<Row>, FetchError>>;

/// Remote builder whose fetches stay pending until the test resolves them
pub fn deferred_builder() -> (ListConfigBuilder<Row>, Arc<Mutex<Vec<Responder>>>) {
    let pending: Arc<Mutex<Vec<Responder>>> = Arc::new(Mutex::new(Vec::new()));
    let queue = Arc::clone(&pending);
    let builder = ListConfig::builder()
        .column(name_column())
        .fetch_page(move |_req: PageRequest| {
            let (tx, rx) = oneshot::channel();
            queue.lock().unwrap().push(tx);
            rx.map(|outcome| {
                outcome.unwrap_or_else(|_| Err(FetchError::Transport("cancelled".to_string())))
            })
            .boxed_local()
        });
    (builder, pending)
}
