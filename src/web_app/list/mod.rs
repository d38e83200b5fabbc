// web_app/list/mod.rs - Paginated, searchable, server-backed list view
//
// The framework-free half of the resource list: query state, the fetch
// ticket protocol, local sorting and the rendering policy. The Leptos
// component in components/list.rs drives a `ListController` from signals.
//
// Structure:
// - query.rs: ListQuery and the PageRequest sent to data sources
// - source.rs: ListResult, wire ListResponse, FetchPage, DataSource
// - columns.rs / actions.rs: static column and row action contracts
// - sort.rs: stable three-way comparator sort
// - config.rs: validated configuration
// - state.rs: ListController state machine

pub mod actions;
pub mod columns;
pub mod config;
pub mod error;
pub mod query;
pub mod sort;
pub mod source;
pub mod state;

pub use actions::{ActionLabel, ActionOutcome, Refresh, RowAction};
pub use columns::{CellValue, ColumnDescriptor};
pub use config::{CreateAction, EmptyState, ListConfig, ListConfigBuilder};
pub use error::{ConfigError, FetchError};
pub use query::{ListQuery, PageRequest};
pub use sort::SortDirection;
pub use source::{DataSource, FetchFuture, FetchPage, ListResponse, ListResult, Pagination};
pub use state::{ActiveSort, FetchTicket, ListController, ListPhase, PageInfo, RenderPlan, Settlement};
