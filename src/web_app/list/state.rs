// web_app/list/state.rs - The list controller state machine
//
// Idle (no source) -> Loading -> Loaded | Errored, and back to Loading on
// any query change. Every fetch is issued as a numbered ticket; only the
// most recently issued ticket may change what is displayed.

use std::collections::BTreeSet;

use super::config::{EmptyState, ListConfig, ListConfigBuilder};
use super::error::{ConfigError, FetchError};
use super::query::{ListQuery, PageRequest};
use super::sort::{sort_rows, SortDirection};
use super::source::{DataSource, FetchFuture, ListResponse};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListPhase {
    /// No data source configured
    Idle,
    Loading,
    Loaded,
    /// Last fetch failed; holds the message to display
    Errored(String),
}

/// Identity of one issued fetch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    request: PageRequest,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn request(&self) -> &PageRequest {
        &self.request
    }
}

/// Whether a fetch outcome reached the display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    /// A newer fetch was issued after this one; the outcome was dropped
    Stale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveSort {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// What the view should draw, in priority order
#[derive(Debug, PartialEq, Eq)]
pub enum RenderPlan<'a, T> {
    Empty(&'a EmptyState),
    Loading,
    Error(&'a str),
    NoData(&'a str),
    Table(&'a [T]),
}

/// Pagination footer numbers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u64,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

impl PageInfo {
    fn new(page: u32, page_size: u32, total_count: u64) -> Self {
        let size = u64::from(page_size.max(1));
        let total_pages = total_count.div_ceil(size);
        Self {
            page,
            page_size,
            total_count,
            total_pages,
            can_go_prev: page > 0,
            can_go_next: u64::from(page) + 1 < total_pages,
        }
    }

    /// "6-10 of 12"; "0-0 of 0" when there is nothing to show
    pub fn range_label(&self) -> String {
        if self.total_count == 0 {
            return "0-0 of 0".to_string();
        }
        let size = u64::from(self.page_size);
        let first = (u64::from(self.page) * size + 1).min(self.total_count);
        let last = (u64::from(self.page) * size + size).min(self.total_count);
        format!("{}-{} of {}", first, last, self.total_count)
    }
}

/// Search, paging, sorting and fetch orchestration for one list instance
pub struct ListController<T> {
    config: ListConfig<T>,
    query: ListQuery,
    phase: ListPhase,
    rows: Vec<T>,
    total_count: u64,
    /// Working copy of static items; local sorts reorder this
    catalog: Vec<T>,
    last_issued: u64,
    sort: Option<ActiveSort>,
    /// Indexes into `rows` whose detail line is open
    expanded: BTreeSet<usize>,
}

impl<T: Clone> ListController<T> {
    pub fn new(config: ListConfig<T>) -> Self {
        let query = ListQuery::new(config.initial_page_size);
        let (phase, catalog) = match &config.source {
            DataSource::None => (ListPhase::Idle, Vec::new()),
            DataSource::Remote(_) => (ListPhase::Loading, Vec::new()),
            DataSource::Static(items) => (ListPhase::Loaded, items.clone()),
        };

        let mut controller = Self {
            config,
            query,
            phase,
            rows: Vec::new(),
            total_count: 0,
            catalog,
            last_issued: 0,
            sort: None,
            expanded: BTreeSet::new(),
        };
        if matches!(controller.config.source, DataSource::Static(_)) {
            controller.rebuild_window();
        }
        controller
    }

    /// Validate a configuration and build the controller from it
    pub fn initialize(builder: ListConfigBuilder<T>) -> Result<Self, ConfigError> {
        Ok(Self::new(builder.build()?))
    }

    /// First fetch after the list is shown
    pub fn mount(&mut self) -> Option<FetchTicket> {
        self.issue()
    }

    /// Start over: empty search, first page, same page size
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        self.query.reset();
        if let DataSource::Static(items) = &self.config.source {
            self.catalog = items.clone();
            self.sort = None;
        }
        self.issue()
    }

    /// Submitted search; always goes back to the first page
    pub fn search(&mut self, term: impl Into<String>) -> Option<FetchTicket> {
        if !self.config.search_enabled {
            tracing::debug!("search ignored: search is disabled for this list");
            return None;
        }
        self.query.search_term = term.into();
        self.query.page = 0;
        self.issue()
    }

    pub fn change_page(&mut self, page: u32) -> Option<FetchTicket> {
        self.query.page = page;
        self.issue()
    }

    /// New page size; resets to the first page. Only the configured
    /// options are accepted.
    pub fn change_page_size(&mut self, page_size: u32) -> Option<FetchTicket> {
        if page_size == 0 {
            tracing::debug!("page size change ignored: size must be greater than zero");
            return None;
        }
        if !self.config.page_size_options.contains(&page_size) {
            tracing::debug!(page_size, "page size change ignored: not one of the options");
            return None;
        }
        self.query.page_size = page_size;
        self.query.page = 0;
        self.issue()
    }

    /// Reorder rows already held client-side. Returns false when the
    /// column is unknown or not sortable.
    pub fn sort_locally(&mut self, field: &str, direction: SortDirection) -> bool {
        let is_static = matches!(self.config.source, DataSource::Static(_));
        {
            let Some(column) = self.config.column(field) else {
                return false;
            };
            if !column.sortable {
                return false;
            }

            let target = if is_static {
                &mut self.catalog
            } else {
                &mut self.rows
            };
            sort_rows(target, |row| column.value(row), direction);
            self.sort = Some(ActiveSort {
                field: column.field,
                direction,
            });
        }

        self.expanded.clear();
        if is_static {
            self.rebuild_window();
        }
        true
    }

    /// Open or close the detail line of a visible row. Returns whether the
    /// row is open afterwards.
    pub fn toggle_expanded(&mut self, index: usize) -> bool {
        if !self.config.is_expandable() || index >= self.rows.len() {
            tracing::debug!(index, "expand ignored: row cannot be expanded");
            return false;
        }
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
        self.expanded.contains(&index)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// The future for an issued ticket, if this list is server-backed
    pub fn fetch(&self, ticket: &FetchTicket) -> Option<FetchFuture<T>> {
        match &self.config.source {
            DataSource::Remote(fetch) => Some(fetch.call(ticket.request.clone())),
            _ => None,
        }
    }

    /// Apply a fetch outcome unless a newer ticket has been issued since
    pub fn settle(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<ListResponse<T>, FetchError>,
    ) -> Settlement {
        if ticket.seq != self.last_issued {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.last_issued,
                "discarding stale page response"
            );
            return Settlement::Stale;
        }

        self.expanded.clear();
        match outcome {
            Ok(response) => {
                self.total_count = response.pagination.total;
                self.rows = response.list;
                self.phase = ListPhase::Loaded;
            }
            Err(e) => {
                tracing::warn!(seq = ticket.seq, "page fetch failed: {}", e);
                self.rows.clear();
                self.phase = ListPhase::Errored(e.user_message());
            }
        }
        Settlement::Applied
    }

    /// Fetch and settle in one step. Returns `None` when there was nothing to run.
    pub async fn run(&mut self, ticket: Option<FetchTicket>) -> Option<Settlement> {
        let ticket = ticket?;
        let pending = self.fetch(&ticket)?;
        let outcome = pending.await;
        Some(self.settle(&ticket, outcome))
    }

    pub fn render_plan(&self) -> RenderPlan<'_, T> {
        match &self.phase {
            ListPhase::Idle => RenderPlan::Empty(&self.config.empty_state),
            ListPhase::Loading => RenderPlan::Loading,
            ListPhase::Errored(message) => RenderPlan::Error(message),
            ListPhase::Loaded if self.rows.is_empty() => {
                RenderPlan::NoData(&self.config.no_data_message)
            }
            ListPhase::Loaded => RenderPlan::Table(&self.rows),
        }
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.query.page, self.query.page_size, self.total_count)
    }

    pub fn config(&self) -> &ListConfig<T> {
        &self.config
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn active_sort(&self) -> Option<ActiveSort> {
        self.sort
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }

    fn issue(&mut self) -> Option<FetchTicket> {
        match &self.config.source {
            DataSource::Remote(_) => {
                self.last_issued += 1;
                self.phase = ListPhase::Loading;
                self.rows.clear();
                self.sort = None;
                self.expanded.clear();

                let ticket = FetchTicket {
                    seq: self.last_issued,
                    request: self.query.to_request(),
                };
                tracing::debug!(
                    seq = ticket.seq,
                    limit = ticket.request.limit,
                    offset = ticket.request.offset,
                    query = %ticket.request.query,
                    "issuing page fetch"
                );
                Some(ticket)
            }
            DataSource::Static(_) => {
                self.rebuild_window();
                None
            }
            DataSource::None => None,
        }
    }

    fn rebuild_window(&mut self) {
        let term = self.query.search_term.as_str();
        let matching: Vec<&T> = self
            .catalog
            .iter()
            .filter(|row| self.config.matches_locally(row, term))
            .collect();

        self.total_count = matching.len() as u64;
        let start = usize::try_from(self.query.offset()).unwrap_or(usize::MAX);
        self.rows = matching
            .into_iter()
            .skip(start)
            .take(self.query.page_size as usize)
            .cloned()
            .collect();
        self.expanded.clear();
        self.phase = ListPhase::Loaded;
    }
}
