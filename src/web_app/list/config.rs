// web_app/list/config.rs - List configuration and its builder
//
// The builder rejects contradictory setups up front instead of letting
// the list guess which data source wins.

use std::fmt;
use std::sync::Arc;

use super::actions::RowAction;
use super::columns::ColumnDescriptor;
use super::error::ConfigError;
use super::query::{PageRequest, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
use super::source::{DataSource, FetchFuture, FetchPage};

/// Message shown when a loaded page has no rows
pub const DEFAULT_NO_DATA_MESSAGE: &str = "No items yet";

/// Affordance offered next to the empty state and in the toolbar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateAction {
    pub label: String,
    pub href: String,
}

/// Content of the card shown when a list has nothing to show
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmptyState {
    pub title: String,
    pub content: String,
    pub create: Option<CreateAction>,
}

type LocalSearch<T> = Arc<dyn Fn(&T, &str) -> bool + Send + Sync>;
type Expand<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

pub struct ListConfig<T> {
    pub source: DataSource<T>,
    pub columns: Vec<ColumnDescriptor<T>>,
    pub row_actions: Vec<RowAction<T>>,
    pub empty_state: EmptyState,
    pub no_data_message: String,
    pub search_enabled: bool,
    pub search_placeholder: String,
    pub page_size_options: Vec<u32>,
    pub initial_page_size: u32,
    local_search: Option<LocalSearch<T>>,
    expand: Option<Expand<T>>,
}

impl<T> ListConfig<T> {
    pub fn builder() -> ListConfigBuilder<T> {
        ListConfigBuilder::default()
    }

    /// Whether a static row survives the current search term
    pub fn matches_locally(&self, row: &T, term: &str) -> bool {
        match &self.local_search {
            Some(matcher) if !term.is_empty() => matcher(row, term),
            _ => true,
        }
    }

    pub fn column(&self, field: &str) -> Option<&ColumnDescriptor<T>> {
        self.columns.iter().find(|c| c.field == field)
    }

    /// Rows can be opened to show a detail line
    pub fn is_expandable(&self) -> bool {
        self.expand.is_some()
    }

    pub fn expanded_content(&self, row: &T) -> Option<String> {
        self.expand.as_ref().map(|expand| expand(row))
    }
}

impl<T: Clone> Clone for ListConfig<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            columns: self.columns.clone(),
            row_actions: self.row_actions.clone(),
            empty_state: self.empty_state.clone(),
            no_data_message: self.no_data_message.clone(),
            search_enabled: self.search_enabled,
            search_placeholder: self.search_placeholder.clone(),
            page_size_options: self.page_size_options.clone(),
            initial_page_size: self.initial_page_size,
            local_search: self.local_search.clone(),
            expand: self.expand.clone(),
        }
    }
}

impl<T> fmt::Debug for ListConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            DataSource::None => "none",
            DataSource::Remote(_) => "remote",
            DataSource::Static(_) => "static",
        };
        f.debug_struct("ListConfig")
            .field("source", &source)
            .field("columns", &self.columns)
            .field("row_actions", &self.row_actions)
            .field("search_enabled", &self.search_enabled)
            .field("page_size_options", &self.page_size_options)
            .field("initial_page_size", &self.initial_page_size)
            .field("expandable", &self.is_expandable())
            .finish()
    }
}

pub struct ListConfigBuilder<T> {
    fetch_page: Option<FetchPage<T>>,
    static_items: Option<Vec<T>>,
    columns: Vec<ColumnDescriptor<T>>,
    row_actions: Vec<RowAction<T>>,
    empty_state: EmptyState,
    no_data_message: String,
    search_enabled: bool,
    search_placeholder: String,
    page_size_options: Vec<u32>,
    initial_page_size: Option<u32>,
    local_search: Option<LocalSearch<T>>,
    expand: Option<Expand<T>>,
}

impl<T> Default for ListConfigBuilder<T> {
    fn default() -> Self {
        Self {
            fetch_page: None,
            static_items: None,
            columns: Vec::new(),
            row_actions: Vec::new(),
            empty_state: EmptyState::default(),
            no_data_message: DEFAULT_NO_DATA_MESSAGE.to_string(),
            search_enabled: true,
            search_placeholder: String::new(),
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            initial_page_size: None,
            local_search: None,
            expand: None,
        }
    }
}

impl<T> ListConfigBuilder<T> {
    pub fn fetch_page<F>(mut self, fetch: F) -> Self
    where
        F: Fn(PageRequest) -> FetchFuture<T> + Send + Sync + 'static,
    {
        self.fetch_page = Some(FetchPage::new(fetch));
        self
    }

    pub fn static_items(mut self, items: Vec<T>) -> Self {
        self.static_items = Some(items);
        self
    }

    pub fn column(mut self, column: ColumnDescriptor<T>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn row_action(mut self, action: RowAction<T>) -> Self {
        self.row_actions.push(action);
        self
    }

    pub fn empty_state(mut self, empty_state: EmptyState) -> Self {
        self.empty_state = empty_state;
        self
    }

    pub fn no_data_message(mut self, message: impl Into<String>) -> Self {
        self.no_data_message = message.into();
        self
    }

    pub fn search_enabled(mut self, enabled: bool) -> Self {
        self.search_enabled = enabled;
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn page_size_options(mut self, options: Vec<u32>) -> Self {
        self.page_size_options = options;
        self
    }

    pub fn initial_page_size(mut self, size: u32) -> Self {
        self.initial_page_size = Some(size);
        self
    }

    /// Row filter applied to static items when a search is submitted
    pub fn local_search<F>(mut self, matcher: F) -> Self
    where
        F: Fn(&T, &str) -> bool + Send + Sync + 'static,
    {
        self.local_search = Some(Arc::new(matcher));
        self
    }

    /// Detail text shown under a row when it is opened
    pub fn expand<F>(mut self, expand: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.expand = Some(Arc::new(expand));
        self
    }

    pub fn build(self) -> Result<ListConfig<T>, ConfigError> {
        let source = match (self.fetch_page, self.static_items) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingSources),
            (Some(fetch), None) => DataSource::Remote(fetch),
            (None, Some(items)) => DataSource::Static(items),
            (None, None) => DataSource::None,
        };

        if self.page_size_options.is_empty() {
            return Err(ConfigError::NoPageSizeOptions);
        }
        if self.page_size_options.contains(&0) {
            return Err(ConfigError::ZeroPageSize);
        }

        let initial_page_size = match self.initial_page_size {
            Some(size) if !self.page_size_options.contains(&size) => {
                return Err(ConfigError::UnknownInitialPageSize(size));
            }
            Some(size) => size,
            None if self.page_size_options.contains(&DEFAULT_PAGE_SIZE) => DEFAULT_PAGE_SIZE,
            None => self.page_size_options[0],
        };

        Ok(ListConfig {
            source,
            columns: self.columns,
            row_actions: self.row_actions,
            empty_state: self.empty_state,
            no_data_message: self.no_data_message,
            search_enabled: self.search_enabled,
            search_placeholder: self.search_placeholder,
            page_size_options: self.page_size_options,
            initial_page_size,
            local_search: self.local_search,
            expand: self.expand,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::list::source::ListResponse;
    use futures::FutureExt;

    fn remote_builder() -> ListConfigBuilder<String> {
        ListConfig::builder().fetch_page(|_req| async { Ok(ListResponse::new(vec![], 0)) }.boxed_local())
    }

    #[test]
    fn test_defaults() {
        let config: ListConfig<String> = ListConfig::builder().build().unwrap();
        assert!(matches!(config.source, DataSource::None));
        assert!(config.search_enabled);
        assert_eq!(config.page_size_options, vec![5, 10, 25, 50, 100]);
        assert_eq!(config.initial_page_size, 5);
        assert_eq!(config.no_data_message, "No items yet");
        assert!(!config.is_expandable());
    }

    #[test]
    fn test_expand_renders_detail_for_row() {
        let config = remote_builder()
            .expand(|row: &String| format!("Details of {}", row))
            .build()
            .unwrap();
        assert!(config.is_expandable());
        assert_eq!(
            config.expanded_content(&"Okta".to_string()).as_deref(),
            Some("Details of Okta")
        );
    }

    #[test]
    fn test_both_sources_rejected() {
        let result = remote_builder().static_items(vec!["a".to_string()]).build();
        assert_eq!(result.unwrap_err(), ConfigError::ConflictingSources);
    }

    #[test]
    fn test_page_size_validation() {
        let empty = remote_builder().page_size_options(vec![]).build();
        assert_eq!(empty.unwrap_err(), ConfigError::NoPageSizeOptions);

        let zero = remote_builder().page_size_options(vec![0, 10]).build();
        assert_eq!(zero.unwrap_err(), ConfigError::ZeroPageSize);

        let unknown = remote_builder().initial_page_size(7).build();
        assert_eq!(unknown.unwrap_err(), ConfigError::UnknownInitialPageSize(7));
    }

    #[test]
    fn test_initial_page_size_falls_back_to_first_option() {
        let config = remote_builder().page_size_options(vec![20, 40]).build().unwrap();
        assert_eq!(config.initial_page_size, 20);
    }

    #[test]
    fn test_local_search_only_applies_to_non_empty_terms() {
        let config = ListConfig::builder()
            .static_items(vec!["Gold".to_string()])
            .local_search(|row: &String, term| row.to_lowercase().contains(&term.to_lowercase()))
            .build()
            .unwrap();

        let row = "Gold".to_string();
        assert!(config.matches_locally(&row, ""));
        assert!(config.matches_locally(&row, "gol"));
        assert!(!config.matches_locally(&row, "silver"));
    }
}
