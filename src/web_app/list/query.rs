// web_app/list/query.rs - Query state and the request derived from it

use serde::{Deserialize, Serialize};

/// Page sizes offered by the pagination footer unless configured otherwise
pub const DEFAULT_PAGE_SIZE_OPTIONS: [u32; 5] = [5, 10, 25, 50, 100];

/// Initial rows per page
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// The page, page size and search term that fully determine a fetch
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Current page (0-indexed)
    pub page: u32,
    /// Rows per page, always > 0
    pub page_size: u32,
    /// Submitted search text
    pub search_term: String,
}

impl ListQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 0,
            page_size,
            search_term: String::new(),
        }
    }

    /// Offset of the first row on the current page
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.page_size)
    }

    /// Back to the first page with an empty search, keeping the page size
    pub fn reset(&mut self) {
        self.page = 0;
        self.search_term.clear();
    }

    pub fn to_request(&self) -> PageRequest {
        PageRequest {
            limit: self.page_size,
            offset: self.offset(),
            query: self.search_term.clone(),
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// What the data source receives: `{ limit, offset, query }`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u64,
    pub query: String,
}
