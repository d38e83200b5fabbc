// web_app/list/error.rs - Error types for the list view
//
// Fetch failures become display state; configuration errors are
// returned from the builder so a broken list never mounts.

use thiserror::Error;

/// Fallback message shown when the data source answers with nothing at all.
pub const NO_DATA_ERROR: &str = "Error while retrieving data.";

/// A failed page fetch. The `Display` output is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network or transport level failure
    #[error("{0}")]
    Transport(String),

    /// The data source answered with a non-success status
    #[error("{message} (status {status})")]
    Status { status: u16, message: String },

    /// The payload could not be understood
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The data source resolved without a payload
    #[error("{}", NO_DATA_ERROR)]
    NoData,
}

impl FetchError {
    /// The message rendered in the error state
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Rejected list configuration. These are caller defects, not runtime conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a list cannot be driven by both a fetch function and static items")]
    ConflictingSources,

    #[error("page size options must not be empty")]
    NoPageSizeOptions,

    #[error("page size options must be greater than zero")]
    ZeroPageSize,

    #[error("initial page size {0} is not one of the page size options")]
    UnknownInitialPageSize(u32),
}
