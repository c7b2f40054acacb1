//! Error types for the data crate.

use thiserror::Error;

/// Result alias for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors from fetching, parsing or storing market data.
#[derive(Debug, Error)]
pub enum DataError {
    /// Transport-level HTTP failure, including timeouts.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Response body did not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV read or write failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A row parsed but its contents are unusable.
    #[error("invalid record at line {line}: {reason}")]
    InvalidRecord {
        /// One-based line number, header included.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Loaded data failed domain validation.
    #[error(transparent)]
    Domain(#[from] lp_wealth_domain::DomainError),
}
