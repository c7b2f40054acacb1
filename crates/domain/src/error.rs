//! Error types for the domain crate.

use thiserror::Error;

/// Result alias for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Errors raised when building domain values from untrusted input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A pool reserve was zero, negative or not finite.
    #[error("invalid reserve {name}: {value}")]
    InvalidReserve {
        /// Which reserve was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A price was zero, negative or not finite.
    #[error("invalid price: {0}")]
    InvalidPrice(f64),

    /// A series contained no rows.
    #[error("price series is empty")]
    EmptySeries,

    /// A series row failed validation.
    #[error("invalid row {index} in price series: {reason}")]
    InvalidRow {
        /// Zero-based row position after sorting.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },
}
