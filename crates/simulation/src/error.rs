//! Error types for the simulation crate.

use lp_wealth_domain::DomainError;
use thiserror::Error;

/// Result alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors raised before a simulation runs. The formulas themselves never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A configuration value is outside its allowed range.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
        /// Allowed range.
        reason: &'static str,
    },

    /// Per-sample reward accrual needs evenly spaced bars.
    #[error("price series is not uniformly sampled; use elapsed-days reward accrual instead")]
    NonUniformSampling,

    /// Domain value construction failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
