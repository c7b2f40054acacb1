//! Wealth simulation for constant-product liquidity providers.
//!
//! Two independent accumulators produce wealth trajectories:
//! - [`simulated_path`] drives a pool with daily buy/sell trades
//! - [`real_data`] applies the closed-form impermanent loss formula to an
//!   observed price/volume series
//!
//! [`scenario`] runs either accumulator over a parameter grid.

/// Prelude module for convenient imports.
pub mod prelude;

/// Error types.
pub mod error;
/// Trade events recorded by the simulated path.
pub mod event;
/// Closed-form wealth over real price data.
pub mod real_data;
/// Scenario grids.
pub mod scenario;
/// Daily trade-driven wealth simulation.
pub mod simulated_path;
/// Simulation configuration.
pub mod state;
/// Trajectory summary statistics.
pub mod summary;

pub use error::{Result, SimulationError};
