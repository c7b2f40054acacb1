//! Domain model for liquidity provider wealth simulation.
//!
//! This crate holds the pure, synchronous core:
//! - Constant-product pool state and the buy/sell trade engine
//! - Impermanent loss and fee income metrics
//! - Price series and wealth trajectory types
//! - Yield pool and OHLCV candle entities produced by data providers

/// Market data entities.
pub mod entities;
/// Shared enumerations.
pub mod enums;
/// Error types.
pub mod error;
/// AMM math.
pub mod math;
/// LP performance metrics.
pub mod metrics;
/// Constant-product pool state.
pub mod pool;
/// Price series and wealth trajectories.
pub mod series;

pub use error::{DomainError, Result};
pub use pool::PoolState;
pub use series::{PriceBar, PriceSeries, WealthPoint, WealthTrajectory};
