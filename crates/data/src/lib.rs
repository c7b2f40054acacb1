//! Market data retrieval and file storage.
//!
//! This crate provides:
//! - DefiLlama yield pool discovery and APY/TVL history
//! - GeckoTerminal pool OHLCV candles
//! - CSV/JSON storage for candles, price series and yield history
//! - CSV export of wealth trajectories for plotting

/// Error types.
pub mod error;
/// Trajectory export.
pub mod export;
/// HTTP data providers.
pub mod providers;
/// File storage.
pub mod storage;

pub use error::{DataError, Result};
pub use providers::{OhlcvProvider, OhlcvRequest, YieldDataProvider};
