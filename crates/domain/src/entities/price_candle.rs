use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLCV candle as returned by market data providers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceCandle {
    /// Candle open time.
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Volume in quote (USD) notional.
    pub volume: f64,
}

