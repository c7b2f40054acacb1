//! HTTP market data providers.
//!
//! Each provider parses response bodies with a free `parse_*` function so
//! the parsing can be exercised without a network.

mod defillama;
mod geckoterminal;

pub use defillama::{
    DEFILLAMA_BASE_URL, DefiLlamaProvider, candidate_pools, find_pool, parse_chart,
    parse_lend_borrow, parse_pools,
};
pub use geckoterminal::{GECKOTERMINAL_BASE_URL, GeckoTerminalProvider, parse_ohlcv};

use crate::error::Result;
use async_trait::async_trait;
use lp_wealth_domain::entities::{LendBorrowRow, PriceCandle, YieldPool, YieldPoint};
use std::time::Duration;

/// Timeout applied to every provider request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of yield pool listings and their history.
#[async_trait]
pub trait YieldDataProvider {
    /// Lists every pool the aggregator tracks.
    async fn pools(&self) -> Result<Vec<YieldPool>>;

    /// APY/TVL history of one pool, or `None` if the server has none.
    async fn pool_history(&self, pool_id: &str) -> Result<Option<Vec<YieldPoint>>>;

    /// Lending/borrowing rates, or `None` if the server does not answer.
    async fn lend_borrow(&self) -> Result<Option<Vec<LendBorrowRow>>>;
}

/// Parameters of an OHLCV request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OhlcvRequest {
    /// Network slug, e.g. `eth`.
    pub network: String,
    /// Pool contract address.
    pub pool_address: String,
    /// `day`, `hour` or `minute`.
    pub timeframe: String,
    /// Maximum number of candles.
    pub limit: u32,
    /// Candle aggregation factor.
    pub aggregate: u32,
}

impl Default for OhlcvRequest {
    fn default() -> Self {
        Self {
            network: "eth".to_string(),
            pool_address: "0x0d4a11d5eeaac28ec3f61d100daf4d40471f1852".to_string(),
            timeframe: "day".to_string(),
            limit: 180,
            aggregate: 1,
        }
    }
}

impl OhlcvRequest {
    /// File name the fetched candles are conventionally saved under.
    #[must_use]
    pub fn default_file_name(&self) -> String {
        format!(
            "ohlcv_{}_{}_{}_{}d.csv",
            self.network, self.pool_address, self.timeframe, self.limit
        )
    }
}

/// Source of pool OHLCV candles.
#[async_trait]
pub trait OhlcvProvider {
    /// Fetches candles sorted oldest first.
    async fn fetch_ohlcv(&self, request: &OhlcvRequest) -> Result<Vec<PriceCandle>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            OhlcvRequest::default().default_file_name(),
            "ohlcv_eth_0x0d4a11d5eeaac28ec3f61d100daf4d40471f1852_day_180d.csv"
        );
    }
}
