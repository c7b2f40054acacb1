use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A yield-bearing pool listed by a yield aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldPool {
    /// Aggregator-assigned pool identifier.
    pub pool: String,
    /// Protocol slug, e.g. `aave-v3`.
    pub project: String,
    /// Chain name, e.g. `Ethereum`.
    pub chain: String,
    /// Asset symbol(s), e.g. `USDT`.
    pub symbol: String,
    /// Current APY in percent.
    #[serde(default)]
    pub apy: Option<f64>,
    /// Total value locked in USD.
    #[serde(default)]
    pub tvl_usd: Option<f64>,
}

impl YieldPool {
    /// Whether the symbol mentions `asset` (case-sensitive, as listed).
    #[must_use]
    pub fn has_asset(&self, asset: &str) -> bool {
        self.symbol.contains(asset)
    }
}

/// One point of a pool's APY/TVL history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldPoint {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub apy: Option<f64>,
    #[serde(default)]
    pub apy_base: Option<f64>,
    #[serde(default)]
    pub apy_reward: Option<f64>,
    #[serde(default)]
    pub tvl_usd: Option<f64>,
}

/// Lending/borrowing rates for a pool. Fields the aggregator omits stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendBorrowRow {
    pub pool: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub apy_base_borrow: Option<f64>,
    #[serde(default)]
    pub apy_reward_borrow: Option<f64>,
    #[serde(default)]
    pub total_supply_usd: Option<f64>,
    #[serde(default)]
    pub total_borrow_usd: Option<f64>,
    #[serde(default)]
    pub ltv: Option<f64>,
}
