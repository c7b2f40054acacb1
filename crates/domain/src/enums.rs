use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of a trade against a pool, from the trader's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeDirection {
    /// Trader pays quote and receives base.
    BuyBase,
    /// Trader pays base and receives quote.
    SellBase,
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuyBase => write!(f, "buy"),
            Self::SellBase => write!(f, "sell"),
        }
    }
}
