/// Constant-product trade engine.
pub mod constant_product;

pub use constant_product::{TradeOutcome, apply_trade, buy_base_with_quote, sell_base_for_quote};
