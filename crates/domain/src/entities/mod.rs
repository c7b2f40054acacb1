pub mod price_candle;
pub mod yield_pool;

// Re-export for easier access
pub use price_candle::PriceCandle;
pub use yield_pool::{LendBorrowRow, YieldPool, YieldPoint};
