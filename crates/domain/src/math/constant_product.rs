use crate::enums::TradeDirection;
use crate::pool::PoolState;
use serde::{Deserialize, Serialize};

/// Result of executing a single trade against a pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeOutcome {
    /// Trade side.
    pub direction: TradeDirection,
    /// Amount paid into the pool (quote for buys, base for sells).
    pub amount_in: f64,
    /// Amount delivered to the trader after the fee.
    pub amount_out: f64,
    /// Part of the gross output withheld by the pool as fee.
    pub fee_withheld: f64,
    /// Pool reserves after the trade.
    pub pool: PoolState,
}

impl TradeOutcome {
    fn unchanged(direction: TradeDirection, pool: PoolState) -> Self {
        Self {
            direction,
            amount_in: 0.0,
            amount_out: 0.0,
            fee_withheld: 0.0,
            pool,
        }
    }

    /// Whether the trade moved the reserves.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.amount_in == 0.0
    }
}

/// Trader spends `quote_in` to buy the base asset.
///
/// formula: dy = y - k / (x + dx), trader receives (1 - fee) * dy
///
/// The fee is taken from the gross output, so the withheld base stays in the
/// pool and `k` grows. A non-positive `quote_in` leaves the pool untouched.
#[must_use]
pub fn buy_base_with_quote(pool: PoolState, quote_in: f64, fee_rate: f64) -> TradeOutcome {
    if quote_in <= 0.0 {
        return TradeOutcome::unchanged(TradeDirection::BuyBase, pool);
    }

    let x = pool.reserve_quote;
    let y = pool.reserve_base;
    let k = x * y;

    let dy_no_fee = y - k / (x + quote_in);
    let dy_out = (1.0 - fee_rate) * dy_no_fee;

    TradeOutcome {
        direction: TradeDirection::BuyBase,
        amount_in: quote_in,
        amount_out: dy_out,
        fee_withheld: dy_no_fee - dy_out,
        pool: PoolState {
            reserve_quote: x + quote_in,
            reserve_base: y - dy_out,
        },
    }
}

/// Trader sells `base_in` of the base asset for quote.
///
/// formula: dx = x - k / (y + dy), trader receives (1 - fee) * dx
#[must_use]
pub fn sell_base_for_quote(pool: PoolState, base_in: f64, fee_rate: f64) -> TradeOutcome {
    if base_in <= 0.0 {
        return TradeOutcome::unchanged(TradeDirection::SellBase, pool);
    }

    let x = pool.reserve_quote;
    let y = pool.reserve_base;
    let k = x * y;

    let dx_no_fee = x - k / (y + base_in);
    let dx_out = (1.0 - fee_rate) * dx_no_fee;

    TradeOutcome {
        direction: TradeDirection::SellBase,
        amount_in: base_in,
        amount_out: dx_out,
        fee_withheld: dx_no_fee - dx_out,
        pool: PoolState {
            reserve_quote: x - dx_out,
            reserve_base: y + base_in,
        },
    }
}

/// Dispatches to [`buy_base_with_quote`] or [`sell_base_for_quote`].
#[must_use]
pub fn apply_trade(
    pool: PoolState,
    direction: TradeDirection,
    amount_in: f64,
    fee_rate: f64,
) -> TradeOutcome {
    match direction {
        TradeDirection::BuyBase => buy_base_with_quote(pool, amount_in, fee_rate),
        TradeDirection::SellBase => sell_base_for_quote(pool, amount_in, fee_rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pool(x: f64, y: f64) -> PoolState {
        PoolState::new(x, y).unwrap()
    }

    #[test]
    fn test_buy_without_fee() {
        // k = 10_000, x' = 110 => y' = 90.909..., trader gets 9.0909...
        let out = buy_base_with_quote(pool(100.0, 100.0), 10.0, 0.0);
        assert!((out.amount_out - 100.0 / 11.0).abs() < 1e-12);
        assert_eq!(out.pool.reserve_quote, 110.0);
        assert!((out.pool.k() - 10_000.0).abs() < 1e-9);
        assert_eq!(out.fee_withheld, 0.0);
    }

    #[test]
    fn test_buy_fee_taken_from_output() {
        let gross = buy_base_with_quote(pool(100.0, 100.0), 10.0, 0.0);
        let net = buy_base_with_quote(pool(100.0, 100.0), 10.0, 0.05);

        assert!((net.amount_out - 0.95 * gross.amount_out).abs() < 1e-12);
        assert!((net.fee_withheld - 0.05 * gross.amount_out).abs() < 1e-12);
        // input side is not touched by the fee
        assert_eq!(net.pool.reserve_quote, gross.pool.reserve_quote);
        assert!(net.pool.reserve_base > gross.pool.reserve_base);
    }

    #[test]
    fn test_sell_with_fee() {
        let out = sell_base_for_quote(pool(100.0, 100.0), 25.0, 0.1);
        // dx_no_fee = 100 - 10_000 / 125 = 20
        assert!((out.amount_out - 18.0).abs() < 1e-12);
        assert!((out.fee_withheld - 2.0).abs() < 1e-12);
        assert!((out.pool.reserve_quote - 82.0).abs() < 1e-12);
        assert_eq!(out.pool.reserve_base, 125.0);
    }

    #[test]
    fn test_non_positive_input_is_noop() {
        let p = pool(50.0, 50.0);
        for amount in [0.0, -1.0] {
            let buy = buy_base_with_quote(p, amount, 0.05);
            let sell = sell_base_for_quote(p, amount, 0.05);
            assert_eq!(buy.pool, p);
            assert_eq!(sell.pool, p);
            assert!(buy.is_noop());
            assert!(sell.is_noop());
        }
    }

    #[test]
    fn test_apply_trade_dispatch() {
        let p = pool(80.0, 20.0);
        assert_eq!(
            apply_trade(p, TradeDirection::BuyBase, 4.0, 0.003),
            buy_base_with_quote(p, 4.0, 0.003)
        );
        assert_eq!(
            apply_trade(p, TradeDirection::SellBase, 1.0, 0.003),
            sell_base_for_quote(p, 1.0, 0.003)
        );
    }

    proptest! {
        #[test]
        fn prop_fee_free_round_trip_restores_reserves(
            x in 1.0f64..1e6,
            y in 1.0f64..1e6,
            frac in 0.001f64..0.5,
        ) {
            let start = pool(x, y);
            let bought = buy_base_with_quote(start, x * frac, 0.0);
            prop_assert!(((bought.pool.k() - start.k()) / start.k()).abs() < 1e-9);

            let sold = sell_base_for_quote(bought.pool, bought.amount_out, 0.0);
            prop_assert!(((sold.pool.k() - start.k()) / start.k()).abs() < 1e-9);
            prop_assert!(((sold.pool.reserve_quote - x) / x).abs() < 1e-9);
            prop_assert!(((sold.pool.reserve_base - y) / y).abs() < 1e-9);
        }

        #[test]
        fn prop_fee_strictly_grows_k(
            x in 1.0f64..1e6,
            y in 1.0f64..1e6,
            frac in 0.001f64..0.5,
            fee in 0.0005f64..0.3,
            sell in any::<bool>(),
        ) {
            let start = pool(x, y);
            let (direction, amount) = if sell {
                (TradeDirection::SellBase, y * frac)
            } else {
                (TradeDirection::BuyBase, x * frac)
            };
            let out = apply_trade(start, direction, amount, fee);
            prop_assert!(out.pool.k() > start.k());
            prop_assert!(out.fee_withheld > 0.0);
        }
    }
}
