//! Trade-driven LP wealth simulation.
//!
//! A constant-product pool is seeded at `initial_price`, then each day the
//! LP's wealth is recorded before one buy and one sell trade move the pool.

use crate::error::Result;
use crate::event::{EventLog, SimulationEvent};
use crate::state::SimulatedPathConfig;
use lp_wealth_domain::math::{buy_base_with_quote, sell_base_for_quote};
use lp_wealth_domain::pool::PoolState;
use lp_wealth_domain::series::WealthTrajectory;
use serde::Serialize;
use tracing::debug;

/// Result of a simulated run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulatedPathResult {
    /// Wealth for days `0..=days`.
    pub trajectory: WealthTrajectory,
    /// Pool reserves after the last trade.
    pub final_pool: PoolState,
    /// LP reward token balance at the end.
    pub reward_tokens: f64,
    /// Every reward accrual and trade, in order.
    pub events: EventLog,
}

/// LP wealth in quote units: share of the pool valued at `2 * x`, plus
/// reward tokens at market price.
#[must_use]
pub fn lp_wealth(
    pool: &PoolState,
    lp_share: f64,
    reward_tokens: f64,
    reward_token_price: f64,
) -> f64 {
    lp_share * pool.value_in_quote() + reward_tokens * reward_token_price
}

/// Simulates LP wealth over `config.days` days.
///
/// Day `t` records wealth first, then (except on the final day) credits
/// `lp_share * reward_per_day` reward tokens, buys `total_buy / days` quote
/// worth of base, and sells `total_sell / days` quote worth of base priced at
/// the post-buy spot price.
///
/// # Errors
/// Returns an error if the configuration does not validate.
pub fn simulate_wealth(config: &SimulatedPathConfig) -> Result<SimulatedPathResult> {
    config.validate()?;

    let mut pool = PoolState::from_price(config.initial_quote_reserve, config.initial_price)?;
    let buy_per_day = config.buy_per_day();
    let sell_per_day = config.sell_per_day();

    let mut reward_tokens = 0.0;
    let mut trajectory = WealthTrajectory::with_capacity(config.days + 1);
    let mut log = EventLog::new();

    for day in 0..=config.days {
        let wealth = lp_wealth(
            &pool,
            config.lp_share,
            reward_tokens,
            config.reward_token_price,
        );
        trajectory.push(None, wealth);

        if day == config.days {
            break;
        }

        let accrued = config.lp_share * config.reward_per_day;
        reward_tokens += accrued;
        log.record(SimulationEvent::reward_accrued(
            day,
            pool,
            accrued,
            reward_tokens,
        ));

        let buy = buy_base_with_quote(pool, buy_per_day, config.fee_rate);
        pool = buy.pool;
        if !buy.is_noop() {
            log.record(SimulationEvent::trade(day, &buy));
        }

        let base_in = sell_per_day / pool.spot_price();
        let sell = sell_base_for_quote(pool, base_in, config.fee_rate);
        pool = sell.pool;
        if !sell.is_noop() {
            log.record(SimulationEvent::trade(day, &sell));
        }

        debug!(
            day,
            wealth,
            reserve_quote = pool.reserve_quote,
            reserve_base = pool.reserve_base,
            "simulated day"
        );
    }

    Ok(SimulatedPathResult {
        trajectory,
        final_pool: pool,
        reward_tokens,
        events: log,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::SimulationEventType;

    #[test]
    fn test_trajectory_length_and_initial_value() {
        let config = SimulatedPathConfig::new(30, 45.0, 55.0).with_lp_share(0.02);
        let result = simulate_wealth(&config).unwrap();

        assert_eq!(result.trajectory.len(), 31);
        let first = result.trajectory.first().unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.value, 0.02 * 2.0 * 50.0);
    }

    #[test]
    fn test_no_volume_no_reward_is_flat() {
        let config = SimulatedPathConfig::new(2, 0.0, 0.0)
            .with_fee_rate(0.05)
            .with_reward_per_day(0.0)
            .with_lp_share(0.01)
            .with_initial_price(1.0)
            .with_initial_quote_reserve(50.0);
        let result = simulate_wealth(&config).unwrap();

        assert_eq!(result.trajectory.values(), vec![1.0, 1.0, 1.0]);
        assert_eq!(result.final_pool, PoolState::new(50.0, 50.0).unwrap());
        assert_eq!(result.events.of_type(SimulationEventType::Trade).count(), 0);
    }

    #[test]
    fn test_rewards_only_grow_linearly() {
        let config = SimulatedPathConfig::new(4, 0.0, 0.0)
            .with_reward_per_day(10.0)
            .with_lp_share(0.1)
            .with_reward_token_price(2.0);
        let result = simulate_wealth(&config).unwrap();

        // base = 0.1 * 100 = 10, +1 token/day at price 2
        let values = result.trajectory.values();
        for (day, value) in values.iter().enumerate() {
            assert!((value - (10.0 + 2.0 * day as f64)).abs() < 1e-12);
        }
        assert!((result.reward_tokens - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_record_before_trades() {
        let config = SimulatedPathConfig::new(1, 10.0, 0.0).with_reward_per_day(0.0);
        let result = simulate_wealth(&config).unwrap();

        let values = result.trajectory.values();
        assert_eq!(values[0], 0.01 * 100.0);
        // the buy lands in the quote reserve before day 1 is recorded
        assert!((values[1] - 0.01 * 2.0 * 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_sell_priced_after_buy() {
        let config = SimulatedPathConfig::new(1, 10.0, 10.0)
            .with_fee_rate(0.05)
            .with_reward_per_day(0.0)
            .with_lp_share(0.01)
            .with_initial_price(1.0)
            .with_initial_quote_reserve(50.0);
        let result = simulate_wealth(&config).unwrap();

        // buy 10 quote into (50, 50)
        let (x0, y0) = (50.0, 50.0);
        let x1 = x0 + 10.0;
        let y1 = y0 - 0.95 * (y0 - x0 * y0 / x1);
        // sell 10 quote worth of base at the post-buy price
        let base_in = 10.0 / (x1 / y1);
        let x2 = x1 - 0.95 * (x1 - x1 * y1 / (y1 + base_in));
        let y2 = y1 + base_in;

        assert!((result.final_pool.reserve_quote - x2).abs() < 1e-12);
        assert!((result.final_pool.reserve_base - y2).abs() < 1e-12);

        let values = result.trajectory.values();
        assert!((values[1] - 0.01 * 2.0 * x2).abs() < 1e-12);

        // pricing the sell off the pre-buy pool would sell 10 base instead
        assert!((base_in - 10.0).abs() > 1.0);
        assert_eq!(result.events.of_type(SimulationEventType::Trade).count(), 2);
    }

    #[test]
    fn test_fees_grow_pool_invariant() {
        let config = SimulatedPathConfig::new(20, 50.0, 50.0).with_fee_rate(0.05);
        let result = simulate_wealth(&config).unwrap();

        assert!(result.final_pool.k() > 50.0 * 50.0);
        assert_eq!(result.events.of_type(SimulationEventType::Trade).count(), 40);
        let (base_fees, quote_fees) = result.events.total_fees_withheld();
        assert!(base_fees > 0.0 && quote_fees > 0.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(simulate_wealth(&SimulatedPathConfig::new(0, 1.0, 1.0)).is_err());
    }
}
