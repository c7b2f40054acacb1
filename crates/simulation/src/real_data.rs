//! Closed-form LP wealth over an observed price/volume series.

use crate::error::{Result, SimulationError};
use crate::state::{RealDataConfig, RewardAccrual};
use lp_wealth_domain::metrics::WealthComponents;
use lp_wealth_domain::metrics::fees::cumulative_fee_income;
use lp_wealth_domain::metrics::impermanent_loss::{impermanent_loss_multiplier, price_ratio};
use lp_wealth_domain::series::{PriceSeries, WealthTrajectory};
use serde::Serialize;

/// Result of a real-data wealth computation.
#[derive(Debug, Clone, Serialize)]
pub struct RealDataResult {
    /// Total wealth at each bar.
    pub trajectory: WealthTrajectory,
    /// Per-bar breakdown of the total.
    pub components: Vec<WealthComponents>,
}

/// Computes LP wealth at every bar of `series`.
///
/// For bar `i` with price ratio `r_i = close_i / close_0`:
/// `W_i = initial_value * m(r_i) + sum_{j<=i} fee_j + reward_i`, where
/// `m` is the impermanent loss multiplier, `fee_j` the LP's share of fees on
/// the scaled volume and `reward_i` the accrued reward tokens at market price.
///
/// # Errors
/// Returns an error if the configuration does not validate, or if
/// [`RewardAccrual::PerSample`] is used on a series with uneven spacing.
pub fn compute_real_wealth(series: &PriceSeries, config: &RealDataConfig) -> Result<RealDataResult> {
    config.validate()?;
    if config.reward_accrual == RewardAccrual::PerSample && !series.is_uniformly_sampled() {
        return Err(SimulationError::NonUniformSampling);
    }

    let p0 = series.first_close();
    let fees = cumulative_fee_income(
        &series.volumes(),
        config.fee_rate,
        config.volume_scale,
        config.lp_share,
    );
    let mut trajectory = WealthTrajectory::with_capacity(series.len());
    let mut components = Vec::with_capacity(series.len());

    for (i, (close, cumulative_fees)) in series.closes().into_iter().zip(fees).enumerate() {
        let lp_value = config.initial_value * impermanent_loss_multiplier(price_ratio(p0, close));

        let accrual_days = match config.reward_accrual {
            RewardAccrual::PerSample => i as f64,
            RewardAccrual::ElapsedDays => series.elapsed_days(i),
        };
        let reward_value =
            config.lp_share * config.reward_per_day * accrual_days * config.reward_token_price;

        let parts = WealthComponents {
            lp_value,
            cumulative_fees,
            reward_value,
        };
        trajectory.push(Some(series.bars()[i].timestamp), parts.total());
        components.push(parts);
    }

    Ok(RealDataResult {
        trajectory,
        components,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use lp_wealth_domain::metrics::impermanent_loss::PRICE_RATIO_FLOOR;
    use lp_wealth_domain::series::PriceBar;

    fn series(rows: &[(i64, f64, f64)]) -> PriceSeries {
        let bars = rows
            .iter()
            .map(|&(secs, close, volume)| {
                PriceBar::new(
                    DateTime::from_timestamp(secs, 0).unwrap(),
                    close,
                    volume,
                )
            })
            .collect();
        PriceSeries::new(bars).unwrap()
    }

    fn daily(closes: &[f64], volumes: &[f64]) -> PriceSeries {
        let rows: Vec<_> = closes
            .iter()
            .zip(volumes)
            .enumerate()
            .map(|(i, (&c, &v))| (1_700_000_000 + i as i64 * 86_400, c, v))
            .collect();
        series(&rows)
    }

    #[test]
    fn test_price_doubling_without_volume() {
        let s = daily(&[100.0, 200.0], &[0.0, 0.0]);
        let config = RealDataConfig::new(1.0, 0.01).with_fee_rate(0.003);
        let result = compute_real_wealth(&s, &config).unwrap();

        let values = result.trajectory.values();
        assert_eq!(values[0], 1.0);
        assert!((values[1] - 2.0 * 2f64.sqrt() / 3.0).abs() < 1e-12);
        assert!((values[1] - 0.9428).abs() < 1e-4);
        assert!(result.components.iter().all(|c| c.cumulative_fees == 0.0));
    }

    #[test]
    fn test_zero_close_clamps_to_ratio_floor() {
        let s = daily(&[100.0, 0.0], &[0.0, 0.0]);
        let config = RealDataConfig::new(5.0, 0.01);
        let result = compute_real_wealth(&s, &config).unwrap();

        let expected = 5.0 * impermanent_loss_multiplier(PRICE_RATIO_FLOOR);
        let values = result.trajectory.values();
        assert!((values[1] - expected).abs() < 1e-15);
        assert!(values[1] > 0.0 && values[1] < 1e-4);
    }

    #[test]
    fn test_fee_income_accumulates() {
        let s = daily(&[1.0, 1.0, 1.0], &[1000.0, 2000.0, 0.0]);
        let config = RealDataConfig::new(10.0, 0.5)
            .with_fee_rate(0.01)
            .with_volume_scale(2.0);
        let result = compute_real_wealth(&s, &config).unwrap();

        // fee_j = 0.01 * 2 * vol * 0.5 = 0.01 * vol
        let values = result.trajectory.values();
        assert!((values[0] - 20.0).abs() < 1e-9);
        assert!((values[1] - 40.0).abs() < 1e-9);
        assert!((values[2] - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_volume_scale_removes_fees() {
        let s = daily(&[1.0, 1.5], &[1e6, 1e6]);
        let config = RealDataConfig::default().with_volume_scale(0.0);
        let result = compute_real_wealth(&s, &config).unwrap();
        assert!(result.components.iter().all(|c| c.cumulative_fees == 0.0));
    }

    #[test]
    fn test_per_sample_reward_accrual() {
        let s = daily(&[1.0, 1.0, 1.0], &[0.0, 0.0, 0.0]);
        let config = RealDataConfig::new(1.0, 0.5)
            .with_reward_per_day(4.0)
            .with_reward_token_price(3.0);
        let result = compute_real_wealth(&s, &config).unwrap();

        // reward_i = 0.5 * 4 * i * 3 = 6i
        assert_eq!(result.trajectory.values(), vec![1.0, 7.0, 13.0]);
    }

    #[test]
    fn test_per_sample_rejects_uneven_series() {
        let s = series(&[(0, 1.0, 0.0), (86_400, 1.0, 0.0), (3 * 86_400, 1.0, 0.0)]);
        let err = compute_real_wealth(&s, &RealDataConfig::default()).unwrap_err();
        assert_eq!(err, SimulationError::NonUniformSampling);
    }

    #[test]
    fn test_elapsed_days_accrual_on_uneven_series() {
        let s = series(&[(0, 1.0, 0.0), (86_400, 1.0, 0.0), (3 * 86_400, 1.0, 0.0)]);
        let config = RealDataConfig::new(0.0, 1.0)
            .with_reward_per_day(1.0)
            .with_reward_token_price(1.0)
            .with_reward_accrual(RewardAccrual::ElapsedDays);
        let result = compute_real_wealth(&s, &config).unwrap();

        let values = result.trajectory.values();
        assert!((values[1] - 1.0).abs() < 1e-12);
        assert!((values[2] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_timestamps_carried_through() {
        let s = daily(&[2.0, 1.0], &[0.0, 0.0]);
        let result = compute_real_wealth(&s, &RealDataConfig::default()).unwrap();
        let stamps: Vec<_> = result
            .trajectory
            .points()
            .iter()
            .map(|p| p.timestamp)
            .collect();
        assert_eq!(stamps[0], Some(s.bars()[0].timestamp));
        assert_eq!(stamps[1], Some(s.bars()[1].timestamp));
    }
}
