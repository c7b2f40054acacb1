//! Trajectory summary statistics.

use lp_wealth_domain::metrics::fees::calculate_apy;
use lp_wealth_domain::series::WealthTrajectory;
use serde::Serialize;

/// Headline numbers for one wealth trajectory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectorySummary {
    /// Number of points.
    pub points: usize,
    /// Wealth at the first point.
    pub initial_value: f64,
    /// Wealth at the last point.
    pub final_value: f64,
    /// Lowest wealth observed.
    pub min_value: f64,
    /// Highest wealth observed.
    pub max_value: f64,
    /// `final - initial`.
    pub net_change: f64,
    /// `net_change / initial`, zero when the initial value is zero.
    pub net_change_pct: f64,
    /// Largest peak-to-trough decline as a non-positive fraction.
    pub max_drawdown_pct: f64,
    /// Net change annualized over `horizon_days`, if defined.
    pub annualized_return: Option<f64>,
}

impl TrajectorySummary {
    /// Summarizes `trajectory`, treating it as spanning `horizon_days` days.
    ///
    /// Returns `None` for an empty trajectory.
    #[must_use]
    pub fn from_trajectory(trajectory: &WealthTrajectory, horizon_days: f64) -> Option<Self> {
        let initial_value = trajectory.first()?.value;
        let final_value = trajectory.last()?.value;

        let mut min_value = f64::INFINITY;
        let mut max_value = f64::NEG_INFINITY;
        let mut peak = f64::NEG_INFINITY;
        let mut max_drawdown_pct: f64 = 0.0;

        for point in trajectory.points() {
            min_value = min_value.min(point.value);
            max_value = max_value.max(point.value);
            peak = peak.max(point.value);
            if peak > 0.0 {
                max_drawdown_pct = max_drawdown_pct.min((point.value - peak) / peak);
            }
        }

        let net_change = final_value - initial_value;
        let net_change_pct = if initial_value == 0.0 {
            0.0
        } else {
            net_change / initial_value
        };

        Some(Self {
            points: trajectory.len(),
            initial_value,
            final_value,
            min_value,
            max_value,
            net_change,
            net_change_pct,
            max_drawdown_pct,
            annualized_return: calculate_apy(net_change, initial_value, horizon_days),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory(values: &[f64]) -> WealthTrajectory {
        let mut traj = WealthTrajectory::with_capacity(values.len());
        for &v in values {
            traj.push(None, v);
        }
        traj
    }

    #[test]
    fn test_summary() {
        let summary =
            TrajectorySummary::from_trajectory(&trajectory(&[1.0, 1.2, 0.9, 1.1]), 3.0).unwrap();

        assert_eq!(summary.points, 4);
        assert_eq!(summary.min_value, 0.9);
        assert_eq!(summary.max_value, 1.2);
        assert!((summary.net_change - 0.1).abs() < 1e-12);
        assert!((summary.max_drawdown_pct - (-0.25)).abs() < 1e-12);
        let apy = summary.annualized_return.unwrap();
        assert!((apy - 0.1 * 365.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_edge_cases() {
        assert_eq!(
            TrajectorySummary::from_trajectory(&WealthTrajectory::default(), 1.0),
            None
        );

        let flat = TrajectorySummary::from_trajectory(&trajectory(&[0.0, 0.0]), 0.0).unwrap();
        assert_eq!(flat.net_change_pct, 0.0);
        assert_eq!(flat.max_drawdown_pct, 0.0);
        assert_eq!(flat.annualized_return, None);
    }
}
