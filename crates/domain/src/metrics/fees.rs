/// Fee income attributable to an LP for one period.
///
/// formula: fee_rate * (volume * volume_scale) * lp_share
#[must_use]
pub fn period_fee_income(fee_rate: f64, volume: f64, volume_scale: f64, lp_share: f64) -> f64 {
    fee_rate * (volume * volume_scale) * lp_share
}

/// Running sum of per-period fee income over a volume series.
///
/// The output has one entry per input volume and is non-decreasing whenever
/// volumes and the fee rate are non-negative.
#[must_use]
pub fn cumulative_fee_income(
    volumes: &[f64],
    fee_rate: f64,
    volume_scale: f64,
    lp_share: f64,
) -> Vec<f64> {
    volumes
        .iter()
        .scan(0.0, |acc, &volume| {
            *acc += period_fee_income(fee_rate, volume, volume_scale, lp_share);
            Some(*acc)
        })
        .collect()
}

/// Annualizes a return earned over `days`.
///
/// # Returns
///
/// `None` when the principal or the horizon is zero.
#[must_use]
pub fn calculate_apy(earned: f64, principal: f64, days: f64) -> Option<f64> {
    if principal == 0.0 || days <= 0.0 {
        return None;
    }
    let roi = earned / principal;
    Some(roi * (365.0 / days))
}
