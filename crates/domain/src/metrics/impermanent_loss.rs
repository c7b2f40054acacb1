/// Lower bound applied to price ratios before taking square roots or dividing.
pub const PRICE_RATIO_FLOOR: f64 = 1e-12;

/// Ratio of constant-product LP value to the value of holding the assets
/// unpooled, after the price moved by `price_ratio` since entry.
///
/// formula: 2 * sqrt(r) / (1 + r)
///
/// The ratio is clamped to [`PRICE_RATIO_FLOOR`] so zero or negative inputs
/// never produce NaN. `m(1) = 1` and `m(r) <= 1` everywhere else.
#[must_use]
pub fn impermanent_loss_multiplier(price_ratio: f64) -> f64 {
    let r = price_ratio.max(PRICE_RATIO_FLOOR);
    (2.0 * r.sqrt()) / (1.0 + r)
}

/// Calculates Impermanent Loss for a constant product pool.
/// formula: 2 * sqrt(price_ratio) / (1 + price_ratio) - 1
///
/// # Returns
///
/// The loss as a non-positive fraction (e.g. -0.0572 when price doubles).
#[must_use]
pub fn calculate_il_constant_product(entry_price: f64, current_price: f64) -> f64 {
    impermanent_loss_multiplier(price_ratio(entry_price, current_price)) - 1.0
}

/// `current / entry`, floored at [`PRICE_RATIO_FLOOR`].
#[must_use]
pub fn price_ratio(entry_price: f64, current_price: f64) -> f64 {
    (current_price / entry_price).max(PRICE_RATIO_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_multiplier_at_entry_is_exactly_one() {
        assert_eq!(impermanent_loss_multiplier(1.0), 1.0);
    }

    #[test]
    fn test_multiplier_known_points() {
        assert!((impermanent_loss_multiplier(4.0) - 0.8).abs() < 1e-15);
        assert!((impermanent_loss_multiplier(0.25) - 0.8).abs() < 1e-15);
        let m2 = 2.0 * 2f64.sqrt() / 3.0;
        assert!((impermanent_loss_multiplier(2.0) - m2).abs() < 1e-15);
    }

    #[test]
    fn test_multiplier_is_finite_for_degenerate_ratios() {
        for r in [0.0, -3.0, f64::MIN_POSITIVE] {
            let m = impermanent_loss_multiplier(r);
            assert!(m.is_finite());
            assert!(m >= 0.0 && m < 1e-5);
        }
    }

    #[test]
    fn test_calculate_il_constant_product() {
        // Price doubles: 100 -> 200. IL = 0.9428 - 1 = -0.0572
        let il = calculate_il_constant_product(100.0, 200.0);
        assert!((il - (-0.05719)).abs() < 0.0001);
        assert_eq!(calculate_il_constant_product(100.0, 100.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_multiplier_never_exceeds_one(r in 1e-6f64..1e6) {
            prop_assert!(impermanent_loss_multiplier(r) <= 1.0);
        }

        #[test]
        fn prop_multiplier_symmetric_under_inversion(r in 1e-4f64..1e4) {
            let a = impermanent_loss_multiplier(r);
            let b = impermanent_loss_multiplier(1.0 / r);
            prop_assert!((a - b).abs() < 1e-12);
        }
    }
}
