use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Reserves of a two-asset constant-product pool.
///
/// `reserve_quote` is denominated in the quote currency (e.g. USDT) and
/// `reserve_base` in the traded asset (e.g. ETH). Both are expected to stay
/// strictly positive; trades far larger than the reserve depth are a caller
/// error and are not guarded against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolState {
    /// Quote-currency reserve (`x`).
    pub reserve_quote: f64,
    /// Base-asset reserve (`y`).
    pub reserve_base: f64,
}

impl PoolState {
    /// Creates a pool state from raw reserves.
    ///
    /// # Errors
    /// Returns an error if either reserve is not a finite positive number.
    pub fn new(reserve_quote: f64, reserve_base: f64) -> Result<Self> {
        check_reserve("quote", reserve_quote)?;
        check_reserve("base", reserve_base)?;
        Ok(Self {
            reserve_quote,
            reserve_base,
        })
    }

    /// Seeds a pool with `reserve_quote` of quote and the base amount that
    /// sets the spot price to `price` (quote per base).
    ///
    /// # Errors
    /// Returns an error if the price or the reserve is not a finite positive number.
    pub fn from_price(reserve_quote: f64, price: f64) -> Result<Self> {
        if !price.is_finite() || price <= 0.0 {
            return Err(DomainError::InvalidPrice(price));
        }
        Self::new(reserve_quote, reserve_quote / price)
    }

    /// The constant product `k = x * y`.
    #[must_use]
    pub fn k(&self) -> f64 {
        self.reserve_quote * self.reserve_base
    }

    /// Spot price of the base asset in quote units (`x / y`).
    #[must_use]
    pub fn spot_price(&self) -> f64 {
        self.reserve_quote / self.reserve_base
    }

    /// Total pool value in quote units at the pool's own spot price.
    ///
    /// For a constant-product pool this is always `2 * x`.
    #[must_use]
    pub fn value_in_quote(&self) -> f64 {
        2.0 * self.reserve_quote
    }
}

fn check_reserve(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::InvalidReserve { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_price() {
        let pool = PoolState::from_price(50.0, 2.0).unwrap();
        assert_eq!(pool.reserve_quote, 50.0);
        assert_eq!(pool.reserve_base, 25.0);
        assert_eq!(pool.spot_price(), 2.0);
        assert_eq!(pool.k(), 1250.0);
    }

    #[test]
    fn test_value_in_quote_matches_mark_to_market() {
        let pool = PoolState::new(120.0, 40.0).unwrap();
        let marked = pool.reserve_quote + pool.reserve_base * pool.spot_price();
        assert!((pool.value_in_quote() - marked).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_reserves() {
        assert!(matches!(
            PoolState::new(0.0, 1.0),
            Err(DomainError::InvalidReserve { name: "quote", .. })
        ));
        assert!(PoolState::new(1.0, f64::NAN).is_err());
        assert_eq!(
            PoolState::from_price(10.0, -1.0),
            Err(DomainError::InvalidPrice(-1.0))
        );
    }
}
