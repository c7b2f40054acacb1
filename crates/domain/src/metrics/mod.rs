use serde::{Deserialize, Serialize};

pub mod fees;
pub mod impermanent_loss;

/// Breakdown of an LP's wealth at one point in time, in quote units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WealthComponents {
    /// Pool position value, impermanent loss included, fees excluded.
    pub lp_value: f64,
    /// Fee income accumulated so far.
    pub cumulative_fees: f64,
    /// Value of reward tokens accrued so far.
    pub reward_value: f64,
}

impl WealthComponents {
    /// Total wealth.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.lp_value + self.cumulative_fees + self.reward_value
    }
}
