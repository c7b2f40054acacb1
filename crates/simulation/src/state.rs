//! Simulation configuration.
//!
//! Both accumulators take a plain parameter struct built with `new` plus
//! `with_*` setters and checked once by `validate()` before the run starts.

use crate::error::{Result, SimulationError};
use serde::{Deserialize, Serialize};

/// Configuration for the trade-driven simulated path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedPathConfig {
    /// Simulation horizon in days.
    pub days: usize,
    /// Total quote spent buying base over the horizon.
    pub total_buy: f64,
    /// Total quote-equivalent of base sold over the horizon.
    pub total_sell: f64,
    /// Proportional fee withheld from each trade's output.
    pub fee_rate: f64,
    /// Reward tokens emitted per day to the whole pool.
    pub reward_per_day: f64,
    /// Fraction of the pool owned by the LP.
    pub lp_share: f64,
    /// Price of one reward token in quote units.
    pub reward_token_price: f64,
    /// Initial spot price (quote per base).
    pub initial_price: f64,
    /// Initial quote reserve.
    pub initial_quote_reserve: f64,
}

impl Default for SimulatedPathConfig {
    fn default() -> Self {
        Self {
            days: 350,
            total_buy: 50.0,
            total_sell: 50.0,
            fee_rate: 0.05,
            reward_per_day: 0.01,
            lp_share: 0.01,
            reward_token_price: 0.0,
            initial_price: 1.0,
            initial_quote_reserve: 50.0,
        }
    }
}

impl SimulatedPathConfig {
    /// Creates a config for the given horizon and trade volumes, other
    /// parameters at their defaults.
    #[must_use]
    pub fn new(days: usize, total_buy: f64, total_sell: f64) -> Self {
        Self {
            days,
            total_buy,
            total_sell,
            ..Self::default()
        }
    }

    /// Sets the fee rate.
    #[must_use]
    pub fn with_fee_rate(mut self, fee_rate: f64) -> Self {
        self.fee_rate = fee_rate;
        self
    }

    /// Sets the daily reward emission.
    #[must_use]
    pub fn with_reward_per_day(mut self, reward_per_day: f64) -> Self {
        self.reward_per_day = reward_per_day;
        self
    }

    /// Sets the LP pool share.
    #[must_use]
    pub fn with_lp_share(mut self, lp_share: f64) -> Self {
        self.lp_share = lp_share;
        self
    }

    /// Sets the reward token price.
    #[must_use]
    pub fn with_reward_token_price(mut self, price: f64) -> Self {
        self.reward_token_price = price;
        self
    }

    /// Sets the initial spot price.
    #[must_use]
    pub fn with_initial_price(mut self, price: f64) -> Self {
        self.initial_price = price;
        self
    }

    /// Sets the initial quote reserve.
    #[must_use]
    pub fn with_initial_quote_reserve(mut self, reserve: f64) -> Self {
        self.initial_quote_reserve = reserve;
        self
    }

    /// Quote spent buying per day.
    #[must_use]
    pub fn buy_per_day(&self) -> f64 {
        self.total_buy / self.days as f64
    }

    /// Quote-equivalent sold per day.
    #[must_use]
    pub fn sell_per_day(&self) -> f64 {
        self.total_sell / self.days as f64
    }

    /// Checks every parameter.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameter`] for the first bad value.
    pub fn validate(&self) -> Result<()> {
        if self.days == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "days",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        non_negative("total_buy", self.total_buy)?;
        non_negative("total_sell", self.total_sell)?;
        fee_rate(self.fee_rate)?;
        non_negative("reward_per_day", self.reward_per_day)?;
        share(self.lp_share)?;
        non_negative("reward_token_price", self.reward_token_price)?;
        positive("initial_price", self.initial_price)?;
        positive("initial_quote_reserve", self.initial_quote_reserve)?;
        Ok(())
    }
}

/// How reward tokens accrue along a real price series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardAccrual {
    /// One day of rewards per sample index. Requires evenly spaced bars.
    #[default]
    PerSample,
    /// Rewards proportional to wall-clock days since the first bar.
    ElapsedDays,
}

/// Configuration for the closed-form real-data path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealDataConfig {
    /// Value of the LP position at the first bar.
    pub initial_value: f64,
    /// Fraction of the pool owned by the LP.
    pub lp_share: f64,
    /// Fee rate charged on volume.
    pub fee_rate: f64,
    /// Reward tokens emitted per day to the whole pool.
    pub reward_per_day: f64,
    /// Price of one reward token in quote units.
    pub reward_token_price: f64,
    /// Multiplier applied to observed volume for fee income.
    pub volume_scale: f64,
    /// Reward accrual mode.
    pub reward_accrual: RewardAccrual,
}

impl Default for RealDataConfig {
    fn default() -> Self {
        Self {
            initial_value: 1.0,
            lp_share: 0.0001,
            fee_rate: 0.003,
            reward_per_day: 0.0,
            reward_token_price: 0.0,
            volume_scale: 1.0,
            reward_accrual: RewardAccrual::PerSample,
        }
    }
}

impl RealDataConfig {
    /// Creates a config with the given position size and share.
    #[must_use]
    pub fn new(initial_value: f64, lp_share: f64) -> Self {
        Self {
            initial_value,
            lp_share,
            ..Self::default()
        }
    }

    /// Sets the fee rate.
    #[must_use]
    pub fn with_fee_rate(mut self, fee_rate: f64) -> Self {
        self.fee_rate = fee_rate;
        self
    }

    /// Sets the daily reward emission.
    #[must_use]
    pub fn with_reward_per_day(mut self, reward_per_day: f64) -> Self {
        self.reward_per_day = reward_per_day;
        self
    }

    /// Sets the reward token price.
    #[must_use]
    pub fn with_reward_token_price(mut self, price: f64) -> Self {
        self.reward_token_price = price;
        self
    }

    /// Sets the volume scale.
    #[must_use]
    pub fn with_volume_scale(mut self, scale: f64) -> Self {
        self.volume_scale = scale;
        self
    }

    /// Sets the reward accrual mode.
    #[must_use]
    pub fn with_reward_accrual(mut self, accrual: RewardAccrual) -> Self {
        self.reward_accrual = accrual;
        self
    }

    /// Checks every parameter.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameter`] for the first bad value.
    pub fn validate(&self) -> Result<()> {
        non_negative("initial_value", self.initial_value)?;
        share(self.lp_share)?;
        fee_rate(self.fee_rate)?;
        non_negative("reward_per_day", self.reward_per_day)?;
        non_negative("reward_token_price", self.reward_token_price)?;
        non_negative("volume_scale", self.volume_scale)?;
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimulationError::InvalidParameter {
            name,
            value,
            reason: "must be finite and non-negative",
        });
    }
    Ok(())
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SimulationError::InvalidParameter {
            name,
            value,
            reason: "must be finite and positive",
        });
    }
    Ok(())
}

fn fee_rate(value: f64) -> Result<()> {
    if !(0.0..1.0).contains(&value) {
        return Err(SimulationError::InvalidParameter {
            name: "fee_rate",
            value,
            reason: "must be in [0, 1)",
        });
    }
    Ok(())
}

fn share(value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SimulationError::InvalidParameter {
            name: "lp_share",
            value,
            reason: "must be in [0, 1]",
        });
    }
    Ok(())
}
