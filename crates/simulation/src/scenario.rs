//! Scenario grids.
//!
//! A grid runs one accumulator per parameter combination and labels each
//! curve so a renderer can draw one panel per reward token price.

use crate::error::Result;
use crate::event::EventLog;
use crate::real_data::compute_real_wealth;
use crate::simulated_path::simulate_wealth;
use crate::state::{RealDataConfig, SimulatedPathConfig};
use lp_wealth_domain::pool::PoolState;
use lp_wealth_domain::series::{PriceSeries, WealthTrajectory};
use serde::Serialize;
use tracing::info;

/// One labelled curve of a grid.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    /// Curve label, unique within a reward price group.
    pub label: String,
    /// Reward token price the curve was computed with.
    pub reward_token_price: f64,
    /// Wealth trajectory.
    pub trajectory: WealthTrajectory,
    /// Pool and trade details; only the simulated path has them.
    pub activity: Option<TradeActivity>,
}

/// What a simulated run did to the pool.
#[derive(Debug, Clone, Serialize)]
pub struct TradeActivity {
    /// Pool reserves after the last trade.
    pub final_pool: PoolState,
    /// LP reward token balance at the end.
    pub reward_tokens: f64,
    /// Reward accruals and trades, in order.
    pub events: EventLog,
}

/// Grid over reward token prices and volume scales for real data.
#[derive(Debug, Clone)]
pub struct RealDataGrid {
    /// Parameters shared by every scenario.
    pub base: RealDataConfig,
    /// Reward token prices, one panel each.
    pub reward_prices: Vec<f64>,
    /// Volume scales, one curve per panel each.
    pub volume_scales: Vec<f64>,
}

impl RealDataGrid {
    /// Creates a grid with the default prices `[0, 1, 2]` and volume scales
    /// `[0, 0.7, 1, 1.3]`.
    #[must_use]
    pub fn new(base: RealDataConfig) -> Self {
        Self {
            base,
            reward_prices: vec![0.0, 1.0, 2.0],
            volume_scales: vec![0.0, 0.7, 1.0, 1.3],
        }
    }

    /// Sets the reward token prices.
    #[must_use]
    pub fn with_reward_prices(mut self, prices: Vec<f64>) -> Self {
        self.reward_prices = prices;
        self
    }

    /// Sets the volume scales.
    #[must_use]
    pub fn with_volume_scales(mut self, scales: Vec<f64>) -> Self {
        self.volume_scales = scales;
        self
    }

    /// Runs every combination, reward price major.
    ///
    /// # Errors
    /// Fails on the first scenario whose configuration is rejected.
    pub fn run(&self, series: &PriceSeries) -> Result<Vec<ScenarioResult>> {
        let mut results = Vec::with_capacity(self.reward_prices.len() * self.volume_scales.len());
        for &reward_price in &self.reward_prices {
            for &scale in &self.volume_scales {
                let config = self
                    .base
                    .clone()
                    .with_reward_token_price(reward_price)
                    .with_volume_scale(scale);
                let result = compute_real_wealth(series, &config)?;
                results.push(ScenarioResult {
                    label: format!("volume x{scale}"),
                    reward_token_price: reward_price,
                    trajectory: result.trajectory,
                    activity: None,
                });
            }
        }
        info!(scenarios = results.len(), bars = series.len(), "real-data grid complete");
        Ok(results)
    }
}

/// Grid over reward token prices and (buy, sell) volume pairs for the
/// simulated path.
#[derive(Debug, Clone)]
pub struct SimulatedGrid {
    /// Parameters shared by every scenario.
    pub base: SimulatedPathConfig,
    /// Reward token prices, one panel each.
    pub reward_prices: Vec<f64>,
    /// Total (buy, sell) volumes over the horizon.
    pub volume_scenarios: Vec<(f64, f64)>,
}

impl SimulatedGrid {
    /// Creates a grid with the default prices `[0, 1, 2]` and volume pairs
    /// `(0,0) (45,55) (50,50) (55,45)`.
    #[must_use]
    pub fn new(base: SimulatedPathConfig) -> Self {
        Self {
            base,
            reward_prices: vec![0.0, 1.0, 2.0],
            volume_scenarios: vec![(0.0, 0.0), (45.0, 55.0), (50.0, 50.0), (55.0, 45.0)],
        }
    }

    /// Sets the reward token prices.
    #[must_use]
    pub fn with_reward_prices(mut self, prices: Vec<f64>) -> Self {
        self.reward_prices = prices;
        self
    }

    /// Sets the (buy, sell) volume pairs.
    #[must_use]
    pub fn with_volume_scenarios(mut self, scenarios: Vec<(f64, f64)>) -> Self {
        self.volume_scenarios = scenarios;
        self
    }

    /// Runs every combination, reward price major.
    ///
    /// # Errors
    /// Fails on the first scenario whose configuration is rejected.
    pub fn run(&self) -> Result<Vec<ScenarioResult>> {
        let mut results =
            Vec::with_capacity(self.reward_prices.len() * self.volume_scenarios.len());
        for &reward_price in &self.reward_prices {
            for &(buy, sell) in &self.volume_scenarios {
                let config = SimulatedPathConfig {
                    total_buy: buy,
                    total_sell: sell,
                    reward_token_price: reward_price,
                    ..self.base.clone()
                };
                let result = simulate_wealth(&config)?;
                results.push(ScenarioResult {
                    label: format!("Volume (buy,sell)=({buy},{sell})"),
                    reward_token_price: reward_price,
                    trajectory: result.trajectory,
                    activity: Some(TradeActivity {
                        final_pool: result.final_pool,
                        reward_tokens: result.reward_tokens,
                        events: result.events,
                    }),
                });
            }
        }
        info!(scenarios = results.len(), days = self.base.days, "simulated grid complete");
        Ok(results)
    }
}

/// Groups results by reward token price, keeping first-seen order.
#[must_use]
pub fn group_by_reward_price(results: &[ScenarioResult]) -> Vec<(f64, Vec<&ScenarioResult>)> {
    let mut groups: Vec<(f64, Vec<&ScenarioResult>)> = Vec::new();
    for result in results {
        match groups
            .iter_mut()
            .find(|(price, _)| *price == result.reward_token_price)
        {
            Some((_, members)) => members.push(result),
            None => groups.push((result.reward_token_price, vec![result])),
        }
    }
    groups
}
