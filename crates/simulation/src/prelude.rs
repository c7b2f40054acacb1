//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use lp_wealth_simulation::prelude::*;
//! ```

// Errors
pub use crate::error::{Result, SimulationError};

// Events
pub use crate::event::{EventData, EventLog, SimulationEvent, SimulationEventType};

// Real-data path
pub use crate::real_data::{RealDataResult, compute_real_wealth};

// Scenario grids
pub use crate::scenario::{
    RealDataGrid, ScenarioResult, SimulatedGrid, TradeActivity, group_by_reward_price,
};

// Simulated path
pub use crate::simulated_path::{SimulatedPathResult, lp_wealth, simulate_wealth};

// Configuration
pub use crate::state::{RealDataConfig, RewardAccrual, SimulatedPathConfig};

// Summaries
pub use crate::summary::TrajectorySummary;
