//! Simulation events for tracking what happens during a simulated run.
//!
//! The simulated path records one event per reward accrual and per executed
//! trade, so a run can be replayed or inspected day by day.

use lp_wealth_domain::enums::TradeDirection;
use lp_wealth_domain::math::TradeOutcome;
use lp_wealth_domain::pool::PoolState;
use serde::Serialize;

/// Types of events that can occur during simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimulationEventType {
    /// Reward tokens were credited to the LP.
    RewardAccrued,
    /// A trade was executed against the pool.
    Trade,
}

/// Event-specific data payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EventData {
    /// Reward accrual data.
    RewardAccrued {
        /// Tokens credited this day.
        amount: f64,
        /// LP reward token balance after crediting.
        balance: f64,
    },
    /// Trade data.
    Trade {
        /// Trade side.
        direction: TradeDirection,
        /// Amount paid into the pool.
        amount_in: f64,
        /// Amount paid out to the trader.
        amount_out: f64,
        /// Gross output withheld as fee.
        fee_withheld: f64,
    },
}

/// A simulation event with full context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationEvent {
    /// Day on which the event occurred.
    pub day: usize,
    /// Type of event.
    pub event_type: SimulationEventType,
    /// Pool reserves after the event.
    pub pool: PoolState,
    /// Additional event-specific data.
    pub data: EventData,
}

impl SimulationEvent {
    /// Creates a reward accrual event.
    #[must_use]
    pub fn reward_accrued(day: usize, pool: PoolState, amount: f64, balance: f64) -> Self {
        Self {
            day,
            event_type: SimulationEventType::RewardAccrued,
            pool,
            data: EventData::RewardAccrued { amount, balance },
        }
    }

    /// Creates a trade event from a trade outcome.
    #[must_use]
    pub fn trade(day: usize, outcome: &TradeOutcome) -> Self {
        Self {
            day,
            event_type: SimulationEventType::Trade,
            pool: outcome.pool,
            data: EventData::Trade {
                direction: outcome.direction,
                amount_in: outcome.amount_in,
                amount_out: outcome.amount_out,
                fee_withheld: outcome.fee_withheld,
            },
        }
    }
}

/// Ordered log of simulation events.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventLog {
    events: Vec<SimulationEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn record(&mut self, event: SimulationEvent) {
        self.events.push(event);
    }

    /// All recorded events in order.
    #[must_use]
    pub fn events(&self) -> &[SimulationEvent] {
        &self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events of a given type.
    pub fn of_type(
        &self,
        event_type: SimulationEventType,
    ) -> impl Iterator<Item = &SimulationEvent> + '_ {
        self.events
            .iter()
            .filter(move |e| e.event_type == event_type)
    }

    /// Sum of fees withheld across all trades.
    #[must_use]
    pub fn total_fees_withheld(&self) -> (f64, f64) {
        self.events
            .iter()
            .fold((0.0, 0.0), |(base, quote), e| match e.data {
                EventData::Trade {
                    direction: TradeDirection::BuyBase,
                    fee_withheld,
                    ..
                } => (base + fee_withheld, quote),
                EventData::Trade {
                    direction: TradeDirection::SellBase,
                    fee_withheld,
                    ..
                } => (base, quote + fee_withheld),
                EventData::RewardAccrued { .. } => (base, quote),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_wealth_domain::math::{buy_base_with_quote, sell_base_for_quote};

    #[test]
    fn test_event_log_filters_and_fee_totals() {
        let pool = PoolState::new(100.0, 100.0).unwrap();
        let buy = buy_base_with_quote(pool, 10.0, 0.1);
        let sell = sell_base_for_quote(buy.pool, 5.0, 0.1);

        let mut log = EventLog::new();
        log.record(SimulationEvent::reward_accrued(0, pool, 0.5, 0.5));
        log.record(SimulationEvent::trade(0, &buy));
        log.record(SimulationEvent::trade(0, &sell));

        assert_eq!(log.len(), 3);
        assert_eq!(log.of_type(SimulationEventType::Trade).count(), 2);

        let (base_fees, quote_fees) = log.total_fees_withheld();
        assert_eq!(base_fees, buy.fee_withheld);
        assert_eq!(quote_fees, sell.fee_withheld);
    }
}
