//! Time series consumed and produced by the wealth accumulators.

use crate::error::{DomainError, Result};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// One observation of a pool's price and traded volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Start of the sampling period.
    pub timestamp: DateTime<Utc>,
    /// Close price in quote units per base unit.
    pub close: f64,
    /// Traded notional in quote units over the period.
    pub volume: f64,
}

impl PriceBar {
    /// Creates a new bar.
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            close,
            volume,
        }
    }
}

/// A validated, time-ordered, non-empty price/volume series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Sorts `bars` ascending by timestamp and validates every row.
    ///
    /// # Errors
    /// Returns an error if the series is empty, the first close is not a
    /// finite positive number, a later close is negative or not finite, or a
    /// volume is negative or not finite.
    pub fn new(mut bars: Vec<PriceBar>) -> Result<Self> {
        if bars.is_empty() {
            return Err(DomainError::EmptySeries);
        }
        bars.sort_by_key(|b| b.timestamp);

        for (index, bar) in bars.iter().enumerate() {
            // the entry close divides every later one
            if index == 0 && !(bar.close.is_finite() && bar.close > 0.0) {
                return Err(DomainError::InvalidRow {
                    index,
                    reason: format!("entry close must be positive, got {}", bar.close),
                });
            }
            if !bar.close.is_finite() || bar.close < 0.0 {
                return Err(DomainError::InvalidRow {
                    index,
                    reason: format!("close must be non-negative, got {}", bar.close),
                });
            }
            if !bar.volume.is_finite() || bar.volume < 0.0 {
                return Err(DomainError::InvalidRow {
                    index,
                    reason: format!("volume must be non-negative, got {}", bar.volume),
                });
            }
        }

        Ok(Self { bars })
    }

    /// All bars, oldest first.
    #[must_use]
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Number of bars (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Close price of the first bar, the entry price for IL.
    #[must_use]
    pub fn first_close(&self) -> f64 {
        self.bars[0].close
    }

    /// Close prices, oldest first.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Volumes, oldest first.
    #[must_use]
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Returns the sampling step if every gap between consecutive bars is
    /// identical. A single bar has no step and returns `None`.
    #[must_use]
    pub fn uniform_interval(&self) -> Option<TimeDelta> {
        let mut gaps = self
            .bars
            .windows(2)
            .map(|w| w[1].timestamp - w[0].timestamp);
        let first = gaps.next()?;
        gaps.all(|g| g == first).then_some(first)
    }

    /// Whether the bars are evenly spaced in time. One or two bars always are.
    #[must_use]
    pub fn is_uniformly_sampled(&self) -> bool {
        self.bars.len() < 3 || self.uniform_interval().is_some()
    }

    /// Fractional days elapsed between the first bar and bar `index`.
    #[must_use]
    pub fn elapsed_days(&self, index: usize) -> f64 {
        let delta = self.bars[index].timestamp - self.bars[0].timestamp;
        delta.num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
    }
}

/// One sample of an LP's wealth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WealthPoint {
    /// Position in the trajectory (day number for simulated paths).
    pub index: usize,
    /// Wall-clock time, when the trajectory comes from real data.
    pub timestamp: Option<DateTime<Utc>>,
    /// Wealth in quote units.
    pub value: f64,
}

/// Write-once sequence of wealth samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WealthTrajectory {
    points: Vec<WealthPoint>,
}

impl WealthTrajectory {
    /// Creates an empty trajectory with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Appends a point; its index is the current length.
    pub fn push(&mut self, timestamp: Option<DateTime<Utc>>, value: f64) {
        let index = self.points.len();
        self.points.push(WealthPoint {
            index,
            timestamp,
            value,
        });
    }

    /// All points in order.
    #[must_use]
    pub fn points(&self) -> &[WealthPoint] {
        &self.points
    }

    /// Wealth values in order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trajectory has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&WealthPoint> {
        self.points.first()
    }

    /// Last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&WealthPoint> {
        self.points.last()
    }
}
