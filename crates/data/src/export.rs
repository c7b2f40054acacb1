//! Trajectory export for plotting.
//!
//! Curves are written in long form, one row per point:
//! `scenario,reward_token_price,index,timestamp,wealth`.
//! Simulated trade logs go to a separate CSV, one row per event.

use crate::error::Result;
use csv::Writer;
use lp_wealth_simulation::event::EventData;
use lp_wealth_simulation::scenario::ScenarioResult;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
struct TrajectoryRow<'a> {
    scenario: &'a str,
    reward_token_price: f64,
    index: usize,
    timestamp: Option<String>,
    wealth: f64,
}

#[derive(Debug, Serialize)]
struct EventRow<'a> {
    scenario: &'a str,
    reward_token_price: f64,
    day: usize,
    event: &'static str,
    direction: Option<String>,
    amount_in: Option<f64>,
    amount_out: Option<f64>,
    fee_withheld: Option<f64>,
    reward_balance: Option<f64>,
    reserve_quote: f64,
    reserve_base: f64,
}

/// Writes every scenario's trajectory as long-form CSV.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_trajectories_csv<W: Write>(writer: W, results: &[ScenarioResult]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    for result in results {
        for point in result.trajectory.points() {
            writer.serialize(TrajectoryRow {
                scenario: &result.label,
                reward_token_price: result.reward_token_price,
                index: point.index,
                timestamp: point.timestamp.map(|t| t.to_rfc3339()),
                wealth: point.value,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Saves every scenario's trajectory to a CSV file.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn save_trajectories_csv<P: AsRef<Path>>(path: P, results: &[ScenarioResult]) -> Result<()> {
    let file = File::create(&path)?;
    write_trajectories_csv(file, results)?;
    info!(path = %path.as_ref().display(), scenarios = results.len(), "saved trajectories");
    Ok(())
}

/// Writes the event log of every simulated scenario as CSV. Scenarios
/// without trade activity are skipped.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_events_csv<W: Write>(writer: W, results: &[ScenarioResult]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    for result in results {
        let Some(activity) = &result.activity else {
            continue;
        };
        for event in activity.events.events() {
            let mut row = EventRow {
                scenario: &result.label,
                reward_token_price: result.reward_token_price,
                day: event.day,
                event: "reward",
                direction: None,
                amount_in: None,
                amount_out: None,
                fee_withheld: None,
                reward_balance: None,
                reserve_quote: event.pool.reserve_quote,
                reserve_base: event.pool.reserve_base,
            };
            match &event.data {
                EventData::RewardAccrued { amount, balance } => {
                    row.amount_out = Some(*amount);
                    row.reward_balance = Some(*balance);
                }
                EventData::Trade {
                    direction,
                    amount_in,
                    amount_out,
                    fee_withheld,
                } => {
                    row.event = "trade";
                    row.direction = Some(direction.to_string());
                    row.amount_in = Some(*amount_in);
                    row.amount_out = Some(*amount_out);
                    row.fee_withheld = Some(*fee_withheld);
                }
            }
            writer.serialize(row)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Saves simulated event logs to a CSV file.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn save_events_csv<P: AsRef<Path>>(path: P, results: &[ScenarioResult]) -> Result<()> {
    let file = File::create(&path)?;
    write_events_csv(file, results)?;
    let events: usize = results
        .iter()
        .filter_map(|r| r.activity.as_ref())
        .map(|a| a.events.len())
        .sum();
    info!(path = %path.as_ref().display(), events, "saved event logs");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use lp_wealth_domain::series::WealthTrajectory;
    use lp_wealth_simulation::scenario::SimulatedGrid;
    use lp_wealth_simulation::state::SimulatedPathConfig;

    #[test]
    fn test_write_trajectories_csv() {
        let mut simulated = WealthTrajectory::with_capacity(2);
        simulated.push(None, 1.0);
        simulated.push(None, 1.5);

        let mut real = WealthTrajectory::with_capacity(1);
        real.push(DateTime::from_timestamp(0, 0), 0.25);

        let results = vec![
            ScenarioResult {
                label: "Volume (buy,sell)=(0,0)".to_string(),
                reward_token_price: 0.0,
                trajectory: simulated,
                activity: None,
            },
            ScenarioResult {
                label: "volume x1".to_string(),
                reward_token_price: 2.0,
                trajectory: real,
                activity: None,
            },
        ];

        let mut out = Vec::new();
        write_trajectories_csv(&mut out, &results).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("scenario,reward_token_price,index,timestamp,wealth\n"));

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);

        assert_eq!(&records[0][0], "Volume (buy,sell)=(0,0)");
        assert_eq!(&records[1][2], "1");
        assert_eq!(&records[1][3], "");
        assert_eq!(records[1][4].parse::<f64>().unwrap(), 1.5);

        assert_eq!(&records[2][0], "volume x1");
        assert_eq!(records[2][1].parse::<f64>().unwrap(), 2.0);
        assert_eq!(&records[2][3], "1970-01-01T00:00:00+00:00");
        assert_eq!(records[2][4].parse::<f64>().unwrap(), 0.25);
    }

    #[test]
    fn test_write_events_csv() {
        let results = SimulatedGrid::new(SimulatedPathConfig::new(2, 10.0, 10.0))
            .with_reward_prices(vec![1.0])
            .with_volume_scenarios(vec![(10.0, 10.0)])
            .run()
            .unwrap();

        let mut out = Vec::new();
        write_events_csv(&mut out, &results).unwrap();
        let mut reader = csv::Reader::from_reader(out.as_slice());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        // per day: one reward accrual, one buy, one sell
        assert_eq!(records.len(), 6);
        assert_eq!(&records[0][3], "reward");
        assert_eq!(&records[0][4], "");
        assert_eq!(&records[1][3], "trade");
        assert_eq!(&records[1][4], "buy");
        assert_eq!(&records[2][4], "sell");
        assert!(records[2][7].parse::<f64>().unwrap() > 0.0);
        assert_eq!(&records[5][2], "1");
    }

    #[test]
    fn test_write_events_csv_skips_real_data() {
        let results = vec![ScenarioResult {
            label: "volume x1".to_string(),
            reward_token_price: 0.0,
            trajectory: WealthTrajectory::default(),
            activity: None,
        }];
        let mut out = Vec::new();
        write_events_csv(&mut out, &results).unwrap();
        assert!(out.is_empty());
    }
}
