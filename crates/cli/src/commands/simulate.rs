use crate::output::{print_activity_table, print_summary_table};
use anyhow::{Context, Result, bail};
use clap::Args;
use lp_wealth_data::export::{save_events_csv, save_trajectories_csv};
use lp_wealth_simulation::scenario::SimulatedGrid;
use lp_wealth_simulation::state::SimulatedPathConfig;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Simulation horizon in days
    #[arg(short, long, default_value_t = 350)]
    days: usize,

    /// Total buy:sell volume over the horizon, repeatable
    #[arg(
        long = "scenario",
        value_parser = parse_volume_pair,
        default_values = ["0:0", "45:55", "50:50", "55:45"]
    )]
    scenarios: Vec<(f64, f64)>,

    /// Reward token prices, comma separated
    #[arg(long = "reward-prices", value_delimiter = ',', default_values_t = [0.0, 1.0, 2.0])]
    reward_prices: Vec<f64>,

    /// Fee withheld from each trade's output
    #[arg(long, default_value_t = 0.05)]
    fee_rate: f64,

    /// Reward tokens emitted per day to the pool
    #[arg(long, default_value_t = 0.01)]
    reward_per_day: f64,

    /// Fraction of the pool owned by the LP
    #[arg(long, default_value_t = 0.01)]
    lp_share: f64,

    /// Initial price (quote per base)
    #[arg(long, default_value_t = 1.0)]
    initial_price: f64,

    /// Initial quote reserve
    #[arg(long, default_value_t = 50.0)]
    initial_quote: f64,

    /// Output CSV of all trajectories
    #[arg(short, long, default_value = "Wt_simulated.csv")]
    output: PathBuf,

    /// Also write every reward accrual and trade to this CSV
    #[arg(long)]
    events: Option<PathBuf>,
}

/// Parses `BUY:SELL`.
fn parse_volume_pair(raw: &str) -> std::result::Result<(f64, f64), String> {
    let (buy, sell) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected BUY:SELL, got {raw:?}"))?;
    let buy = buy
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad buy volume {buy:?}: {e}"))?;
    let sell = sell
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad sell volume {sell:?}: {e}"))?;
    Ok((buy, sell))
}

pub fn run(args: SimulateArgs) -> Result<()> {
    if args.reward_prices.is_empty() || args.scenarios.is_empty() {
        bail!("at least one reward price and one volume scenario are required");
    }

    let base = SimulatedPathConfig::new(args.days, 0.0, 0.0)
        .with_fee_rate(args.fee_rate)
        .with_reward_per_day(args.reward_per_day)
        .with_lp_share(args.lp_share)
        .with_initial_price(args.initial_price)
        .with_initial_quote_reserve(args.initial_quote);
    base.validate().context("invalid simulation parameters")?;

    println!(
        "🚀 Simulating {} scenarios over {} days...",
        args.scenarios.len() * args.reward_prices.len(),
        args.days
    );
    let results = SimulatedGrid::new(base)
        .with_reward_prices(args.reward_prices)
        .with_volume_scenarios(args.scenarios)
        .run()
        .context("simulation failed")?;

    save_trajectories_csv(&args.output, &results)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    println!("Saved: {}", args.output.display());

    if let Some(path) = &args.events {
        save_events_csv(path, &results)
            .with_context(|| format!("failed to save {}", path.display()))?;
        println!("Saved: {}", path.display());
    }

    print_summary_table(&results, args.days as f64);
    print_activity_table(&results);
    Ok(())
}
