use crate::output::print_summary_table;
use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use lp_wealth_data::export::save_trajectories_csv;
use lp_wealth_data::storage::load_price_series_csv;
use lp_wealth_domain::metrics::impermanent_loss::calculate_il_constant_product;
use lp_wealth_domain::series::PriceSeries;
use lp_wealth_simulation::scenario::RealDataGrid;
use lp_wealth_simulation::state::{RealDataConfig, RewardAccrual};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AccrualArg {
    /// One day of rewards per row; rows must be evenly spaced
    PerSample,
    /// Rewards by wall-clock days since the first row
    ElapsedDays,
}

impl From<AccrualArg> for RewardAccrual {
    fn from(arg: AccrualArg) -> Self {
        match arg {
            AccrualArg::PerSample => RewardAccrual::PerSample,
            AccrualArg::ElapsedDays => RewardAccrual::ElapsedDays,
        }
    }
}

#[derive(Args, Debug)]
pub struct RealDataArgs {
    /// OHLCV CSV with ts or datetime_utc, close and volume columns
    #[arg(short, long)]
    input: PathBuf,

    /// LP position value at the first row
    #[arg(long, default_value_t = 1.0)]
    initial_value: f64,

    /// Fraction of the pool owned by the LP
    #[arg(long, default_value_t = 0.0001)]
    lp_share: f64,

    /// Fee rate charged on volume
    #[arg(long, default_value_t = 0.003)]
    fee_rate: f64,

    /// Reward tokens emitted per day to the pool
    #[arg(long, default_value_t = 0.0)]
    reward_per_day: f64,

    /// Reward token prices, comma separated
    #[arg(long = "reward-prices", value_delimiter = ',', default_values_t = [0.0, 1.0, 2.0])]
    reward_prices: Vec<f64>,

    /// Volume multipliers, comma separated
    #[arg(long = "volume-scales", value_delimiter = ',', default_values_t = [0.0, 0.7, 1.0, 1.3])]
    volume_scales: Vec<f64>,

    /// How reward tokens accrue along the series
    #[arg(long, value_enum, default_value_t = AccrualArg::PerSample)]
    reward_accrual: AccrualArg,

    /// Output CSV of all trajectories
    #[arg(short, long, default_value = "figc_realdata_analogue.csv")]
    output: PathBuf,
}

pub fn run(args: RealDataArgs) -> Result<()> {
    if args.reward_prices.is_empty() || args.volume_scales.is_empty() {
        bail!("at least one reward price and one volume scale are required");
    }

    let series = load_price_series_csv(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let base = RealDataConfig::new(args.initial_value, args.lp_share)
        .with_fee_rate(args.fee_rate)
        .with_reward_per_day(args.reward_per_day)
        .with_reward_accrual(args.reward_accrual.into());
    base.validate().context("invalid real-data parameters")?;
    check_sampling(&series, args.reward_accrual)?;

    let last = series.len() - 1;
    let il = calculate_il_constant_product(series.first_close(), series.bars()[last].close);
    println!(
        "Price {:.6} -> {:.6}, impermanent loss {:.2}%",
        series.first_close(),
        series.bars()[last].close,
        il * 100.0
    );

    println!(
        "📊 Computing {} scenarios over {} rows...",
        args.reward_prices.len() * args.volume_scales.len(),
        series.len()
    );
    let results = RealDataGrid::new(base)
        .with_reward_prices(args.reward_prices)
        .with_volume_scales(args.volume_scales)
        .run(&series)
        .context("wealth computation failed")?;

    save_trajectories_csv(&args.output, &results)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    println!("Saved: {}", args.output.display());

    print_summary_table(&results, series.elapsed_days(last));
    Ok(())
}

/// Per-sample accrual counts rows, so it needs evenly spaced rows.
fn check_sampling(series: &PriceSeries, accrual: AccrualArg) -> Result<()> {
    if accrual == AccrualArg::PerSample && !series.is_uniformly_sampled() {
        bail!(
            "rows in the input are not evenly spaced (a candle may be missing); \
             rerun with --reward-accrual elapsed-days to accrue rewards by wall-clock time"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use lp_wealth_domain::series::PriceBar;

    fn series(days: &[i64]) -> PriceSeries {
        let bars = days
            .iter()
            .map(|&d| PriceBar::new(DateTime::from_timestamp(d * 86_400, 0).unwrap(), 1.0, 0.0))
            .collect();
        PriceSeries::new(bars).unwrap()
    }

    #[test]
    fn test_check_sampling_names_flag() {
        let gappy = series(&[0, 1, 3]);
        let err = check_sampling(&gappy, AccrualArg::PerSample).unwrap_err();
        assert!(err.to_string().contains("--reward-accrual elapsed-days"));

        assert!(check_sampling(&gappy, AccrualArg::ElapsedDays).is_ok());
        assert!(check_sampling(&series(&[0, 1, 2]), AccrualArg::PerSample).is_ok());
    }
}
