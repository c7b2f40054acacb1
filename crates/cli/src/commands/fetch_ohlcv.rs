use crate::config::ApiConfig;
use anyhow::{Context, Result};
use clap::Args;
use lp_wealth_data::providers::GeckoTerminalProvider;
use lp_wealth_data::storage::save_candles_csv;
use lp_wealth_data::{OhlcvProvider, OhlcvRequest};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct FetchOhlcvArgs {
    /// Network slug
    #[arg(long, default_value = "eth")]
    network: String,

    /// Pool contract address
    #[arg(long, default_value = "0x0d4a11d5eeaac28ec3f61d100daf4d40471f1852")]
    pool: String,

    /// Candle timeframe (day, hour, minute)
    #[arg(long, default_value = "day")]
    timeframe: String,

    /// Number of candles
    #[arg(short, long, default_value_t = 180)]
    limit: u32,

    /// Candle aggregation factor
    #[arg(long, default_value_t = 1)]
    aggregate: u32,

    /// Output CSV; defaults to ohlcv_{network}_{pool}_{timeframe}_{limit}d.csv
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(api: &ApiConfig, args: FetchOhlcvArgs) -> Result<()> {
    let provider = GeckoTerminalProvider::with_base_url(&api.geckoterminal_base_url)?;
    let request = OhlcvRequest {
        network: args.network,
        pool_address: args.pool,
        timeframe: args.timeframe,
        limit: args.limit,
        aggregate: args.aggregate,
    };

    println!(
        "🔍 Fetching {} {} candles for {} on {}...",
        request.limit, request.timeframe, request.pool_address, request.network
    );
    let candles = provider
        .fetch_ohlcv(&request)
        .await
        .context("failed to fetch OHLCV")?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(request.default_file_name()));
    save_candles_csv(&output, &candles)
        .with_context(|| format!("failed to save {}", output.display()))?;
    println!("Saved: {}", output.display());

    println!(
        "{:<20} | {:<12} | {:<12} | {:<12} | {:<12} | {:<14}",
        "Time", "Open", "High", "Low", "Close", "Volume"
    );
    println!("{}", "-".repeat(98));
    for candle in &candles[candles.len().saturating_sub(5)..] {
        println!(
            "{:<20} | {:<12.4} | {:<12.4} | {:<12.4} | {:<12.4} | {:<14.2}",
            candle.timestamp.format("%Y-%m-%d %H:%M"),
            candle.open,
            candle.high,
            candle.low,
            candle.close,
            candle.volume
        );
    }

    Ok(())
}
