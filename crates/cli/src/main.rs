//! Command Line Interface for the LP wealth replication.
use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

use commands::{fetch_ohlcv, fetch_yields, real_data, simulate};
use config::ApiConfig;

#[derive(Parser)]
#[command(name = "lp-wealth")]
#[command(about = "Liquidity provider wealth simulation and market data CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a yield pool on DefiLlama and save its APY/TVL history
    FetchYields(fetch_yields::FetchYieldsArgs),
    /// Download pool OHLCV candles from GeckoTerminal to CSV
    FetchOhlcv(fetch_ohlcv::FetchOhlcvArgs),
    /// Simulate LP wealth under daily buy/sell trades
    Simulate(simulate::SimulateArgs),
    /// Compute LP wealth from a real OHLCV series
    RealData(real_data::RealDataArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let api = ApiConfig::from_env();

    match cli.command {
        Commands::FetchYields(args) => fetch_yields::run(&api, args).await,
        Commands::FetchOhlcv(args) => fetch_ohlcv::run(&api, args).await,
        Commands::Simulate(args) => simulate::run(args),
        Commands::RealData(args) => real_data::run(args),
    }
}
