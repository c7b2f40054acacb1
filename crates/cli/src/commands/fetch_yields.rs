use crate::config::ApiConfig;
use crate::output::format_usd;
use anyhow::{Context, Result};
use clap::Args;
use lp_wealth_data::YieldDataProvider;
use lp_wealth_data::providers::{DefiLlamaProvider, candidate_pools, find_pool};
use lp_wealth_data::storage::save_yield_history_json;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug)]
pub struct FetchYieldsArgs {
    /// Protocol slug to match exactly
    #[arg(long, default_value = "aave-v3")]
    project: String,

    /// Chain name to match exactly
    #[arg(long, default_value = "Ethereum")]
    chain: String,

    /// Asset that must appear in the pool symbol
    #[arg(long, default_value = "USDT")]
    asset: String,

    /// Where to save the pool history
    #[arg(short, long, default_value = "aave_usdt_history.json")]
    output: PathBuf,

    /// Also list matching lend/borrow rates
    #[arg(long)]
    lend_borrow: bool,
}

/// Protocol family used for the fallback search, e.g. `aave` for `aave-v3`.
fn project_family(project: &str) -> &str {
    project.split('-').next().unwrap_or(project)
}

pub async fn run(api: &ApiConfig, args: FetchYieldsArgs) -> Result<()> {
    let provider = DefiLlamaProvider::with_base_url(&api.defillama_base_url)?;
    let family = project_family(&args.project);

    println!("📡 Fetching yield pools...");
    let pools = provider
        .pools()
        .await
        .context("failed to fetch yield pools")?;

    let Some(pool) = find_pool(&pools, &args.project, &args.chain, &args.asset) else {
        println!(
            "Searching all {} pools on {}...",
            args.asset, args.chain
        );
        for candidate in candidate_pools(&pools, &args.chain, &args.asset, family) {
            println!(
                "  {}: {} - {}",
                candidate.project, candidate.symbol, candidate.pool
            );
        }
        return Ok(());
    };

    println!("Found: {} - Pool: {}", pool.symbol, pool.pool);
    println!("\nPool ID: {}", pool.pool);
    match pool.apy {
        Some(apy) => println!("Current APY: {apy}%"),
        None => println!("Current APY: N/A%"),
    }
    println!("TVL: {}", format_usd(pool.tvl_usd.unwrap_or(0.0)));

    match provider
        .pool_history(&pool.pool)
        .await
        .context("failed to fetch pool history")?
    {
        Some(history) => {
            println!("\nHistorical data points: {}", history.len());
            save_yield_history_json(&args.output, &history)
                .with_context(|| format!("failed to save {}", args.output.display()))?;
            println!("Data saved to {}", args.output.display());

            for point in &history[history.len().saturating_sub(5)..] {
                println!(
                    "  {}: APY={:.2}%, TVL={}",
                    point.timestamp.format("%Y-%m-%d"),
                    point.apy.unwrap_or(0.0),
                    format_usd(point.tvl_usd.unwrap_or(0.0))
                );
            }
        }
        None => warn!(pool = %pool.pool, "no history available"),
    }

    if args.lend_borrow {
        let rows = provider
            .lend_borrow()
            .await
            .context("failed to fetch lend/borrow rates")?
            .unwrap_or_default();
        let chain = args.chain.as_str();
        for row in rows.iter().filter(|r| {
            r.project
                .as_deref()
                .is_some_and(|p| p.to_lowercase().contains(family))
                && r.chain.as_deref() == Some(chain)
                && r.symbol
                    .as_deref()
                    .is_some_and(|s| s.contains(args.asset.as_str()))
        }) {
            println!("Lend/Borrow: {row:?}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_family() {
        assert_eq!(project_family("aave-v3"), "aave");
        assert_eq!(project_family("compound"), "compound");
    }
}
