use lp_wealth_simulation::event::SimulationEventType;
use lp_wealth_simulation::scenario::{ScenarioResult, group_by_reward_price};
use lp_wealth_simulation::summary::TrajectorySummary;
use prettytable::{Table, row};

/// Prints one summary table per reward token price.
pub fn print_summary_table(results: &[ScenarioResult], horizon_days: f64) {
    for (reward_price, members) in group_by_reward_price(results) {
        println!("\nReward token price = {reward_price} USDT");

        let mut table = Table::new();
        table.set_titles(row![
            "Scenario", "W_0", "W_T", "Min", "Max", "Change %", "Max DD %", "Annualized %"
        ]);
        for result in members {
            let Some(summary) = TrajectorySummary::from_trajectory(&result.trajectory, horizon_days)
            else {
                continue;
            };
            let annualized = summary
                .annualized_return
                .map_or_else(|| "n/a".to_string(), |r| format!("{:.2}", r * 100.0));
            table.add_row(row![
                result.label,
                format!("{:.6}", summary.initial_value),
                format!("{:.6}", summary.final_value),
                format!("{:.6}", summary.min_value),
                format!("{:.6}", summary.max_value),
                format!("{:.2}", summary.net_change_pct * 100.0),
                format!("{:.2}", summary.max_drawdown_pct * 100.0),
                annualized
            ]);
        }
        table.printstd();
    }
}

/// Prints trade counts, withheld fees and the final pool for every
/// simulated scenario. Real-data results carry no activity and are skipped.
pub fn print_activity_table(results: &[ScenarioResult]) {
    if results.iter().all(|r| r.activity.is_none()) {
        return;
    }

    let mut table = Table::new();
    table.set_titles(row![
        "Scenario", "Reward price", "Trades", "Fees (base)", "Fees (quote)", "Final price", "Reward tokens"
    ]);
    for result in results {
        let Some(activity) = &result.activity else {
            continue;
        };
        let trades = activity.events.of_type(SimulationEventType::Trade).count();
        let (base_fees, quote_fees) = activity.events.total_fees_withheld();
        table.add_row(row![
            result.label,
            result.reward_token_price,
            trades,
            format!("{base_fees:.6}"),
            format!("{quote_fees:.6}"),
            format!("{:.6}", activity.final_pool.spot_price()),
            format!("{:.6}", activity.reward_tokens)
        ]);
    }
    println!("\nTrade activity");
    table.printstd();
}

/// Formats a USD amount with thousands separators and no decimals.
pub fn format_usd(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.4), "$999");
        assert_eq!(format_usd(1_234_567.6), "$1,234,568");
        assert_eq!(format_usd(-4_500.0), "-$4,500");
    }
}
