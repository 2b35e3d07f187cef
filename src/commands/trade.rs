//! `drills trade` - moving-average crossover simulation

use std::fs;
use std::path::Path;

use drills_core::error::{DrillsError, Result};
use drills_core::trading::{simulate, Leader};
use serde_json::json;

use crate::cli::{OutputFormat, TradeArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{number, print_json, print_records_header};

fn read_prices(path: &Path) -> Result<Vec<f64>> {
    let content = fs::read_to_string(path).map_err(|e| DrillsError::FailedOperation {
        operation: format!("read {}", path.display()),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| DrillsError::InvalidInput {
        path: path.to_path_buf(),
        line: e.line(),
        reason: e.to_string(),
    })
}

fn action(leader: Leader) -> &'static str {
    match leader {
        Leader::First => "buy",
        Leader::Second => "sell",
    }
}

/// Execute `drills trade`
pub fn execute(ctx: &CommandContext, args: &TradeArgs) -> Result<()> {
    let prices = match &args.file {
        Some(path) => read_prices(path)?,
        None => args.prices.clone(),
    };
    let short = args.short.unwrap_or(ctx.config.trading.short_window);
    let long = args.long.unwrap_or(ctx.config.trading.long_window);
    let cash = args.cash.unwrap_or(ctx.config.trading.starting_cash);

    let sim = simulate(&prices, short, long, cash)?;
    trace_command!(ctx.cli, ctx.start, "simulate");

    let final_value = sim.final_value().unwrap_or(cash);

    match ctx.cli.format {
        OutputFormat::Json => {
            let crossovers: Vec<_> = sim
                .crossovers
                .iter()
                .map(|c| {
                    json!({
                        "index": c.index,
                        "leader": c.leader,
                        "action": action(c.leader),
                        "price": prices[c.index],
                    })
                })
                .collect();
            print_json(&json!({
                "short_window": short,
                "long_window": long,
                "starting_cash": cash,
                "final_value": final_value,
                "crossovers": crossovers,
                "short_average": sim.short_average,
                "long_average": sim.long_average,
                "values": sim.values,
            }))?;
        }
        OutputFormat::Human => {
            for c in &sim.crossovers {
                println!("{:>5}  {:<4} at {}", c.index, action(c.leader), number(prices[c.index]));
            }
            if sim.crossovers.is_empty() && !ctx.cli.quiet {
                println!("No crossovers; holding cash");
            }
            println!(
                "Final value {} from {} ({}/{} day averages)",
                number(final_value),
                number(cash),
                short,
                long
            );
        }
        OutputFormat::Records => {
            print_records_header(
                "trade",
                &[
                    ("short", short.to_string()),
                    ("long", long.to_string()),
                    ("cash", number(cash)),
                    ("prices", prices.len().to_string()),
                ],
            );
            for c in &sim.crossovers {
                println!(
                    "X index={} action={} price={}",
                    c.index,
                    action(c.leader),
                    number(prices[c.index])
                );
            }
            println!("T value={}", number(final_value));
        }
    }

    Ok(())
}
