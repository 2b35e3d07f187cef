//! `drills knapsack` and `drills team`

use std::fs;

use drills_core::error::{DrillsError, Result};
use drills_core::knapsack::{greedy_fractional, greedy_team, read_players, Item, Position, Valued};
use serde_json::json;

use crate::cli::{KnapsackArgs, OutputFormat, TeamArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{number, print_json, print_records_header, quoted};

fn read_items(path: &std::path::Path) -> Result<Vec<Item>> {
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

/// Execute `drills knapsack`
pub fn execute_knapsack(ctx: &CommandContext, args: &KnapsackArgs) -> Result<()> {
    let mut items = args.items.clone();
    if let Some(path) = &args.file {
        items.extend(read_items(path)?);
    }
    if items.is_empty() {
        return Err(DrillsError::UsageError(
            "no items given (use --item name:value:weight or --file)".to_string(),
        ));
    }

    let capacity = args.capacity.unwrap_or(ctx.config.knapsack.capacity);
    let key = args.sort_key.unwrap_or(ctx.config.knapsack.sort_key);

    let knapsack = greedy_fractional(&items, capacity, |item: &Item| key.apply(item))?;
    trace_command!(ctx.cli, ctx.start, "greedy_fractional");

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "capacity": capacity,
            "sort_key": key,
            "selections": knapsack.selections,
            "total_value": knapsack.total_value,
            "total_weight": knapsack.total_weight,
        }))?,
        OutputFormat::Human => {
            for selection in &knapsack.selections {
                if selection.fraction < 1.0 {
                    println!("{} x{}", selection.item, number(selection.fraction));
                } else {
                    println!("{}", selection.item);
                }
            }
            if !ctx.cli.quiet {
                println!(
                    "Total value {} at weight {} of {} (by {})",
                    number(knapsack.total_value),
                    number(knapsack.total_weight),
                    number(capacity),
                    key
                );
            }
        }
        OutputFormat::Records => {
            print_records_header(
                "knapsack",
                &[("capacity", number(capacity)), ("key", key.to_string())],
            );
            for selection in &knapsack.selections {
                println!(
                    "S {} value={} weight={} fraction={}",
                    quoted(selection.item.name()),
                    number(selection.item.value),
                    number(selection.item.weight),
                    number(selection.fraction)
                );
            }
            println!(
                "T value={} weight={}",
                number(knapsack.total_value),
                number(knapsack.total_weight)
            );
        }
    }

    Ok(())
}

/// Execute `drills team`
pub fn execute_team(ctx: &CommandContext, args: &TeamArgs) -> Result<()> {
    let players = read_players(&args.file)?;
    trace_command!(ctx.cli, ctx.start, "read_players");

    let budget = args.budget.unwrap_or(ctx.config.knapsack.capacity);
    let key = args.sort_key.unwrap_or(ctx.config.knapsack.sort_key);
    let mut constraints = ctx.config.knapsack.to_constraints();
    if let Some(max) = args.max_players {
        constraints.max_players = max;
    }

    let team = greedy_team(&players, budget, |p| key.apply(p), &constraints)?;
    trace_command!(ctx.cli, ctx.start, "greedy_team");

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "budget": budget,
            "sort_key": key,
            "max_players": constraints.max_players,
            "players": team.players,
            "total_value": team.total_value,
            "total_weight": team.total_weight,
        }))?,
        OutputFormat::Human => {
            for player in &team.players {
                println!("{}", player);
            }
            if !ctx.cli.quiet {
                let counts: Vec<String> = Position::ALL
                    .iter()
                    .map(|pos| format!("{} {}", pos, team.count(*pos)))
                    .collect();
                println!(
                    "{} players ({}), points {}, cost {} of {}",
                    team.players.len(),
                    counts.join(", "),
                    number(team.total_value),
                    number(team.total_weight),
                    number(budget)
                );
            }
        }
        OutputFormat::Records => {
            print_records_header(
                "team",
                &[
                    ("budget", number(budget)),
                    ("key", key.to_string()),
                    ("players", team.players.len().to_string()),
                ],
            );
            for player in &team.players {
                println!(
                    "P {} team={} position={} value={} weight={}",
                    quoted(&player.name),
                    quoted(&player.team),
                    player.position,
                    player.value,
                    player.weight
                );
            }
            println!(
                "T value={} weight={}",
                number(team.total_value),
                number(team.total_weight)
            );
        }
    }

    Ok(())
}
