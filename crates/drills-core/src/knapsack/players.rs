//! Player list ingestion
//!
//! Rows come from a tabular player list sorted by position (goalkeepers
//! first) and, within a position, by descending cost. Positions are not
//! listed explicitly, so a new group starts whenever a row costs more than
//! the row before it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DrillsError, Result};
use crate::knapsack::team::{Player, Position};

/// One row of the raw player list, all fields as displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPlayerRow {
    pub name: String,
    pub team: String,
    pub points: String,
    /// Cost with a one-character currency prefix, e.g. `£4.5`
    pub cost: String,
}

impl RawPlayerRow {
    pub fn new(name: &str, team: &str, points: &str, cost: &str) -> Self {
        Self {
            name: name.to_string(),
            team: team.to_string(),
            points: points.to_string(),
            cost: cost.to_string(),
        }
    }
}

fn parse_cost(row: &RawPlayerRow) -> Result<f64> {
    let mut chars = row.cost.trim().chars();
    chars.next();
    let amount = chars.as_str();
    amount
        .parse::<f64>()
        .ok()
        .filter(|c| c.is_finite() && *c >= 0.0)
        .ok_or_else(|| DrillsError::invalid_value(format!("cost for {}", row.name), &row.cost))
}

/// Cost in tenths, rejected when it does not fit a `u32`
fn cost_in_tenths(row: &RawPlayerRow, cost: f64) -> Result<u32> {
    let tenths = (cost * 10.0).round();
    if tenths > f64::from(u32::MAX) {
        return Err(DrillsError::invalid_value(format!("cost for {}", row.name), &row.cost));
    }
    Ok(tenths as u32)
}

/// Convert raw rows into players, inferring positions from cost order.
///
/// Weight is the cost in tenths, so `£4.5` becomes 45.
pub fn create_player_list(rows: &[RawPlayerRow]) -> Result<Vec<Player>> {
    let mut players = Vec::with_capacity(rows.len());
    let mut position_index = 0usize;
    let mut previous_cost: Option<f64> = None;

    for row in rows {
        let cost = parse_cost(row)?;
        if previous_cost.is_some_and(|prev| cost > prev) {
            position_index += 1;
        }
        previous_cost = Some(cost);

        let position = *Position::ALL.get(position_index).ok_or_else(|| {
            DrillsError::invalid_value(
                "player list",
                format!("{} starts a fifth position group", row.name),
            )
        })?;

        let value = row
            .points
            .trim()
            .parse::<i32>()
            .map_err(|_| {
                DrillsError::invalid_value(format!("points for {}", row.name), &row.points)
            })?;

        players.push(Player {
            name: row.name.clone(),
            team: row.team.clone(),
            position,
            value,
            weight: cost_in_tenths(row, cost)?,
        });
    }

    debug!(players = players.len(), groups = position_index + 1, "create_player_list");
    Ok(players)
}

/// Load raw rows from a JSON array and convert them.
///
/// Rows may be objects (`{"name": .., "team": .., "points": .., "cost": ..}`)
/// or four-element arrays in that order.
pub fn read_players(path: &Path) -> Result<Vec<Player>> {
    let content = fs::read_to_string(path)?;
    let rows: Vec<RawPlayerRow> = serde_json::from_str(&content)?;
    create_player_list(&rows)
}
