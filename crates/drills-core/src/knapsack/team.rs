use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DrillsError, Result};
use crate::knapsack::item::{validate, Valued};

/// Playing position, in the order player lists are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        };
        f.write_str(name)
    }
}

impl FromStr for Position {
    type Err = DrillsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "goalkeeper" | "gk" => Ok(Position::Goalkeeper),
            "defender" | "def" => Ok(Position::Defender),
            "midfielder" | "mid" => Ok(Position::Midfielder),
            "forward" | "fwd" => Ok(Position::Forward),
            other => Err(DrillsError::invalid_value("position", other)),
        }
    }
}

/// A player available for selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub team: String,
    pub position: Position,
    /// Points scored, may be negative
    pub value: i32,
    /// Cost in tenths of a currency unit
    pub weight: u32,
}

impl Valued for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        f64::from(self.value)
    }

    fn weight(&self) -> f64 {
        f64::from(self.weight)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}, {}, {}, {}, {}>",
            self.name, self.position, self.team, self.value, self.weight
        )
    }
}

/// Squad size and per-position quotas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConstraints {
    pub max_players: usize,
    /// Positions absent from the map may not be picked at all
    pub positions: IndexMap<Position, usize>,
}

impl Default for TeamConstraints {
    fn default() -> Self {
        let positions = IndexMap::from([
            (Position::Goalkeeper, 1),
            (Position::Defender, 4),
            (Position::Midfielder, 4),
            (Position::Forward, 2),
        ]);
        Self {
            max_players: 11,
            positions,
        }
    }
}

impl TeamConstraints {
    pub fn limit(&self, position: Position) -> usize {
        self.positions.get(&position).copied().unwrap_or(0)
    }
}

/// A selected squad
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub players: Vec<Player>,
    pub total_value: f64,
    pub total_weight: f64,
}

impl Team {
    pub fn count(&self, position: Position) -> usize {
        self.players.iter().filter(|p| p.position == position).count()
    }
}

/// Greedy squad selection under a budget.
///
/// Players are ranked by `key` (highest first, ties keep input order). Each
/// is taken whole if its position quota has room and it fits the remaining
/// budget; selection ends once `max_players` are picked.
#[tracing::instrument(skip(players, key, constraints), fields(players = players.len()))]
pub fn greedy_team<F>(
    players: &[Player],
    max_weight: f64,
    key: F,
    constraints: &TeamConstraints,
) -> Result<Team>
where
    F: Fn(&Player) -> f64,
{
    if !(max_weight.is_finite() && max_weight >= 0.0) {
        return Err(DrillsError::invalid_value("budget", max_weight));
    }
    validate(players)?;

    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by(|a, b| key(b).total_cmp(&key(a)));

    let mut headcount: IndexMap<Position, usize> = IndexMap::new();
    let mut picked = Vec::new();
    let mut total_value = 0.0;
    let mut total_weight = 0.0;

    for player in sorted {
        if picked.len() >= constraints.max_players {
            break;
        }
        let taken = headcount.get(&player.position).copied().unwrap_or(0);
        if taken >= constraints.limit(player.position) {
            continue;
        }
        if total_weight + player.weight() > max_weight {
            continue;
        }
        total_value += player.value();
        total_weight += player.weight();
        *headcount.entry(player.position).or_default() += 1;
        picked.push(player.clone());
    }

    debug!(picked = picked.len(), total_value, total_weight, "greedy_team");

    Ok(Team {
        players: picked,
        total_value,
        total_weight,
    })
}
