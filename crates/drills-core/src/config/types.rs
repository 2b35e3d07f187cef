//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::knapsack::{Position, SortKey, TeamConstraints};

/// Top-level drills configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrillsConfig {
    /// Graph loading and traversal defaults
    #[serde(default)]
    pub graph: GraphConfig,

    /// Knapsack and team selection defaults
    #[serde(default)]
    pub knapsack: KnapsackConfig,

    /// Trading simulation defaults
    #[serde(default)]
    pub trading: TradingConfig,
}

/// Defaults for graph commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Field separator for delimited graph files
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Start node used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// Load graph files as directed (default: undirected)
    #[serde(default)]
    pub directed: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            start: None,
            directed: false,
        }
    }
}

/// Defaults for knapsack and team selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnapsackConfig {
    /// Weight capacity, used as the budget in tenths for team selection
    #[serde(default = "default_capacity")]
    pub capacity: f64,

    #[serde(default)]
    pub sort_key: SortKey,

    #[serde(default = "default_max_players")]
    pub max_players: usize,

    #[serde(default = "default_goalkeepers")]
    pub goalkeepers: usize,

    #[serde(default = "default_defenders")]
    pub defenders: usize,

    #[serde(default = "default_midfielders")]
    pub midfielders: usize,

    #[serde(default = "default_forwards")]
    pub forwards: usize,
}

impl Default for KnapsackConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            sort_key: SortKey::default(),
            max_players: default_max_players(),
            goalkeepers: default_goalkeepers(),
            defenders: default_defenders(),
            midfielders: default_midfielders(),
            forwards: default_forwards(),
        }
    }
}

impl KnapsackConfig {
    /// Squad constraints described by this section
    pub fn to_constraints(&self) -> TeamConstraints {
        let mut constraints = TeamConstraints {
            max_players: self.max_players,
            positions: Default::default(),
        };
        constraints.positions.insert(Position::Goalkeeper, self.goalkeepers);
        constraints.positions.insert(Position::Defender, self.defenders);
        constraints.positions.insert(Position::Midfielder, self.midfielders);
        constraints.positions.insert(Position::Forward, self.forwards);
        constraints
    }
}

/// Defaults for the crossover trading simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingConfig {
    #[serde(default = "default_short_window")]
    pub short_window: usize,

    #[serde(default = "default_long_window")]
    pub long_window: usize,

    #[serde(default = "default_starting_cash")]
    pub starting_cash: f64,
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            short_window: default_short_window(),
            long_window: default_long_window(),
            starting_cash: default_starting_cash(),
        }
    }
}

fn default_delimiter() -> String {
    "/".to_string()
}

fn default_capacity() -> f64 {
    1000.0
}

fn default_max_players() -> usize {
    11
}

fn default_goalkeepers() -> usize {
    1
}

fn default_defenders() -> usize {
    4
}

fn default_midfielders() -> usize {
    4
}

fn default_forwards() -> usize {
    2
}

fn default_short_window() -> usize {
    5
}

fn default_long_window() -> usize {
    20
}

fn default_starting_cash() -> f64 {
    1000.0
}
