//! Greedy knapsack solvers
//!
//! - [`greedy_fractional`]: fill a knapsack by a sort key, splitting the
//!   last item to use the capacity exactly
//! - [`greedy_team`]: whole items only, with a squad size and per-position
//!   quotas (fantasy-football team selection)

pub mod greedy;
pub mod item;
pub mod players;
pub mod team;

pub use greedy::{greedy_fractional, Knapsack, Selection};
pub use item::{density, value, weight_inverse, Item, SortKey, Valued};
pub use players::{create_player_list, read_players, RawPlayerRow};
pub use team::{greedy_team, Player, Position, Team, TeamConstraints};
