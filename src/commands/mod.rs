//! CLI commands for drills

pub mod dispatch;
pub mod format;
pub mod graph;
pub mod knapsack;
pub mod palindrome;
pub mod trade;
