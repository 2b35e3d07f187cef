//! Drills Core Library
//!
//! Classroom algorithm exercises: graph traversal over a movie co-appearance
//! network, greedy knapsack and team selection, digit palindromes and a
//! moving-average crossover trading simulation.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod knapsack;
pub mod logging;
pub mod palindrome;
pub mod trading;
