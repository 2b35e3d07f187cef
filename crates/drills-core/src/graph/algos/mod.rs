//! Traversal algorithms over any [`GraphProvider`](crate::graph::GraphProvider)
//!
//! Both searches leave the graph untouched and return plain insertion-ordered
//! maps, so results iterate in discovery order.

pub mod bfs;
pub mod dfs;

pub use bfs::{bfs, BfsResult};
pub use dfs::{dfs, dfs_forest, dfs_from, dfs_pop_order, DfsState};
