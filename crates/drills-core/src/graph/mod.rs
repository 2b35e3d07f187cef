//! Graph structures and traversal
//!
//! Provides an adjacency-set graph and the searches that run over it:
//! - BFS for unweighted shortest paths (distances + predecessors)
//! - DFS for discovery trees and visit order, continuable across components
//! - Path reconstruction from predecessor maps
//! - A delimited text loader for co-appearance data

pub mod algos;
pub mod loader;
pub mod path;
pub mod queue;
pub mod traversal;
pub mod types;

pub use algos::{bfs, dfs, dfs_forest, dfs_from, dfs_pop_order, BfsResult, DfsState};
pub use loader::{load_delimited, read_delimited, sample_graph, LoadStats};
pub use path::{format_path, reconstruct_path};
pub use queue::Queue;
pub use traversal::GraphProvider;
pub use types::{Digraph, Graph};
