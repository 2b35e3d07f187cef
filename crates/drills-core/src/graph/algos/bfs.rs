use std::collections::HashSet;
use std::hash::Hash;
use std::time::Instant;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::error::{DrillsError, Result};
use crate::graph::path::reconstruct_path;
use crate::graph::{GraphProvider, Queue};
use crate::trace_time;

/// Distances and discovery tree produced by [`bfs`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BfsResult<N: Eq + Hash> {
    /// Node being searched from
    pub start: N,
    /// Minimum edge count from `start`; unreached nodes are absent
    pub distances: IndexMap<N, usize>,
    /// Node each entry was first discovered from; `start` maps to `None`
    pub predecessors: IndexMap<N, Option<N>>,
}

impl<N: Clone + Eq + Hash + std::fmt::Display> BfsResult<N> {
    pub fn distance(&self, node: &N) -> Option<usize> {
        self.distances.get(node).copied()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.distances.contains_key(node)
    }

    /// Number of nodes reached, `start` included
    pub fn reached(&self) -> usize {
        self.distances.len()
    }

    /// Shortest path from `start` to `target`, both ends included
    pub fn path_to(&self, target: &N) -> Result<Vec<N>> {
        let mut path = reconstruct_path(&self.predecessors, target)?;
        path.reverse();
        Ok(path)
    }

    /// Node with the greatest distance from `start`.
    ///
    /// The first node in discovery order wins among equals. Returns `None`
    /// when nothing beyond `start` was reached.
    pub fn farthest(&self) -> Option<(&N, usize)> {
        let mut best: Option<(&N, usize)> = None;
        for (node, &dist) in &self.distances {
            if dist > best.map_or(0, |(_, d)| d) {
                best = Some((node, dist));
            }
        }
        best
    }
}

/// Breadth-first search from `start`.
///
/// Children are expanded in the order `children_of` yields them and
/// discovered nodes are visited first in first out, so among several
/// shortest-path predecessors the one discovered earliest is recorded.
#[tracing::instrument(skip(graph, start), fields(start = %start, nodes = graph.node_count()))]
pub fn bfs<G: GraphProvider>(graph: &G, start: &G::Node) -> Result<BfsResult<G::Node>> {
    if !graph.has_node(start) {
        return Err(DrillsError::node_not_found(start));
    }

    let started = Instant::now();

    let mut queue = Queue::new();
    queue.enqueue(start.clone());

    let mut explored: HashSet<G::Node> = HashSet::new();
    explored.insert(start.clone());

    let mut distances: IndexMap<G::Node, usize> = IndexMap::new();
    distances.insert(start.clone(), 0);

    let mut predecessors: IndexMap<G::Node, Option<G::Node>> = IndexMap::new();
    predecessors.insert(start.clone(), None);

    while !queue.is_empty() {
        let v = queue.dequeue()?;
        let next_distance = distances
            .get(&v)
            .map(|d| d + 1)
            .ok_or_else(|| DrillsError::node_not_reached(&v))?;

        for w in graph.children_of(&v) {
            if explored.insert(w.clone()) {
                distances.insert(w.clone(), next_distance);
                predecessors.insert(w.clone(), Some(v.clone()));
                queue.enqueue(w.clone());
            }
        }
    }

    debug!(reached = distances.len(), "bfs complete");
    trace_time!(started, "bfs", reached = distances.len());

    Ok(BfsResult {
        start: start.clone(),
        distances,
        predecessors,
    })
}

#[cfg(test)]
mod tests;
