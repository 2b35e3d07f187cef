//! Depth-first search with explicitly owned traversal state
//!
//! The state is passed in and handed back, so a caller can continue into
//! another component without any hidden sharing between independent calls.

use std::fmt::Display;
use std::hash::Hash;
use std::time::Instant;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use tracing::debug;

use crate::error::{DrillsError, Result};
use crate::graph::GraphProvider;
use crate::trace_time;

/// Accumulated DFS results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DfsState<N: Eq + Hash> {
    /// Every node marked visited so far
    pub explored: IndexSet<N>,
    /// Discovery tree; each traversal root maps to `None`
    pub predecessors: IndexMap<N, Option<N>>,
    /// 1-based rank in which nodes were first marked visited
    pub visit_order: IndexMap<N, usize>,
}

impl<N: Clone + Eq + Hash + Display> DfsState<N> {
    pub fn new() -> Self {
        Self {
            explored: IndexSet::new(),
            predecessors: IndexMap::new(),
            visit_order: IndexMap::new(),
        }
    }

    pub fn is_explored(&self, node: &N) -> bool {
        self.explored.contains(node)
    }

    pub fn rank(&self, node: &N) -> Option<usize> {
        self.visit_order.get(node).copied()
    }

    /// Nodes that started a traversal, in the order they were explored
    pub fn roots(&self) -> impl Iterator<Item = &N> {
        self.predecessors
            .iter()
            .filter(|(_, pred)| pred.is_none())
            .map(|(node, _)| node)
    }

    fn discover(&mut self, node: N, pred: Option<N>) {
        let rank = self.visit_order.len() + 1;
        self.explored.insert(node.clone());
        self.visit_order.insert(node.clone(), rank);
        self.predecessors.insert(node, pred);
    }
}

impl<N: Clone + Eq + Hash + Display> Default for DfsState<N> {
    fn default() -> Self {
        Self::new()
    }
}

fn children_vec<G: GraphProvider>(graph: &G, node: &G::Node) -> std::vec::IntoIter<G::Node> {
    graph.children_of(node).cloned().collect::<Vec<_>>().into_iter()
}

/// Depth-first search from `start` with fresh state
pub fn dfs<G: GraphProvider>(graph: &G, start: &G::Node) -> Result<DfsState<G::Node>> {
    dfs_from(graph, start, DfsState::new())
}

/// Continue a depth-first search from `start` using previously built state.
///
/// Discovery is pre-order: a node is ranked when first reached, and its
/// first unexplored child (in adjacency order) is fully explored before the
/// next child is considered. If `start` is already explored the state comes
/// back unchanged. An explicit stack replaces recursion, so long chains do
/// not exhaust the call stack.
#[tracing::instrument(
    skip(graph, start, state),
    fields(start = %start, explored = state.explored.len())
)]
pub fn dfs_from<G: GraphProvider>(
    graph: &G,
    start: &G::Node,
    mut state: DfsState<G::Node>,
) -> Result<DfsState<G::Node>> {
    if !graph.has_node(start) {
        return Err(DrillsError::node_not_found(start));
    }
    if state.is_explored(start) {
        return Ok(state);
    }

    let started = Instant::now();
    let before = state.explored.len();

    state.discover(start.clone(), None);
    let mut stack = vec![(start.clone(), children_vec(graph, start))];

    while let Some((node, children)) = stack.last_mut() {
        match children.find(|child| !state.is_explored(child)) {
            Some(child) => {
                let parent = node.clone();
                let grandchildren = children_vec(graph, &child);
                state.discover(child.clone(), Some(parent));
                stack.push((child, grandchildren));
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!(discovered = state.explored.len() - before, "dfs complete");
    trace_time!(started, "dfs");

    Ok(state)
}

/// Depth-first search over every component.
///
/// Roots are taken in node insertion order, skipping nodes an earlier root
/// already reached.
pub fn dfs_forest<G: GraphProvider>(graph: &G) -> Result<DfsState<G::Node>> {
    let roots: Vec<G::Node> = graph.nodes().cloned().collect();
    roots
        .iter()
        .try_fold(DfsState::new(), |state, root| dfs_from(graph, root, state))
}

/// Stack-driven DFS ranking nodes by the order they are popped.
///
/// All unexplored children are pushed in adjacency order and the most
/// recently pushed one is popped next, so the last child of a node is
/// explored first. A node pushed more than once is ranked on its first pop
/// and keeps the predecessor of that entry.
#[tracing::instrument(skip(graph, start), fields(start = %start))]
pub fn dfs_pop_order<G: GraphProvider>(graph: &G, start: &G::Node) -> Result<DfsState<G::Node>> {
    if !graph.has_node(start) {
        return Err(DrillsError::node_not_found(start));
    }

    let mut state = DfsState::new();
    let mut stack: Vec<(G::Node, Option<G::Node>)> = vec![(start.clone(), None)];

    while let Some((node, pred)) = stack.pop() {
        if state.is_explored(&node) {
            continue;
        }
        for child in graph.children_of(&node) {
            if !state.is_explored(child) {
                stack.push((child.clone(), Some(node.clone())));
            }
        }
        state.discover(node, pred);
    }

    debug!(discovered = state.explored.len(), "dfs pop order complete");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{sample_graph, Digraph, Graph};

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn test_sample_graph_preorder_ranks() {
        let g = sample_graph();
        let state = dfs(&g, &s("John")).unwrap();

        let order: Vec<&String> = state.explored.iter().collect();
        assert_eq!(
            order,
            vec!["John", "Helena", "Chris", "Vicki", "Jared", "Paul", "Donald"]
        );
        assert_eq!(state.rank(&s("John")), Some(1));
        assert_eq!(state.rank(&s("Donald")), Some(7));
        assert_eq!(state.predecessors[&s("Paul")], Some(s("Jared")));
        assert_eq!(state.predecessors[&s("Donald")], Some(s("Jared")));
        assert_eq!(state.predecessors[&s("John")], None);
    }

    #[test]
    fn test_sample_graph_pop_order_separates_chris_and_helena() {
        let g = sample_graph();
        let state = dfs_pop_order(&g, &s("John")).unwrap();

        let chris = state.rank(&s("Chris")).unwrap();
        let helena = state.rank(&s("Helena")).unwrap();
        assert!(chris.abs_diff(helena) > 1);
        assert_eq!(state.explored.len(), 7);
    }

    #[test]
    fn test_pop_order_ranks_are_a_permutation() {
        let g = sample_graph();
        let state = dfs_pop_order(&g, &s("Paul")).unwrap();
        let mut ranks: Vec<usize> = state.visit_order.values().copied().collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_ranks_are_a_permutation() {
        let g = sample_graph();
        let state = dfs(&g, &s("Vicki")).unwrap();
        let ranks: Vec<usize> = state.visit_order.values().copied().collect();
        assert_eq!(ranks, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_explored_matches_reachable_set() {
        let mut g = Digraph::new();
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        g.add_edge("d", "a");
        let state = dfs(&g, &"a").unwrap();
        assert_eq!(state.explored.len(), 3);
        assert!(!state.is_explored(&"d"));
    }

    #[test]
    fn test_already_explored_start_is_a_no_op() {
        let g = sample_graph();
        let state = dfs(&g, &s("John")).unwrap();
        let again = dfs_from(&g, &s("Paul"), state.clone()).unwrap();
        assert_eq!(again, state);
    }

    #[test]
    fn test_independent_calls_do_not_share_state() {
        let g = sample_graph();
        let first = dfs(&g, &s("John")).unwrap();
        let second = dfs(&g, &s("Donald")).unwrap();
        assert_eq!(second.rank(&s("Donald")), Some(1));
        assert_eq!(first.rank(&s("John")), Some(1));
    }

    #[test]
    fn test_continue_into_second_component() {
        let mut g = Graph::new();
        g.add_edge("a", "b");
        g.add_edge("c", "d");

        let state = dfs(&g, &"a").unwrap();
        let state = dfs_from(&g, &"c", state).unwrap();

        assert_eq!(state.rank(&"c"), Some(3));
        assert_eq!(state.rank(&"d"), Some(4));
        assert_eq!(state.roots().copied().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_forest_covers_every_node() {
        let mut g = Digraph::new();
        g.add_edge(1, 2);
        g.add_edge(3, 1);
        g.add_node(4);
        let state = dfs_forest(&g).unwrap();
        assert_eq!(state.explored.len(), 4);
        assert_eq!(state.roots().copied().collect::<Vec<_>>(), vec![1, 3, 4]);
        assert_eq!(state.predecessors[&2], Some(1));
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let mut g = Digraph::new();
        for i in 0..200_000u32 {
            g.add_edge(i, i + 1);
        }
        let state = dfs(&g, &0).unwrap();
        assert_eq!(state.rank(&200_000), Some(200_001));
    }

    #[test]
    fn test_self_loop_is_visited_once() {
        let mut g = Digraph::new();
        g.add_edge("x", "x");
        let state = dfs(&g, &"x").unwrap();
        assert_eq!(state.visit_order.len(), 1);
    }

    #[test]
    fn test_missing_start_is_an_error() {
        let g: Digraph<u8> = Digraph::new();
        assert!(matches!(
            dfs(&g, &9),
            Err(DrillsError::NodeNotFound { .. })
        ));
    }
}
