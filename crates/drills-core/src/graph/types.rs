use std::fmt::Display;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::graph::GraphProvider;

/// Directed graph stored as node -> ordered child set.
///
/// Every edge endpoint is a key, so nodes without outgoing edges still
/// show up in `nodes()` and `has_node()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Digraph<N: Eq + Hash> {
    edges: IndexMap<N, IndexSet<N>>,
}

impl<N: Eq + Hash> Digraph<N> {
    pub fn new() -> Self {
        Self {
            edges: IndexMap::new(),
        }
    }

    /// Number of directed edges, self-loops included
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(IndexSet::len).sum()
    }
}

impl<N: Eq + Hash> Default for Digraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash + Display> GraphProvider for Digraph<N> {
    type Node = N;

    fn add_node(&mut self, node: N) {
        self.edges.entry(node).or_default();
    }

    fn add_edge(&mut self, from: N, to: N) {
        self.edges.entry(from).or_default().insert(to.clone());
        self.edges.entry(to).or_default();
    }

    fn children_of(&self, node: &N) -> impl Iterator<Item = &N> {
        self.edges.get(node).into_iter().flatten()
    }

    fn has_node(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    fn nodes(&self) -> impl Iterator<Item = &N> {
        self.edges.keys()
    }

    fn node_count(&self) -> usize {
        self.edges.len()
    }
}

/// Undirected graph: every `add_edge(a, b)` also inserts `(b, a)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Graph<N: Eq + Hash> {
    inner: Digraph<N>,
}

impl<N: Eq + Hash> Graph<N> {
    pub fn new() -> Self {
        Self {
            inner: Digraph::new(),
        }
    }

    /// The underlying symmetric digraph
    pub fn as_digraph(&self) -> &Digraph<N> {
        &self.inner
    }
}

impl<N: Eq + Hash> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash + Display> GraphProvider for Graph<N> {
    type Node = N;

    fn add_node(&mut self, node: N) {
        self.inner.add_node(node);
    }

    fn add_edge(&mut self, from: N, to: N) {
        self.inner.add_edge(from.clone(), to.clone());
        self.inner.add_edge(to, from);
    }

    fn children_of(&self, node: &N) -> impl Iterator<Item = &N> {
        self.inner.children_of(node)
    }

    fn has_node(&self, node: &N) -> bool {
        self.inner.has_node(node)
    }

    fn nodes(&self) -> impl Iterator<Item = &N> {
        self.inner.nodes()
    }

    fn node_count(&self) -> usize {
        self.inner.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::sample_graph;

    fn children<G: GraphProvider>(g: &G, node: &G::Node) -> Vec<G::Node> {
        g.children_of(node).cloned().collect()
    }

    #[test]
    fn test_add_edge_inserts_both_endpoints() {
        let mut g = Digraph::new();
        g.add_edge("a", "b");
        assert!(g.has_node(&"a"));
        assert!(g.has_node(&"b"));
        assert_eq!(children(&g, &"a"), vec!["b"]);
        assert!(children(&g, &"b").is_empty());
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_duplicate_edge_is_idempotent() {
        let mut once = Digraph::new();
        once.add_edge("a", "b");

        let mut twice = Digraph::new();
        twice.add_edge("a", "b");
        twice.add_edge("a", "b");

        assert_eq!(children(&once, &"a"), children(&twice, &"a"));
        assert_eq!(twice.edge_count(), 1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_self_loop_is_stored() {
        let mut g = Digraph::new();
        g.add_edge(1, 1);
        assert_eq!(children(&g, &1), vec![1]);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut g = Digraph::new();
        g.add_edge("hub", "z");
        g.add_edge("hub", "a");
        g.add_edge("hub", "m");
        g.add_edge("hub", "a");
        assert_eq!(children(&g, &"hub"), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_unknown_node_has_no_children() {
        let g: Digraph<&str> = Digraph::new();
        assert!(!g.has_node(&"ghost"));
        assert_eq!(g.children_of(&"ghost").count(), 0);
    }

    #[test]
    fn test_add_node_keeps_existing_edges() {
        let mut g = Digraph::new();
        g.add_edge("a", "b");
        g.add_node("a");
        g.add_node("c");
        assert_eq!(children(&g, &"a"), vec!["b"]);
        assert!(g.has_node(&"c"));
        assert_eq!(g.nodes().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_edge_source_is_listed_before_target() {
        let mut g = Digraph::new();
        g.add_edge("a", "b");
        g.add_edge("c", "a");
        assert_eq!(g.nodes().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);

        let mut u = Graph::new();
        u.add_edge("x", "y");
        assert_eq!(u.nodes().copied().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_undirected_edges_are_symmetric() {
        let mut g = Graph::new();
        g.add_edge("a", "b");
        assert_eq!(children(&g, &"a"), vec!["b"]);
        assert_eq!(children(&g, &"b"), vec!["a"]);
        assert_eq!(g.as_digraph().edge_count(), 2);
    }

    #[test]
    fn test_sample_graph_children() {
        let g = sample_graph();
        let jared = children(&g, &"Jared".to_string());
        let helena = children(&g, &"Helena".to_string());
        let has = |list: &[String], name: &str| list.iter().any(|n| n == name);

        assert!(!has(&jared, "John"));
        assert!(!has(&jared, "Helena"));
        assert!(has(&jared, "Donald"));
        assert!(has(&jared, "Paul"));

        assert!(has(&helena, "John"));
        assert!(!has(&helena, "Helena"));
        assert!(!has(&helena, "Donald"));
        assert!(has(&helena, "Paul"));
    }
}
