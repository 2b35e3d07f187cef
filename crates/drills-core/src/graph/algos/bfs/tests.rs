use crate::error::DrillsError;
use crate::graph::algos::bfs::*;
use crate::graph::{sample_graph, Digraph, Graph, GraphProvider};

fn s(name: &str) -> String {
    name.to_string()
}

#[test]
fn test_sample_graph_distances_from_john() {
    let g = sample_graph();
    let result = bfs(&g, &s("John")).unwrap();

    assert_eq!(result.distance(&s("John")), Some(0));
    assert_eq!(result.distance(&s("Helena")), Some(1));
    assert_eq!(result.distance(&s("Chris")), Some(1));
    assert_eq!(result.distance(&s("Paul")), Some(2));
    assert_eq!(result.distance(&s("Vicki")), Some(2));
    assert_eq!(result.distance(&s("Jared")), Some(3));
    assert_eq!(result.distance(&s("Donald")), Some(4));
    assert_eq!(result.reached(), 7);
}

#[test]
fn test_sample_graph_predecessors() {
    let g = sample_graph();
    let result = bfs(&g, &s("John")).unwrap();

    assert_eq!(result.predecessors[&s("Donald")], Some(s("Jared")));
    assert_eq!(result.predecessors[&s("Helena")], Some(s("John")));
    assert_eq!(result.predecessors[&s("John")], None);
    // Jared is reachable through Paul and Vicki at equal depth; Paul is
    // dequeued first because Helena precedes Chris in John's children.
    assert_eq!(result.predecessors[&s("Jared")], Some(s("Paul")));
}

#[test]
fn test_path_to_follows_predecessors() {
    let g = sample_graph();
    let result = bfs(&g, &s("John")).unwrap();
    let path = result.path_to(&s("Donald")).unwrap();
    assert_eq!(path, vec![s("John"), s("Helena"), s("Paul"), s("Jared"), s("Donald")]);
}

#[test]
fn test_tree_consistency() {
    let g = sample_graph();
    let result = bfs(&g, &s("Vicki")).unwrap();
    for (node, pred) in &result.predecessors {
        match pred {
            Some(p) => assert_eq!(result.distances[p], result.distances[node] - 1),
            None => assert_eq!(node, &s("Vicki")),
        }
    }
}

#[test]
fn test_single_node_graph() {
    let mut g = Digraph::new();
    g.add_node(s("A"));
    let result = bfs(&g, &s("A")).unwrap();

    assert_eq!(result.distances.len(), 1);
    assert_eq!(result.distances[&s("A")], 0);
    assert_eq!(result.predecessors.len(), 1);
    assert_eq!(result.predecessors[&s("A")], None);
    assert!(result.farthest().is_none());
}

#[test]
fn test_disconnected_node_is_absent() {
    let mut g = Graph::new();
    g.add_edge("A", "B");
    g.add_node("C");
    let result = bfs(&g, &"A").unwrap();

    assert!(result.contains(&"B"));
    assert!(!result.contains(&"C"));
    assert!(!result.predecessors.contains_key(&"C"));
}

#[test]
fn test_directed_edges_are_not_walked_backwards() {
    let mut g = Digraph::new();
    g.add_edge(1, 2);
    g.add_edge(2, 3);
    let result = bfs(&g, &2).unwrap();
    assert_eq!(result.reached(), 2);
    assert!(!result.contains(&1));
}

#[test]
fn test_self_loops_and_cycles_terminate() {
    let mut g = Digraph::new();
    g.add_edge("a", "a");
    g.add_edge("a", "b");
    g.add_edge("b", "a");
    let result = bfs(&g, &"a").unwrap();
    assert_eq!(result.distance(&"a"), Some(0));
    assert_eq!(result.distance(&"b"), Some(1));
}

#[test]
fn test_missing_start_is_an_error() {
    let g = sample_graph();
    let err = bfs(&g, &s("Kevin")).unwrap_err();
    assert!(matches!(err, DrillsError::NodeNotFound { ref node } if node == "Kevin"));
}

#[test]
fn test_traversal_does_not_mutate_graph() {
    let g = sample_graph();
    let before = g.clone();
    bfs(&g, &s("John")).unwrap();
    assert_eq!(g, before);
    for node in before.nodes() {
        let a: Vec<_> = before.children_of(node).collect();
        let b: Vec<_> = g.children_of(node).collect();
        assert_eq!(a, b);
    }
}

#[test]
fn test_farthest_prefers_first_discovered() {
    let mut g = Digraph::new();
    g.add_edge("root", "x");
    g.add_edge("root", "y");
    let result = bfs(&g, &"root").unwrap();
    assert_eq!(result.farthest(), Some((&"x", 1)));

    let g = sample_graph();
    let result = bfs(&g, &s("John")).unwrap();
    assert_eq!(result.farthest(), Some((&s("Donald"), 4)));
}

#[test]
fn test_path_to_unreached_node_fails() {
    let mut g = Digraph::new();
    g.add_edge("a", "b");
    g.add_node("c");
    let result = bfs(&g, &"a").unwrap();
    assert!(matches!(
        result.path_to(&"c"),
        Err(DrillsError::NodeNotReached { .. })
    ));
}
