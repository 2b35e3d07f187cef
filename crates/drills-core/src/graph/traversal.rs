use std::fmt::Display;
use std::hash::Hash;

/// Capability trait shared by every graph variant the traversals accept.
///
/// Children are yielded in edge insertion order; BFS and DFS tie-breaking
/// follows that order and nothing else.
pub trait GraphProvider {
    type Node: Clone + Eq + Hash + Display;

    /// Insert a node with no edges. Existing nodes are left untouched.
    fn add_node(&mut self, node: Self::Node);

    /// Insert an edge, adding both endpoints to the node set.
    fn add_edge(&mut self, from: Self::Node, to: Self::Node);

    /// Nodes reachable in one step. Unknown nodes have no children.
    fn children_of(&self, node: &Self::Node) -> impl Iterator<Item = &Self::Node>;

    fn has_node(&self, node: &Self::Node) -> bool;

    /// All nodes in insertion order
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    fn node_count(&self) -> usize;
}
