//! Path reconstruction from predecessor maps

use std::fmt::Display;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::{DrillsError, Result};

/// Walk predecessor links from `target` back to its traversal root.
///
/// The returned path runs target first, root last. A link pointing at a
/// node that has no entry of its own is treated as reaching the root.
pub fn reconstruct_path<N>(predecessors: &IndexMap<N, Option<N>>, target: &N) -> Result<Vec<N>>
where
    N: Clone + Eq + Hash + Display,
{
    if !predecessors.contains_key(target) {
        return Err(DrillsError::node_not_reached(target));
    }

    let mut path = vec![target.clone()];
    let mut current = target;

    while let Some(Some(prev)) = predecessors.get(current) {
        // A simple path can hold at most one more node than the map has links
        if path.len() > predecessors.len() {
            return Err(DrillsError::PredecessorCycle {
                node: target.to_string(),
            });
        }
        path.push(prev.clone());
        current = prev;
    }

    Ok(path)
}

/// Render a path as `a -> b -> c`
pub fn format_path<N: Display>(path: &[N]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    type Preds = IndexMap<&'static str, Option<&'static str>>;

    fn preds(pairs: &[(&'static str, Option<&'static str>)]) -> Preds {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_path_runs_target_to_root() {
        let map = preds(&[("a", None), ("b", Some("a")), ("c", Some("b"))]);
        assert_eq!(reconstruct_path(&map, &"c").unwrap(), vec!["c", "b", "a"]);
        assert_eq!(reconstruct_path(&map, &"a").unwrap(), vec!["a"]);
    }

    #[test]
    fn test_unreached_target() {
        let map = preds(&[("a", None)]);
        assert!(matches!(
            reconstruct_path(&map, &"z"),
            Err(DrillsError::NodeNotReached { ref node }) if node == "z"
        ));
    }

    #[test]
    fn test_missing_root_entry_ends_path() {
        let map = preds(&[("b", Some("a")), ("c", Some("b"))]);
        assert_eq!(reconstruct_path(&map, &"c").unwrap(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_cycle_is_reported() {
        let map = preds(&[("a", Some("b")), ("b", Some("a"))]);
        assert!(matches!(
            reconstruct_path(&map, &"a"),
            Err(DrillsError::PredecessorCycle { .. })
        ));
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&["Donald", "Jared", "John"]), "Donald -> Jared -> John");
        assert_eq!(format_path::<&str>(&[]), "");
    }
}
