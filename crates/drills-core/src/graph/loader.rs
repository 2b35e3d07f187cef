//! Delimited co-appearance loader
//!
//! Each line names a record followed by its members, separated by a single
//! delimiter character, e.g. a movie and its cast:
//!
//! ```text
//! Apollo 13 (1995)/Bacon, Kevin/Hanks, Tom/Paxton, Bill
//! ```
//!
//! An edge is inserted from the first field to every later field.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{DrillsError, Result};
use crate::graph::{Graph, GraphProvider};

/// Counters reported after a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub lines: usize,
    pub edges: usize,
    pub skipped: usize,
}

/// Insert every line of `reader` into `graph`.
///
/// Line terminators are stripped, blank lines are skipped and empty fields
/// are ignored. A line with only a first field still adds that node.
pub fn load_delimited<G, R>(
    graph: &mut G,
    reader: R,
    delimiter: char,
    source: &Path,
) -> Result<LoadStats>
where
    G: GraphProvider<Node = String>,
    R: BufRead,
{
    let mut stats = LoadStats::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| DrillsError::InvalidInput {
            path: source.to_path_buf(),
            line: idx + 1,
            reason: e.to_string(),
        })?;
        stats.lines += 1;

        let line = line.trim_end_matches(['\r', '\n']);
        let mut fields = line.split(delimiter).filter(|f| !f.is_empty());

        let Some(head) = fields.next() else {
            stats.skipped += 1;
            continue;
        };

        graph.add_node(head.to_string());
        for member in fields {
            graph.add_edge(head.to_string(), member.to_string());
            stats.edges += 1;
        }
    }

    if stats.edges == 0 {
        warn!(path = %source.display(), delimiter = %delimiter, "no edges loaded");
    }
    debug!(lines = stats.lines, edges = stats.edges, nodes = graph.node_count(), "load_delimited");

    Ok(stats)
}

/// Read a delimited file into a new graph of type `G`
pub fn read_delimited<G>(path: &Path, delimiter: char) -> Result<(G, LoadStats)>
where
    G: GraphProvider<Node = String> + Default,
{
    let file = File::open(path).map_err(|e| DrillsError::FailedOperation {
        operation: format!("open {}", path.display()),
        reason: e.to_string(),
    })?;
    let mut graph = G::default();
    let stats = load_delimited(&mut graph, BufReader::new(file), delimiter, path)?;
    Ok((graph, stats))
}

/// The eight-edge undirected graph used throughout the examples
pub fn sample_graph() -> Graph<String> {
    let mut g = Graph::new();
    for (a, b) in [
        ("John", "Helena"),
        ("John", "Chris"),
        ("Helena", "Chris"),
        ("Helena", "Paul"),
        ("Paul", "Jared"),
        ("Chris", "Vicki"),
        ("Vicki", "Jared"),
        ("Jared", "Donald"),
    ] {
        g.add_edge(a.to_string(), b.to_string());
    }
    g
}
