//! Graph commands: `bfs`, `dfs`, `path`, `farthest`, `children`
//!
//! Every command runs on the built-in sample graph unless `--file` names a
//! delimited co-appearance file.

use std::time::Instant;

use drills_core::error::{DrillsError, Result};
use drills_core::graph::{
    bfs, dfs, dfs_forest, dfs_pop_order, format_path, read_delimited, sample_graph, BfsResult,
    DfsState, Digraph, Graph, GraphProvider,
};
use serde_json::json;
use tracing::debug;

use crate::cli::{BfsArgs, ChildrenArgs, DfsArgs, GraphArgs, OutputFormat, PathArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::{print_json, print_records_header, quoted};

/// A graph loaded for one command
pub enum LoadedGraph {
    Directed(Digraph<String>),
    Undirected(Graph<String>),
}

/// Run `$body` with `$g` bound to whichever graph variant was loaded
macro_rules! with_graph {
    ($loaded:expr, $g:ident => $body:expr) => {
        match $loaded {
            LoadedGraph::Directed($g) => $body,
            LoadedGraph::Undirected($g) => $body,
        }
    };
}

/// Load the graph named by the arguments, or the sample graph
pub fn load_graph(ctx: &CommandContext, args: &GraphArgs) -> Result<LoadedGraph> {
    let Some(path) = &args.file else {
        return Ok(LoadedGraph::Undirected(sample_graph()));
    };

    let delimiter = args.delimiter.unwrap_or_else(|| ctx.config.delimiter());
    let directed = args.directed || ctx.config.graph.directed;

    let (graph, stats) = if directed {
        let (g, stats) = read_delimited::<Digraph<String>>(path, delimiter)?;
        (LoadedGraph::Directed(g), stats)
    } else {
        let (g, stats) = read_delimited::<Graph<String>>(path, delimiter)?;
        (LoadedGraph::Undirected(g), stats)
    };

    debug!(
        path = %path.display(),
        lines = stats.lines,
        edges = stats.edges,
        directed,
        "load_graph"
    );
    trace_command!(ctx.cli, ctx.start, "load_graph");
    Ok(graph)
}

/// Start node from the argument, falling back to the configured default
fn resolve_start(ctx: &CommandContext, explicit: Option<&str>) -> Result<String> {
    explicit
        .map(str::to_string)
        .or_else(|| ctx.config.graph.start.clone())
        .ok_or_else(|| {
            DrillsError::UsageError(
                "no start node given (pass one or set graph.start in the config)".to_string(),
            )
        })
}

/// Execute `drills bfs`
pub fn execute_bfs(ctx: &CommandContext, args: &BfsArgs) -> Result<()> {
    let loaded = load_graph(ctx, &args.graph)?;
    let start = resolve_start(ctx, args.start.as_deref())?;
    let (result, node_count) = with_graph!(&loaded, g => (bfs(g, &start)?, g.node_count()));
    trace_command!(ctx.cli, ctx.start, "bfs");
    output_bfs(ctx, &result, node_count)
}

fn predecessor_of<'r>(result: &'r BfsResult<String>, node: &str) -> Option<&'r String> {
    result.predecessors.get(node).and_then(Option::as_ref)
}

fn output_bfs(ctx: &CommandContext, result: &BfsResult<String>, node_count: usize) -> Result<()> {
    let start = result.start.as_str();

    match ctx.cli.format {
        OutputFormat::Json => {
            let nodes: Vec<_> = result
                .distances
                .iter()
                .map(|(node, distance)| {
                    json!({
                        "node": node,
                        "distance": distance,
                        "predecessor": predecessor_of(result, node),
                    })
                })
                .collect();
            print_json(&json!({
                "start": start,
                "reached": result.reached(),
                "nodes": nodes,
            }))?;
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "Reached {} of {} nodes from {}",
                    result.reached(),
                    node_count,
                    start
                );
            }
            for (node, distance) in &result.distances {
                match predecessor_of(result, node) {
                    Some(pred) => println!("{:>3}  {}  (via {})", distance, node, pred),
                    None => println!("{:>3}  {}", distance, node),
                }
            }
        }
        OutputFormat::Records => {
            print_records_header(
                "bfs",
                &[
                    ("start", quoted(start)),
                    ("reached", result.reached().to_string()),
                ],
            );
            for (node, distance) in &result.distances {
                let via = predecessor_of(result, node)
                    .map(|p| format!(" via={}", quoted(p)))
                    .unwrap_or_default();
                println!("N {} distance={}{}", quoted(node), distance, via);
            }
        }
    }

    Ok(())
}

/// Execute `drills dfs`
pub fn execute_dfs(ctx: &CommandContext, args: &DfsArgs) -> Result<()> {
    let loaded = load_graph(ctx, &args.graph)?;
    let started = Instant::now();

    let (mode, start, state) = if args.forest {
        ("forest", None, with_graph!(&loaded, g => dfs_forest(g)?))
    } else {
        let start = resolve_start(ctx, args.start.as_deref())?;
        let state = if args.pop_order {
            with_graph!(&loaded, g => dfs_pop_order(g, &start)?)
        } else {
            with_graph!(&loaded, g => dfs(g, &start)?)
        };
        let mode = if args.pop_order {
            "pop-order"
        } else {
            "pre-order"
        };
        (mode, Some(start), state)
    };
    debug!(elapsed = ?started.elapsed(), mode, "dfs");

    output_dfs(ctx, mode, start.as_deref(), &state)
}

fn output_dfs(
    ctx: &CommandContext,
    mode: &str,
    start: Option<&str>,
    state: &DfsState<String>,
) -> Result<()> {
    // visit_order iterates in discovery order
    let ranked: Vec<(&String, usize, Option<&String>)> = state
        .visit_order
        .iter()
        .map(|(node, rank)| {
            let pred = state.predecessors.get(node).and_then(Option::as_ref);
            (node, *rank, pred)
        })
        .collect();
    let roots: Vec<&String> = state.roots().collect();
    let explored = state.explored.len();

    match ctx.cli.format {
        OutputFormat::Json => {
            let nodes: Vec<_> = ranked
                .iter()
                .map(|(node, rank, pred)| {
                    json!({ "node": node, "rank": rank, "predecessor": pred })
                })
                .collect();
            print_json(&json!({
                "mode": mode,
                "start": start,
                "explored": explored,
                "roots": roots,
                "nodes": nodes,
            }))?;
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                match start {
                    Some(s) => println!("Explored {} nodes from {} ({})", explored, s, mode),
                    None => println!(
                        "Explored {} nodes in {} components",
                        explored,
                        roots.len()
                    ),
                }
            }
            for (node, rank, pred) in &ranked {
                match pred {
                    Some(p) => println!("{:>3}  {}  (from {})", rank, node, p),
                    None => println!("{:>3}  {}", rank, node),
                }
            }
        }
        OutputFormat::Records => {
            let mut fields = vec![
                ("order", mode.to_string()),
                ("explored", explored.to_string()),
            ];
            if let Some(s) = start {
                fields.insert(0, ("start", quoted(s)));
            }
            print_records_header("dfs", &fields);
            for (node, rank, pred) in &ranked {
                let from = pred
                    .map(|p| format!(" from={}", quoted(p)))
                    .unwrap_or_default();
                println!("N {} rank={}{}", quoted(node), rank, from);
            }
        }
    }

    Ok(())
}

/// Execute `drills path`
pub fn execute_path(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let loaded = load_graph(ctx, &args.graph)?;
    let from = resolve_start(ctx, args.from.as_deref())?;
    let path = with_graph!(&loaded, g => {
        if !g.has_node(&args.target) {
            return Err(DrillsError::node_not_found(&args.target));
        }
        bfs(g, &from)?.path_to(&args.target)?
    });
    output_path(ctx, "path", &from, &path)
}

/// Execute `drills farthest`
pub fn execute_farthest(ctx: &CommandContext, args: &BfsArgs) -> Result<()> {
    let loaded = load_graph(ctx, &args.graph)?;
    let start = resolve_start(ctx, args.start.as_deref())?;
    let result = with_graph!(&loaded, g => bfs(g, &start)?);

    match result.farthest() {
        Some((node, _)) => {
            let path = result.path_to(node)?;
            output_path(ctx, "farthest", &start, &path)
        }
        None => output_nothing_farther(ctx, &start),
    }
}

fn output_path(ctx: &CommandContext, mode: &str, from: &str, path: &[String]) -> Result<()> {
    let hops = path.len().saturating_sub(1);
    let to = path.last().map(String::as_str).unwrap_or(from);

    match ctx.cli.format {
        OutputFormat::Json => {
            print_json(&json!({ "from": from, "to": to, "hops": hops, "path": path }))?;
        }
        OutputFormat::Human => {
            println!("{}", format_path(path));
            if !ctx.cli.quiet {
                println!("{} hop{}", hops, if hops == 1 { "" } else { "s" });
            }
        }
        OutputFormat::Records => {
            print_records_header(
                mode,
                &[
                    ("from", quoted(from)),
                    ("to", quoted(to)),
                    ("hops", hops.to_string()),
                ],
            );
            for (hop, node) in path.iter().enumerate() {
                println!("P {} hop={}", quoted(node), hop);
            }
        }
    }
    Ok(())
}

fn output_nothing_farther(ctx: &CommandContext, start: &str) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            print_json(&json!({ "from": start, "to": null, "hops": 0, "path": [start] }))?;
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Nothing is reachable from {}", start);
            }
        }
        OutputFormat::Records => {
            print_records_header(
                "farthest",
                &[("from", quoted(start)), ("hops", "0".to_string())],
            );
        }
    }
    Ok(())
}

/// Execute `drills children`
pub fn execute_children(ctx: &CommandContext, args: &ChildrenArgs) -> Result<()> {
    let loaded = load_graph(ctx, &args.graph)?;
    let children: Vec<String> = with_graph!(&loaded, g => {
        if !g.has_node(&args.node) {
            return Err(DrillsError::node_not_found(&args.node));
        }
        g.children_of(&args.node).cloned().collect()
    });

    match ctx.cli.format {
        OutputFormat::Json => {
            print_json(&json!({ "node": args.node, "children": children }))?;
        }
        OutputFormat::Human => {
            for child in &children {
                println!("{}", child);
            }
            if children.is_empty() && !ctx.cli.quiet {
                println!("{} has no children", args.node);
            }
        }
        OutputFormat::Records => {
            print_records_header(
                "children",
                &[
                    ("node", quoted(&args.node)),
                    ("count", children.len().to_string()),
                ],
            );
            for child in &children {
                println!("C {}", quoted(child));
            }
        }
    }
    Ok(())
}
