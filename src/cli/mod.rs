//! CLI argument parsing for drills
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use drills_core::error::DrillsError;
use drills_core::logging::LogOptions;

pub use args::{
    BfsArgs, ChildrenArgs, DfsArgs, GraphArgs, KnapsackArgs, PalindromeArgs, PathArgs, TeamArgs,
    TradeArgs,
};
pub use drills_core::format::OutputFormat;
use parse::parse_format;

/// Drills - classic algorithm exercises from the command line
#[derive(Parser, Debug)]
#[command(name = "drills")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, drills_core=trace)
    #[arg(long, global = true, env = "DRILLS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (default: ~/.config/drills/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest hop distances from a node (breadth-first search)
    Bfs(BfsArgs),

    /// Depth-first discovery order and tree
    Dfs(DfsArgs),

    /// Shortest path between two nodes
    Path(PathArgs),

    /// Node farthest from the start, with its path
    Farthest(BfsArgs),

    /// Neighbours of a node
    Children(ChildrenArgs),

    /// Greedy fractional knapsack
    Knapsack(KnapsackArgs),

    /// Greedy squad selection from a player list
    Team(TeamArgs),

    /// Highest palindrome reachable with limited digit changes
    Palindrome(PalindromeArgs),

    /// Moving-average crossover trading simulation
    Trade(TradeArgs),
}

impl Cli {
    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            level: self.log_level.clone(),
            json: self.log_json,
        }
    }
}

/// Translate a clap failure, or `None` when clap is printing help or version
pub fn parse_failure(err: &clap::Error) -> Option<DrillsError> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::Io | ErrorKind::Format => Some(DrillsError::Other(err.to_string())),
        _ => Some(DrillsError::UsageError(err.to_string())),
    }
}

/// Whether raw arguments select `--format json`.
///
/// Used when clap rejects the command line before `Cli.format` exists.
pub fn argv_requests_json<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--format=json" => return true,
            "--format" => {
                if args.next().is_some_and(|v| v.as_ref() == "json") {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}
