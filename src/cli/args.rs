use std::path::PathBuf;

use clap::Args;
use drills_core::knapsack::{Item, SortKey};

use super::parse::{parse_delimiter, parse_item, parse_sort_key};

/// Where a graph comes from; the built-in sample graph when no file is given
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Delimited graph file (one record per line: head/member/member...)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Field delimiter for --file (default from config, else '/')
    #[arg(long, short, value_parser = parse_delimiter)]
    pub delimiter: Option<char>,

    /// Treat edges in --file as directed
    #[arg(long)]
    pub directed: bool,
}

#[derive(Args, Debug, Clone)]
pub struct BfsArgs {
    /// Node to search from (default from config)
    pub start: Option<String>,

    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Args, Debug, Clone)]
pub struct DfsArgs {
    /// Node to search from (default from config)
    pub start: Option<String>,

    /// Cover every component, restarting from each unexplored node
    #[arg(long, conflicts_with_all = ["start", "pop_order"])]
    pub forest: bool,

    /// Rank nodes by stack pop order instead of pre-order discovery
    #[arg(long)]
    pub pop_order: bool,

    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Node the path ends at
    pub target: String,

    /// Node the path starts from (default from config)
    #[arg(long)]
    pub from: Option<String>,

    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ChildrenArgs {
    /// Node whose neighbours are listed
    pub node: String,

    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Args, Debug, Clone)]
pub struct KnapsackArgs {
    /// Item as name:value:weight (can be specified multiple times)
    #[arg(long = "item", short, value_parser = parse_item, action = clap::ArgAction::Append)]
    pub items: Vec<Item>,

    /// JSON file with an array of {name, value, weight} objects
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Maximum total weight (default from config)
    #[arg(long, short)]
    pub capacity: Option<f64>,

    /// Ranking: value, weight-inverse or density (default from config)
    #[arg(long, short = 'k', value_parser = parse_sort_key)]
    pub sort_key: Option<SortKey>,
}

#[derive(Args, Debug, Clone)]
pub struct TeamArgs {
    /// JSON file of player rows: [name, team, points, cost] or objects
    pub file: PathBuf,

    /// Budget in tenths of a currency unit (default from config)
    #[arg(long, short)]
    pub budget: Option<f64>,

    /// Ranking: value, weight-inverse or density (default from config)
    #[arg(long, short = 'k', value_parser = parse_sort_key)]
    pub sort_key: Option<SortKey>,

    /// Squad size (default from config)
    #[arg(long)]
    pub max_players: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct PalindromeArgs {
    /// Digit string to transform
    pub number: String,

    /// Maximum number of digit changes
    pub changes: usize,
}

#[derive(Args, Debug, Clone)]
pub struct TradeArgs {
    /// Prices in time order
    #[arg(required_unless_present = "file")]
    pub prices: Vec<f64>,

    /// JSON file with an array of prices
    #[arg(long, short, conflicts_with = "prices")]
    pub file: Option<PathBuf>,

    /// Short moving average window (default from config)
    #[arg(long)]
    pub short: Option<usize>,

    /// Long moving average window (default from config)
    #[arg(long)]
    pub long: Option<usize>,

    /// Starting cash (default from config)
    #[arg(long)]
    pub cash: Option<f64>,
}
