//! Command implementations for all drills commands

use drills_core::error::Result;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{graph, knapsack, palindrome, trade};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Bfs(args) => graph::execute_bfs(ctx, args),
            Commands::Dfs(args) => graph::execute_dfs(ctx, args),
            Commands::Path(args) => graph::execute_path(ctx, args),
            Commands::Farthest(args) => graph::execute_farthest(ctx, args),
            Commands::Children(args) => graph::execute_children(ctx, args),
            Commands::Knapsack(args) => knapsack::execute_knapsack(ctx, args),
            Commands::Team(args) => knapsack::execute_team(ctx, args),
            Commands::Palindrome(args) => palindrome::execute(ctx, args),
            Commands::Trade(args) => trade::execute(ctx, args),
        }
    }
}
