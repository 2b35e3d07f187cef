//! Command trait and context for dispatching commands

use std::time::Instant;

use drills_core::config::DrillsConfig;
use drills_core::error::Result;

use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: DrillsConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: DrillsConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("drills {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Classic algorithm exercises: graph search, knapsack, palindromes, trading.");
        println!();
        println!("Run `drills --help` for usage information.");
        Ok(())
    }
}
