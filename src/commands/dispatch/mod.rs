//! Command dispatch logic for drills

use std::time::Instant;

use drills_core::config::DrillsConfig;
use drills_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

mod command;
mod commands;
mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = DrillsConfig::resolve(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
