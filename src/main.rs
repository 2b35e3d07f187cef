//! Drills - classic algorithm exercises from the command line
//!
//! Graph search over a movie co-appearance network, greedy knapsack and
//! squad selection, digit palindromes and crossover trading.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use drills_core::error::{DrillsError, ExitCode as DrillsExitCode};
use drills_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => reject_arguments(err),
    };

    let outcome = logging::init(&cli.log_options()).and_then(|()| {
        tracing::debug!(elapsed = ?start.elapsed(), "parse_args");
        commands::dispatch::run(&cli, start)
    });

    match outcome {
        Ok(()) => ExitCode::from(DrillsExitCode::Success as u8),
        Err(e) => report(&cli, &e),
    }
}

/// Print a command failure the way the selected format expects
fn report(cli: &Cli, err: &DrillsError) -> ExitCode {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", err);
    }
    ExitCode::from(err.exit_code() as u8)
}

/// Exit for arguments clap could not parse
fn reject_arguments(err: clap::Error) -> ! {
    match cli::parse_failure(&err) {
        Some(failure) if cli::argv_requests_json(env::args().skip(1)) => {
            eprintln!("{}", failure.to_json());
            std::process::exit(failure.exit_code() as i32)
        }
        _ => err.exit(),
    }
}
