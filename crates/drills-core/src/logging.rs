//! Diagnostic logging for drills
//!
//! All events go to stderr so stdout stays parseable in json and records
//! modes. `RUST_LOG` wins over `DRILLS_LOG`, which wins over the options
//! passed on the command line.

use std::io;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{DrillsError, Result};

/// Environment variable read when `RUST_LOG` is unset
pub const LOG_ENV: &str = "DRILLS_LOG";

/// Targets a bare level is applied to
const TARGETS: [&str; 2] = ["drills", "drills_core"];

/// Emit a trace event with the milliseconds elapsed since `$start`.
///
/// ```rust,ignore
/// let started = Instant::now();
/// trace_time!(started, "bfs", reached = distances.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:literal $(, $field:ident = $value:expr)* $(,)?) => {
        tracing::trace!(
            elapsed_ms = $start.elapsed().as_secs_f64() * 1000.0,
            $($field = $value,)*
            $name
        )
    };
}

/// How the command line asked for logs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// `--verbose`: debug events from drills crates
    pub verbose: bool,
    /// `--quiet`: errors only
    pub quiet: bool,
    /// `--log-level`: a bare level or a full filter directive
    pub level: Option<String>,
    /// `--log-json`: JSON lines with span open and close events
    pub json: bool,
}

impl LogOptions {
    /// Filter directive used when neither environment variable is set.
    ///
    /// An explicit level beats `verbose`, which beats `quiet`.
    pub fn directive(&self) -> String {
        match self.level.as_deref() {
            Some(level) if level.contains('=') => level.to_string(),
            Some(level) => scoped(level),
            None if self.verbose => scoped("debug"),
            None if self.quiet => scoped("error"),
            None => scoped("warn"),
        }
    }

    fn filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_from_env(LOG_ENV)) {
            Ok(filter) => Ok(filter),
            Err(_) => parse_filter(&self.directive()),
        }
    }
}

fn scoped(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| {
        DrillsError::UsageError(format!("invalid log level '{}': {}", directive, e))
    })
}

/// Install the global subscriber described by `options`.
///
/// A bad `--log-level` is a usage error. Installing twice is a failed
/// operation.
pub fn init(options: &LogOptions) -> Result<()> {
    let filter = options.filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if options.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(io::stderr),
            )
            .try_init()
    };

    installed.map_err(|e| DrillsError::FailedOperation {
        operation: "install log subscriber".to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> LogOptions {
        LogOptions::default()
    }

    #[test]
    fn test_default_is_warn_for_drills_crates() {
        assert_eq!(options().directive(), "drills=warn,drills_core=warn");
    }

    #[test]
    fn test_verbose_beats_quiet() {
        let opts = LogOptions {
            verbose: true,
            quiet: true,
            ..options()
        };
        assert_eq!(opts.directive(), "drills=debug,drills_core=debug");

        let opts = LogOptions {
            quiet: true,
            ..options()
        };
        assert_eq!(opts.directive(), "drills=error,drills_core=error");
    }

    #[test]
    fn test_explicit_level_beats_flags() {
        let opts = LogOptions {
            verbose: true,
            level: Some("trace".to_string()),
            ..options()
        };
        assert_eq!(opts.directive(), "drills=trace,drills_core=trace");
    }

    #[test]
    fn test_full_directive_is_kept() {
        let opts = LogOptions {
            level: Some("drills_core::graph=trace".to_string()),
            ..options()
        };
        assert_eq!(opts.directive(), "drills_core::graph=trace");
    }

    #[test]
    fn test_unknown_level_is_usage_error() {
        let err = parse_filter(&scoped("loud")).unwrap_err();
        assert!(matches!(err, DrillsError::UsageError(_)));
        assert!(err.to_string().contains("drills=loud"));
        assert!(parse_filter(&scoped("info")).is_ok());
    }
}
