//! Error types and exit codes for drills
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node, malformed input file, impossible request)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while running a drill
#[derive(Error, Debug)]
pub enum DrillsError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("node not found: {node}")]
    NodeNotFound { node: String },

    #[error("node not reached from traversal root: {node}")]
    NodeNotReached { node: String },

    #[error("predecessor chain starting at {node} does not terminate")]
    PredecessorCycle { node: String },

    #[error("dequeue from empty queue")]
    QueueUnderflow,

    #[error("not possible: {needed} changes needed but only {available} allowed")]
    PalindromeImpossible { needed: usize, available: usize },

    #[error("series lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("invalid input in {path:?} line {line}: {reason}")]
    InvalidInput {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl DrillsError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: impl Into<String>, value: impl ToString) -> Self {
        DrillsError::InvalidValue {
            context: context.into(),
            value: value.to_string(),
        }
    }

    /// Create a node-not-found error from any displayable label
    pub fn node_not_found(node: &impl std::fmt::Display) -> Self {
        DrillsError::NodeNotFound {
            node: node.to_string(),
        }
    }

    /// Create a node-not-reached error from any displayable label
    pub fn node_not_reached(node: &impl std::fmt::Display) -> Self {
        DrillsError::NodeNotReached {
            node: node.to_string(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DrillsError::UnknownFormat(_) | DrillsError::UsageError(_) => ExitCode::Usage,

            DrillsError::NodeNotFound { .. }
            | DrillsError::NodeNotReached { .. }
            | DrillsError::PredecessorCycle { .. }
            | DrillsError::PalindromeImpossible { .. }
            | DrillsError::LengthMismatch { .. }
            | DrillsError::InvalidValue { .. }
            | DrillsError::InvalidInput { .. } => ExitCode::Data,

            DrillsError::QueueUnderflow
            | DrillsError::Io(_)
            | DrillsError::Json(_)
            | DrillsError::FailedOperation { .. }
            | DrillsError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get a stable error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            DrillsError::UnknownFormat(_) => "unknown_format",
            DrillsError::UsageError(_) => "usage_error",
            DrillsError::NodeNotFound { .. } => "node_not_found",
            DrillsError::NodeNotReached { .. } => "node_not_reached",
            DrillsError::PredecessorCycle { .. } => "predecessor_cycle",
            DrillsError::QueueUnderflow => "queue_underflow",
            DrillsError::PalindromeImpossible { .. } => "palindrome_impossible",
            DrillsError::LengthMismatch { .. } => "length_mismatch",
            DrillsError::InvalidValue { .. } => "invalid_value",
            DrillsError::InvalidInput { .. } => "invalid_input",
            DrillsError::Io(_) => "io_error",
            DrillsError::Json(_) => "json_error",
            DrillsError::FailedOperation { .. } => "failed_operation",
            DrillsError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for drills operations
pub type Result<T> = std::result::Result<T, DrillsError>;
