//! Error types and exit codes for pathweave
//!
//! Unreachable goals are never errors: engines report them as data
//! (`solution == None`, empty path). The variants below cover contract
//! violations inside the engine and failures of the CLI around it.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed maze, missing marker)

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
    /// Data error - malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathweave operations
#[derive(Error, Debug)]
pub enum PathweaveError {
    // Contract violations (programming errors in the caller)
    #[error("element is not a member of the priority queue")]
    NotQueued,

    #[error("priority queue is empty")]
    EmptyQueue,

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: dijkstra, astar, bfs or dfs)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid maze: {reason}")]
    InvalidMaze { reason: String },

    #[error("marker '{marker}' not found in maze")]
    MarkerNotFound { marker: char },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl PathweaveError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathweaveError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a maze that cannot be loaded
    pub fn invalid_maze(reason: impl Into<String>) -> Self {
        PathweaveError::InvalidMaze {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathweaveError::UnknownFormat(_)
            | PathweaveError::UnknownAlgorithm(_)
            | PathweaveError::UsageError(_)
            | PathweaveError::InvalidValue { .. } => ExitCode::Usage,

            PathweaveError::InvalidMaze { .. } | PathweaveError::MarkerNotFound { .. } => {
                ExitCode::Data
            }

            PathweaveError::NotQueued
            | PathweaveError::EmptyQueue
            | PathweaveError::Io(_)
            | PathweaveError::Json(_)
            | PathweaveError::Toml(_)
            | PathweaveError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathweaveError::NotQueued => "not_queued",
            PathweaveError::EmptyQueue => "empty_queue",
            PathweaveError::UnknownFormat(_) => "unknown_format",
            PathweaveError::UnknownAlgorithm(_) => "unknown_algorithm",
            PathweaveError::UsageError(_) => "usage_error",
            PathweaveError::InvalidValue { .. } => "invalid_value",
            PathweaveError::InvalidMaze { .. } => "invalid_maze",
            PathweaveError::MarkerNotFound { .. } => "marker_not_found",
            PathweaveError::Io(_) => "io_error",
            PathweaveError::Json(_) => "json_error",
            PathweaveError::Toml(_) => "toml_error",
            PathweaveError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for pathweave operations
pub type Result<T> = std::result::Result<T, PathweaveError>;
