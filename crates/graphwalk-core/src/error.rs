//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad graph document, negative weight, missing vertex)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the graphwalk binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph or precondition violation (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a graph
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    /// An edge names a vertex that was never added to the graph
    #[error("edge references unknown vertex: {vertex}")]
    UnknownVertexReference { vertex: String },

    /// Dijkstra reached an edge with a weight below zero
    #[error("negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    /// A weight that cannot be ordered (NaN)
    #[error("invalid edge weight {weight} on {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("vertex not found: {id}")]
    VertexNotFound { id: String },

    #[error("invalid graph document {path:?}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

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

impl GraphError {
    /// Create an error for an edge endpoint missing from the vertex set
    pub fn unknown_vertex(vertex: impl std::fmt::Debug) -> Self {
        GraphError::UnknownVertexReference {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a negative weight found during shortest-path search
    pub fn negative_weight(
        from: impl std::fmt::Debug,
        to: impl std::fmt::Debug,
        weight: impl std::fmt::Display,
    ) -> Self {
        GraphError::NegativeWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight: weight.to_string(),
        }
    }

    /// Create an error for a weight that has no total order (NaN)
    pub fn invalid_weight(
        from: impl std::fmt::Debug,
        to: impl std::fmt::Debug,
        weight: impl std::fmt::Display,
    ) -> Self {
        GraphError::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight: weight.to_string(),
        }
    }

    /// Create an error for a malformed graph document
    pub fn invalid_document(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_) | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::UnknownVertexReference { .. }
            | GraphError::NegativeWeight { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::VertexNotFound { .. }
            | GraphError::InvalidDocument { .. } => ExitCode::Data,

            GraphError::Io(_) | GraphError::Json(_) | GraphError::Toml(_) | GraphError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::UnknownVertexReference { .. } => "unknown_vertex_reference",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::InvalidDocument { .. } => "invalid_document",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
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

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;
