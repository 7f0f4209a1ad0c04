//! Error types and exit codes for kb
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, copy, fetch)
//! - 2: Usage error (bad flags/args, bad resource name)
//! - 3: Data error (bad configuration, missing or existing resource)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the kb binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad roots, missing or existing resource (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during kb operations
#[derive(Error, Debug)]
pub enum KbError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown scope: {0} (expected: examples, notes, or all)")]
    UnknownScope(String),

    #[error("invalid resource name: {0:?}")]
    InvalidName(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("{reason}")]
    Configuration { reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("failed to copy {from:?} to {to:?}: {reason}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl KbError {
    /// Create a configuration error with a user-facing reason
    pub fn configuration(reason: impl Into<String>) -> Self {
        KbError::Configuration {
            reason: reason.into(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        KbError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        KbError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed download or archive read
    pub fn fetch(url: &str, error: impl std::fmt::Display) -> Self {
        KbError::Fetch {
            url: url.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            KbError::UnknownFormat(_)
            | KbError::UnknownScope(_)
            | KbError::InvalidName(_)
            | KbError::UsageError(_) => ExitCode::Usage,

            KbError::Configuration { .. }
            | KbError::NotFound { .. }
            | KbError::AlreadyExists { .. } => ExitCode::Data,

            KbError::Copy { .. }
            | KbError::Fetch { .. }
            | KbError::Io(_)
            | KbError::Json(_)
            | KbError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            KbError::UnknownFormat(_) => "unknown_format",
            KbError::UnknownScope(_) => "unknown_scope",
            KbError::InvalidName(_) => "invalid_name",
            KbError::UsageError(_) => "usage_error",
            KbError::Configuration { .. } => "configuration",
            KbError::NotFound { .. } => "not_found",
            KbError::AlreadyExists { .. } => "already_exists",
            KbError::Copy { .. } => "copy_error",
            KbError::Fetch { .. } => "fetch_error",
            KbError::Io(_) => "io_error",
            KbError::Json(_) => "json_error",
            KbError::Other(_) => "other",
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

/// Result type alias for kb operations
pub type Result<T> = std::result::Result<T, KbError>;
