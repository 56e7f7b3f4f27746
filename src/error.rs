//! Error types for the status service.
//!
//! None of these reach an HTTP client directly: the status routes fold
//! store and manifest faults into their payloads. [`ConfigError`] is the
//! only one that stops the process, and only at start-up.

use std::time::Duration;
use thiserror::Error;

/// Invalid start-up configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Failure to read the version manifest.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("failed to read version manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed version manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("version manifest has an empty version")]
    Empty,
}

/// Failure of a data-store describe call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The store rejected or failed the request.
    #[error("{0}")]
    Describe(String),

    /// No reply within the health-check deadline.
    #[error("database health check timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

/// Failure of a client-side status check.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        CheckError::Transport(err.to_string())
    }
}
