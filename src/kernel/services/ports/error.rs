//! Host error type shared by every port.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type HostResult<T> = std::result::Result<T, HostError>;

/// Failures reported by host collaborators.
///
/// Resolution steps never produce these; a missing project is `None`, not an
/// error. Only real I/O against the host surfaces here.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error("Failed to persist workspace state at {path}: {message}")]
    Storage { path: PathBuf, message: String },

    #[error("Background task failed: {0}")]
    Task(String),

    #[error("Host capability unavailable: {0}")]
    Unavailable(&'static str),
}

impl From<tokio::task::JoinError> for HostError {
    fn from(e: tokio::task::JoinError) -> Self {
        HostError::Task(e.to_string())
    }
}
