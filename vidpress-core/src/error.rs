//! Error types shared across the vidpress-core library.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for vidpress
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Required external tool not found: {0}")]
    DependencyNotFound(String),

    #[error("No video files found to process")]
    NoFilesFound,

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("{0} failed (status {1}): {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Failed to read size of {}: {source}", path.display())]
    StatsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0}")]
    PathError(String),
}

/// Result type for vidpress-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Creates a `CommandStart` error for a command that could not be spawned.
pub fn command_start_error(cmd: &str, e: std::io::Error) -> CoreError {
    CoreError::CommandStart(cmd.to_string(), e)
}

/// Creates a `CommandFailed` error for a command that exited abnormally.
pub fn command_failed_error(
    cmd: &str,
    status: ExitStatus,
    message: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.to_string(), status, message.into())
}

/// Creates a `CommandFailed` error for a command whose exit status could
/// not be collected.
pub fn command_wait_error(cmd: &str, e: std::io::Error) -> CoreError {
    CoreError::CommandFailed(
        cmd.to_string(),
        ExitStatus::default(),
        format!("Failed to wait for process: {e}"),
    )
}
