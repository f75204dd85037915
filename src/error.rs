//! Error types for topwords
//!
//! This module defines the error hierarchy for the application:
//! - Configuration and CLI errors (fatal, detected before counting starts)
//! - Per-file read errors (contained at the worker boundary)
//! - Worker thread errors (contained at the coordinator boundary)
//!
//! Design philosophy:
//! - Use thiserror for structured error types in library code
//! - Errors from the counting phase never abort the run; the worst case
//!   for a failing file or worker is undercounting

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the topwords application
#[derive(Error, Debug)]
pub enum TopWordsError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Per-file counting errors
    #[error("Count error: {0}")]
    Count(#[from] CountError),

    /// Worker/concurrency errors
    #[error("Worker error: {0}")]
    Worker(#[from] WorkerError),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid top-N value
    #[error("Invalid top-N value {value}: must be a positive integer")]
    InvalidTopN { value: usize },

    /// Invalid worker count
    #[error("Invalid worker count {count}: must be between 1 and {max}")]
    InvalidWorkerCount { count: usize, max: usize },

    /// Invalid exclude pattern
    #[error("Invalid exclude pattern '{pattern}': {reason}")]
    InvalidExcludePattern { pattern: String, reason: String },

    /// No input paths survived discovery
    #[error("No readable files found under the given paths")]
    NoReadableFiles,
}

/// Per-file errors during the counting phase
///
/// A single unified read-failure kind: a file that vanished mid-run, had
/// its permissions changed, or holds non-UTF-8 bytes all surface the same
/// way and are handled the same way (skip the file, log, continue).
#[derive(Error, Debug, Clone)]
pub enum CountError {
    /// File could not be read as UTF-8 text
    #[error("Failed to read '{path}': {reason}")]
    ReadFailed { path: PathBuf, reason: String },
}

impl CountError {
    /// Build a read failure from any underlying cause
    pub fn read_failed(path: &std::path::Path, cause: impl std::fmt::Display) -> Self {
        CountError::ReadFailed {
            path: path.to_path_buf(),
            reason: cause.to_string(),
        }
    }
}

/// Worker thread errors
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Worker thread could not be spawned
    #[error("Failed to start worker {id}: {reason}")]
    SpawnFailed { id: usize, reason: String },

    /// Worker panicked before finishing its partition
    #[error("Worker {id} panicked: its partition may be undercounted")]
    Panicked { id: usize },
}

/// Result type alias for TopWordsError
pub type Result<T> = std::result::Result<T, TopWordsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_conversion() {
        let config_err = ConfigError::InvalidTopN { value: 0 };
        let top_err: TopWordsError = config_err.into();
        assert!(matches!(top_err, TopWordsError::Config(_)));
    }

    #[test]
    fn test_read_failed_message() {
        let err = CountError::read_failed(Path::new("/data/a.txt"), "permission denied");
        assert_eq!(
            err.to_string(),
            "Failed to read '/data/a.txt': permission denied"
        );
    }
}
