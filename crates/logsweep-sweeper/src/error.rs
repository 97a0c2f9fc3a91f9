//! Error types for sweeper operations

use thiserror::Error;

/// Errors that can occur during sweeper operations
///
/// Per-file and per-directory filesystem failures are not represented here:
/// they are recoverable by design and handled inside the sweep loop.
#[derive(Error, Debug)]
pub enum SweepError {
    /// The identity strings could not be compiled into a match pattern
    #[error("Cannot build log-name pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Worker error (signal handling, tokio runtime issues)
    #[error("Worker error: {0}")]
    Worker(String),
}
