//! Structured error types.

use thiserror::Error;

/// Unified error type for all molfp operations.
#[derive(Debug, Error)]
pub enum MolfpError {
    /// Parse error (malformed notation input)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MolfpError>;
