//! Error types

use thiserror::Error;

/// Custom error type
#[derive(Error, Debug)]
pub enum Error {
    /// The caller-supplied transaction option has the wrong shape
    #[error("Validation error: {0}")]
    Validation(String),

    /// Fee fields that the target chain side does not support
    #[error("Protocol mismatch: {0}")]
    ProtocolMismatch(String),

    /// A chain client or ABI fetch capability failed
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// An operation was invoked on a token scoped to the wrong chain side
    #[error("Usage error: {0}")]
    Usage(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
