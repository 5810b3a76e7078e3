//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A command was rejected by domain validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Persisted state could not be decoded into a valid aggregate.
    #[error("corrupt state under key {key}: {reason}")]
    CorruptState {
        /// The storage key holding the bad value.
        key: String,
        /// Why decoding failed.
        reason: String,
    },

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
