//! Storefront CLI error types.

use storefront_core::error::DomainError;
use thiserror::Error;

/// Errors surfaced by a CLI invocation.
#[derive(Debug, Error)]
pub enum AppError {
    /// An option is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The product catalog could not be read.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// A cart command was rejected.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) | Self::Domain(DomainError::Infrastructure(_)) => 1,
            Self::Config(_) => 2,
            Self::Catalog(_) | Self::Domain(DomainError::CorruptState { .. }) => 3,
            Self::Domain(DomainError::Validation(_)) => 4,
            Self::Domain(DomainError::NotFound(_)) => 5,
        }
    }
}
