//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Construction of a domain value either fully succeeds or fails with one of
/// these; there are no partial states.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument supplied to a constructor failed validation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// Build a [`DomainError::InvalidArgument`] from a reason.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// The human-readable reason carried by the error.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) => msg,
        }
    }
}
