//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic value failures. Loading and vending
/// failures have their own error types in the crates that own those flows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A string did not name any selection in the catalog.
    #[error("unknown selection: {0}")]
    UnknownSelection(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_selection(name: impl Into<String>) -> Self {
        Self::UnknownSelection(name.into())
    }
}
