//! Domain error model.

use thiserror::Error;

/// Result type used across the workspace.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Rendering never fails; these cover the few fallible edges around it
/// (parsing labels and names, resolving views).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an unknown label).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The caller's role may not see the requested resource.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }
}
