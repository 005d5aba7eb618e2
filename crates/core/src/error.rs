//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Closed set of failure kinds raised by handlers and stores.
///
/// Each variant carries the client-facing message; the HTTP status mapping
/// lives at the response boundary, which matches on this enum exhaustively.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Missing or unverifiable credentials.
    #[error("{0}")]
    Auth(String),

    /// Input rejected before any mutation ran.
    #[error("{0}")]
    Validation(String),

    /// Lookup by identifier came back empty.
    #[error("{0}")]
    NotFound(String),

    /// Unique-constraint violation (duplicate email).
    #[error("{0}")]
    Conflict(String),

    /// Caller is authenticated but does not own the resource.
    #[error("{0}")]
    Forbidden(String),

    /// Anything unexpected. The message here is internal detail: it is
    /// logged at the response boundary and never sent to the client.
    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
