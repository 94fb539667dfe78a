//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No session is stored under the given id.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// A request failed validation (missing or out-of-range fields).
    #[error("validation error: {0}")]
    Validation(String),

    /// A storage or other infrastructure failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
