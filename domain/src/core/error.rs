//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),

    #[error("Credential must not be empty")]
    EmptyCredential,
}
