//! Domain Errors
//!
//! Error types for registry operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("character by that name could not be found")]
    NotFound,

    #[error("character by that name already exists")]
    AlreadyExists,

    #[error("you do not have permission to do that")]
    PermissionDenied,

    #[error("a character needs both a name and a profile")]
    InvalidCharacter,

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    /// Whether the message may be shown to the end user verbatim.
    ///
    /// Storage and platform failures are internal and must only be logged.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::NotFound
                | Self::AlreadyExists
                | Self::PermissionDenied
                | Self::InvalidCharacter
        )
    }
}
