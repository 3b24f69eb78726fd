//! Command errors

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Errors raised while handling a command
#[derive(Debug, Error)]
pub enum CommandError {
    /// The argument string did not have the expected shape.
    /// Carries the usage text to show the user.
    #[error("{0}")]
    Format(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CommandError {
    /// Whether the message may be shown to the end user verbatim
    pub fn is_user_facing(&self) -> bool {
        match self {
            Self::Format(_) => true,
            Self::Domain(e) => e.is_user_facing(),
        }
    }
}
