use thiserror::Error;

use crate::domain::user::ValidationErrorSet;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// User-correctable input defects, one message key per failing field
    #[error("validation failed")]
    Validation(ValidationErrorSet),

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Notification error: {message}")]
    Notification { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(errors: ValidationErrorSet) -> Self {
        Self::Validation(errors)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn notification(message: impl Into<String>) -> Self {
        Self::Notification {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
