use thiserror::Error;

/// Errors exposed to other modules through the contract client.
#[derive(Error, Debug)]
pub enum UserDirectoryError {
    #[error("User not found: {id}")]
    NotFound { id: i64 },

    #[error("Email '{email}' is already registered")]
    DuplicateEmail { email: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Internal error")]
    Internal,
}

impl UserDirectoryError {
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}
