use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("A user cannot befriend themselves (id {id})")]
    SelfFriendship { id: i64 },

    #[error("Users {a} and {b} are already friends")]
    DuplicateFriendship { a: i64, b: i64 },

    #[error("Unknown user: {id}")]
    UnknownUser { id: i64 },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn self_friendship(id: i64) -> Self {
        Self::SelfFriendship { id }
    }

    pub fn duplicate_friendship(a: i64, b: i64) -> Self {
        Self::DuplicateFriendship { a, b }
    }

    pub fn unknown_user(id: i64) -> Self {
        Self::UnknownUser { id }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
