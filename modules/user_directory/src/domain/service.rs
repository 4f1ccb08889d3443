use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::contract::model::{Credentials, NewUser, User};
use crate::domain::error::DomainError;
use crate::domain::repo::UsersRepository;

/// Domain service with business rules for the user directory.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    #[instrument(
        name = "user_directory.service.register",
        skip(self, new_user),
        fields(email = %new_user.email)
    )]
    pub async fn register(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Registering new user");

        self.validate_new_user(&new_user)?;

        // Pre-check for a friendly error; the unique index on email is the
        // actual guard.
        if self
            .repo
            .email_exists(&new_user.email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
        {
            return Err(DomainError::duplicate_email(new_user.email));
        }

        let user = self
            .repo
            .insert(new_user)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully registered user with id={}", user.id);
        Ok(user)
    }

    #[instrument(
        name = "user_directory.service.authenticate",
        skip(self, credentials)
    )]
    pub async fn authenticate(&self, credentials: Credentials) -> Result<User, DomainError> {
        debug!("Authenticating user");

        let record = self
            .repo
            .find_by_email(&credentials.email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or(DomainError::AuthFailure)?;

        // Plaintext comparison. Placeholder credential check only; a real
        // deployment must store and verify a password hash instead.
        if record.password != credentials.password {
            return Err(DomainError::AuthFailure);
        }

        debug!("Authenticated user id={}", record.user.id);
        Ok(record.user)
    }

    #[instrument(name = "user_directory.service.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: i64) -> Result<User, DomainError> {
        debug!("Getting user by id");

        let user = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))?;
        Ok(user)
    }

    #[instrument(name = "user_directory.service.list_users", skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        debug!("Listing users");

        let users = self
            .repo
            .list_all()
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        debug!("Listed {} users", users.len());
        Ok(users)
    }

    // --- validation helpers ---

    fn validate_new_user(&self, new_user: &NewUser) -> Result<(), DomainError> {
        Self::require("first_name", &new_user.first_name)?;
        Self::require("last_name", &new_user.last_name)?;
        Self::require("email", &new_user.email)?;
        Self::require("password", &new_user.password)?;

        if !new_user.email.contains('@') || !new_user.email.contains('.') {
            return Err(DomainError::invalid_email(new_user.email.clone()));
        }
        Ok(())
    }

    fn require(field: &str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::missing_field(field));
        }
        Ok(())
    }
}
