use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{client::UserDirectoryApi, error::UserDirectoryError, model::User};
use crate::domain::{error::DomainError, service::Service};

/// Local implementation of the UserDirectoryApi trait that delegates to the
/// domain service.
pub struct UserDirectoryLocalClient {
    service: Arc<Service>,
}

impl UserDirectoryLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UserDirectoryApi for UserDirectoryLocalClient {
    async fn get_user(&self, id: i64) -> anyhow::Result<User> {
        self.service
            .get_user(id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        self.service
            .list_users()
            .await
            .map_err(map_domain_error_to_anyhow)
    }
}

/// Map domain errors to contract errors wrapped in anyhow
fn map_domain_error_to_anyhow(domain_error: DomainError) -> anyhow::Error {
    let contract_error = match domain_error {
        DomainError::UserNotFound { id } => UserDirectoryError::not_found(id),
        DomainError::DuplicateEmail { email } => UserDirectoryError::duplicate_email(email),
        DomainError::AuthFailure => UserDirectoryError::InvalidCredentials,
        DomainError::InvalidEmail { email } => {
            UserDirectoryError::validation(format!("Invalid email: {}", email))
        }
        DomainError::MissingField { field } => {
            UserDirectoryError::validation(format!("Missing required field: {}", field))
        }
        DomainError::Database { .. } => UserDirectoryError::internal(),
    };

    anyhow::Error::new(contract_error)
}
