use async_trait::async_trait;

use crate::contract::model::User;

/// Public API trait for the user directory that other modules can use.
///
/// Only the read surface is exposed; registration and login stay behind the
/// module's own REST endpoints.
#[async_trait]
pub trait UserDirectoryApi: Send + Sync {
    /// Get a user by id.
    async fn get_user(&self, id: i64) -> anyhow::Result<User>;

    /// List all users, id ascending.
    async fn list_users(&self) -> anyhow::Result<Vec<User>>;
}
