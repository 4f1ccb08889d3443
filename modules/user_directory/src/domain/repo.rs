use async_trait::async_trait;

use crate::contract::model::{NewUser, User};

/// A user row as stored, including the credential column.
/// Stays inside the domain; the password never crosses the contract boundary.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    pub password: String,
}

/// Repository port for the user directory.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRecord>>;

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool>;

    /// Insert a new user; the store assigns the next id.
    async fn insert(&self, new_user: NewUser) -> anyhow::Result<User>;

    /// All users, id ascending (insertion order).
    async fn list_all(&self) -> anyhow::Result<Vec<User>>;
}
