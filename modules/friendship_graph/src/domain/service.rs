use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::repo::{EdgeInsert, FriendshipRepository};
use user_directory::contract::{client::UserDirectoryApi, error::UserDirectoryError, model::User};

/// Normalize an unordered pair into its canonical ordering.
pub fn normalize_pair(a: i64, b: i64) -> (i64, i64) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Domain service for the friendship graph.
///
/// Depends on the repository port and on the user directory's contract
/// client; friend lists are materialized against the directory so the edge
/// store never owns user data.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn FriendshipRepository>,
    users: Arc<dyn UserDirectoryApi>,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(repo: Arc<dyn FriendshipRepository>, users: Arc<dyn UserDirectoryApi>) -> Self {
        Self { repo, users }
    }

    #[instrument(name = "friendship_graph.service.add_friend", skip(self))]
    pub async fn add_friend(&self, a: i64, b: i64) -> Result<(), DomainError> {
        info!("Adding friendship");

        if a == b {
            return Err(DomainError::self_friendship(a));
        }

        self.ensure_user_exists(a).await?;
        self.ensure_user_exists(b).await?;

        let (lo, hi) = normalize_pair(a, b);
        match self
            .repo
            .insert_pair(lo, hi)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
        {
            EdgeInsert::Inserted => {
                info!("Friendship created");
                Ok(())
            }
            EdgeInsert::AlreadyFriends => Err(DomainError::duplicate_friendship(a, b)),
        }
    }

    /// Remove a friendship. Idempotent: removing a pair that does not exist
    /// succeeds as a no-op.
    #[instrument(name = "friendship_graph.service.remove_friend", skip(self))]
    pub async fn remove_friend(&self, a: i64, b: i64) -> Result<(), DomainError> {
        let (lo, hi) = normalize_pair(a, b);
        let removed = self
            .repo
            .delete_pair(lo, hi)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        debug!("Removed {} friendship row(s)", removed);
        Ok(())
    }

    /// All users connected to `user_id`, id ascending.
    #[instrument(name = "friendship_graph.service.friends_of", skip(self))]
    pub async fn friends_of(&self, user_id: i64) -> Result<Vec<User>, DomainError> {
        let friend_ids: HashSet<i64> = self
            .repo
            .friend_ids_of(user_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .into_iter()
            .collect();

        let friends = self
            .list_directory()
            .await?
            .into_iter()
            .filter(|u| friend_ids.contains(&u.id))
            .collect();
        Ok(friends)
    }

    /// Complement of `friends_of` over all users except `user_id` itself.
    #[instrument(name = "friendship_graph.service.non_friends_of", skip(self))]
    pub async fn non_friends_of(&self, user_id: i64) -> Result<Vec<User>, DomainError> {
        let friend_ids: HashSet<i64> = self
            .repo
            .friend_ids_of(user_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .into_iter()
            .collect();

        let non_friends = self
            .list_directory()
            .await?
            .into_iter()
            .filter(|u| u.id != user_id && !friend_ids.contains(&u.id))
            .collect();
        Ok(non_friends)
    }

    // --- helpers ---

    async fn ensure_user_exists(&self, id: i64) -> Result<(), DomainError> {
        self.users
            .get_user(id)
            .await
            .map(|_| ())
            .map_err(|e| match e.downcast_ref::<UserDirectoryError>() {
                Some(UserDirectoryError::NotFound { .. }) => DomainError::unknown_user(id),
                _ => DomainError::database(e.to_string()),
            })
    }

    async fn list_directory(&self) -> Result<Vec<User>, DomainError> {
        self.users
            .list_users()
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_normalization_is_order_insensitive() {
        assert_eq!(normalize_pair(1, 2), (1, 2));
        assert_eq!(normalize_pair(2, 1), (1, 2));
        assert_eq!(normalize_pair(-5, 3), (-5, 3));
        assert_eq!(normalize_pair(7, 7), (7, 7));
    }
}
