//! SeaORM-backed repository implementation for the domain port.
//!
//! The struct is generic over `C: ConnectionTrait`, so it can be constructed
//! with a `DatabaseConnection` **or** a transactional connection.

use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::contract::model::{NewUser, User};
use crate::domain::repo::{UserRecord, UsersRepository};
use crate::infra::storage::entity::{ActiveModel as UserAM, Column, Entity as UserEntity};

/// SeaORM repository impl.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C> UsersRepository for SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        let found = UserEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRecord>> {
        let found = UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("find_by_email failed")?;
        Ok(found.map(|m| UserRecord {
            password: m.password.clone(),
            user: m.into(),
        }))
    }

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        let count = UserEntity::find()
            .filter(Column::Email.eq(email))
            .count(&self.conn)
            .await
            .context("email_exists failed")?;
        Ok(count > 0)
    }

    async fn insert(&self, new_user: NewUser) -> anyhow::Result<User> {
        let m = UserAM {
            first_name: Set(new_user.first_name),
            last_name: Set(new_user.last_name),
            email: Set(new_user.email),
            password: Set(new_user.password),
            ..Default::default()
        };
        let inserted = m.insert(&self.conn).await.context("insert user failed")?;
        Ok(inserted.into())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<User>> {
        let rows = UserEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("list_all failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
