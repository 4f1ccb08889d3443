//! SeaORM-backed repository implementation for the friendship port.
//!
//! Generic over `C: ConnectionTrait` like the user directory repository, so a
//! transactional connection can be substituted for the pooled one.

use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, Set,
    SqlErr,
};

use crate::domain::repo::{EdgeInsert, FriendshipRepository};
use crate::infra::storage::entity::{ActiveModel as EdgeAM, Column, Entity as EdgeEntity};

/// Filter matching either orientation of an unordered pair.
fn unordered_pair(lo: i64, hi: i64) -> Condition {
    Condition::any()
        .add(Column::Amigo1.eq(lo).and(Column::Amigo2.eq(hi)))
        .add(Column::Amigo1.eq(hi).and(Column::Amigo2.eq(lo)))
}

pub struct SeaOrmFriendshipRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmFriendshipRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C> FriendshipRepository for SeaOrmFriendshipRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn insert_pair(&self, lo: i64, hi: i64) -> anyhow::Result<EdgeInsert> {
        let m = EdgeAM {
            amigo_1: Set(lo),
            amigo_2: Set(hi),
            ..Default::default()
        };
        match m.insert(&self.conn).await {
            Ok(_) => Ok(EdgeInsert::Inserted),
            // The unique index on (amigo_1, amigo_2) is the duplicate guard.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(EdgeInsert::AlreadyFriends)
            }
            Err(e) => Err(e).context("insert friendship failed"),
        }
    }

    async fn delete_pair(&self, lo: i64, hi: i64) -> anyhow::Result<u64> {
        let res = EdgeEntity::delete_many()
            .filter(unordered_pair(lo, hi))
            .exec(&self.conn)
            .await
            .context("delete friendship failed")?;
        Ok(res.rows_affected)
    }

    async fn friend_ids_of(&self, user_id: i64) -> anyhow::Result<Vec<i64>> {
        let rows = EdgeEntity::find()
            .filter(
                Condition::any()
                    .add(Column::Amigo1.eq(user_id))
                    .add(Column::Amigo2.eq(user_id)),
            )
            .all(&self.conn)
            .await
            .context("friend_ids_of failed")?;

        let mut ids: Vec<i64> = rows
            .into_iter()
            .map(|row| {
                if row.amigo_1 == user_id {
                    row.amigo_2
                } else {
                    row.amigo_1
                }
            })
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }
}
