use sea_orm::entity::prelude::*;

/// One canonical row per unordered friendship pair, `amigo_1 < amigo_2`.
/// The unique index on the pair lives in the migration.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "amigos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "amigo_1")]
    pub amigo_1: i64,
    #[sea_orm(column_name = "amigo_2")]
    pub amigo_2: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
