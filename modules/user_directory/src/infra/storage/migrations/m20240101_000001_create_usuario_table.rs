use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuario::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuario::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Usuario::FirstName).string().not_null())
                    .col(ColumnDef::new(Usuario::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Usuario::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Usuario::Password).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuario::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Usuario {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Password,
}
