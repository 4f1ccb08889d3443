use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Amigos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Amigos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Amigos::Amigo1).big_integer().not_null())
                    .col(ColumnDef::new(Amigos::Amigo2).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_amigos_amigo_1")
                            .from(Amigos::Table, Amigos::Amigo1)
                            .to(Usuario::Table, Usuario::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_amigos_amigo_2")
                            .from(Amigos::Table, Amigos::Amigo2)
                            .to(Usuario::Table, Usuario::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Canonical rows store amigo_1 < amigo_2, so this index rejects a
        // duplicate pair regardless of the argument order of the request.
        manager
            .create_index(
                Index::create()
                    .name("idx_amigos_pair")
                    .table(Amigos::Table)
                    .col(Amigos::Amigo1)
                    .col(Amigos::Amigo2)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Amigos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Amigos {
    Table,
    Id,
    #[sea_orm(iden = "amigo_1")]
    Amigo1,
    #[sea_orm(iden = "amigo_2")]
    Amigo2,
}

#[derive(DeriveIden)]
enum Usuario {
    Table,
    Id,
}
