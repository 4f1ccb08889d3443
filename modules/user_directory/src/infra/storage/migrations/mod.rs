use sea_orm_migration::prelude::*;

mod m20240101_000001_create_usuario_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_usuario_table::Migration)]
    }

    // Each module tracks its own migrations so both migrators can share one DB.
    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_user_directory").into_iden()
    }
}
