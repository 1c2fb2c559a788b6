pub use sea_orm_migration::prelude::*;

mod m20260301_000001_parish;
mod m20260301_000002_catalog_item;
mod m20260301_000003_conversation;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_parish::Migration),
            Box::new(m20260301_000002_catalog_item::Migration),
            Box::new(m20260301_000003_conversation::Migration),
        ]
    }
}
