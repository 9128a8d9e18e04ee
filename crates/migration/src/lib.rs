//! Migrator registering schema migrations in dependency order.
//! The category seed runs last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_category;
mod m20240101_000002_create_question;
mod m20240101_000003_seed_categories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_category::Migration),
            Box::new(m20240101_000002_create_question::Migration),
            Box::new(m20240101_000003_seed_categories::Migration),
        ]
    }
}
