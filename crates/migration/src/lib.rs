//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_user;
mod m20240101_000002_create_planets;
mod m20240101_000003_create_characters;
mod m20240101_000004_create_vehicles;
mod m20240101_000005_create_favourites;
mod m20240101_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_user::Migration),
            Box::new(m20240101_000002_create_planets::Migration),
            Box::new(m20240101_000003_create_characters::Migration),
            Box::new(m20240101_000004_create_vehicles::Migration),
            Box::new(m20240101_000005_create_favourites::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000006_add_indexes::Migration),
        ]
    }
}
