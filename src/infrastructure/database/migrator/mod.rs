//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_offices;
mod m20250101_000002_create_employees;
mod m20250101_000003_create_energy_statements;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_offices::Migration),
            Box::new(m20250101_000002_create_employees::Migration),
            Box::new(m20250101_000003_create_energy_statements::Migration),
        ]
    }
}
