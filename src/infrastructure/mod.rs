//! Infrastructure layer - external concerns

pub mod database;

pub use database::repositories::SeaOrmRepositoryProvider;
pub use database::{init_database, init_in_memory, run_migrations, DatabaseConfig};
