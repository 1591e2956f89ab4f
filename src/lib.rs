//! # Office Energy Service
//!
//! Records backend for offices, employees and monthly energy statements,
//! served as a paginated REST API.
//!
//! ## Architecture
//!
//! - **domain**: entities, the listing engine (sort, filter, page envelope)
//!   and repository traits
//! - **application**: services applying listing defaults and validation
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: HTTP router, DTOs and middleware
//! - **server**: process lifecycle (startup, graceful shutdown, tracing)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;

pub use server::{ServerHandle, ServerOptions};
