//! HTTP REST API interfaces
//!
//! - `common`: error envelope, validating extractors, page DTO
//! - `modules`: per-resource DTOs and handlers, health, metrics, request ids
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, AppState};
