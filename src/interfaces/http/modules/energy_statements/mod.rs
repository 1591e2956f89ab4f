//! Energy statements module: CRUD + paginated listing

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
