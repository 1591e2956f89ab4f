//! Shared HTTP building blocks: error envelope, extractors, page DTO

pub mod error;
pub mod page;
pub mod validated_json;
pub mod validated_query;

pub use error::{
    error_envelope_middleware, method_not_allowed, route_not_found, ApiError, ErrorResponse,
};
pub use page::{PageResponse, SortDto};
pub use validated_json::ValidatedJson;
pub use validated_query::{empty_as_none, ValidatedQuery};
