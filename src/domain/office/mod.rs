//! Office aggregate

pub mod model;
pub mod repository;

pub use model::{NewOffice, Office, OfficeFilter, OfficePatch, OfficePredicate, OfficeSortField};
pub use repository::OfficeRepository;
