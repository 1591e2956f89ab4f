//! Domain layer: entities, listing engine and repository interfaces

pub mod employee;
pub mod energy_statement;
pub mod listing;
pub mod office;
pub mod repositories;

pub use employee::{Employee, EmploymentType, WorkPattern};
pub use energy_statement::{EnergyStatement, HeatingFuelType};
pub use office::Office;
pub use repositories::{DomainResult, RepositoryProvider};

pub use crate::shared::errors::DomainError;
