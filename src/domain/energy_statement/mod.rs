//! Energy statement aggregate

pub mod model;
pub mod repository;

pub use model::{
    EnergyStatement, EnergyStatementFilter, EnergyStatementPatch, EnergyStatementPredicate,
    EnergyStatementSortField, HeatingFuelType, NewEnergyStatement, MAX_YEAR, MIN_YEAR,
};
pub use repository::EnergyStatementRepository;
