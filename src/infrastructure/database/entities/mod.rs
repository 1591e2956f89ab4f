//! Database entities module

pub mod employee;
pub mod energy_statement;
pub mod office;

pub use employee::Entity as Employee;
pub use energy_statement::Entity as EnergyStatement;
pub use office::Entity as Office;
