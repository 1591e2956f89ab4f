//! Application services

mod employee;
mod energy_statement;
mod office;

pub use employee::{EmployeePage, EmployeeService};
pub use energy_statement::{EnergyStatementPage, EnergyStatementService};
pub use office::{OfficePage, OfficeService};
