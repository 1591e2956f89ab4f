//! Application layer: use cases over the repositories

pub mod services;

use std::sync::Arc;

use crate::domain::employee::EmployeeSortField;
use crate::domain::energy_statement::EnergyStatementSortField;
use crate::domain::listing::ListDefaults;
use crate::domain::office::OfficeSortField;
use crate::domain::RepositoryProvider;

pub use services::{
    EmployeePage, EmployeeService, EnergyStatementPage, EnergyStatementService, OfficePage,
    OfficeService,
};

/// Listing defaults for every listable entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingPolicy {
    pub offices: ListDefaults<OfficeSortField>,
    pub employees: ListDefaults<EmployeeSortField>,
    pub energy_statements: ListDefaults<EnergyStatementSortField>,
}

/// All services, built once at startup and shared by the HTTP layer.
#[derive(Clone)]
pub struct Services {
    pub offices: Arc<OfficeService>,
    pub employees: Arc<EmployeeService>,
    pub energy_statements: Arc<EnergyStatementService>,
}

impl Services {
    pub fn new(repos: Arc<dyn RepositoryProvider>, listing: ListingPolicy) -> Self {
        Self {
            offices: Arc::new(OfficeService::new(repos.clone(), listing.offices)),
            employees: Arc::new(EmployeeService::new(repos.clone(), listing.employees)),
            energy_statements: Arc::new(EnergyStatementService::new(
                repos,
                listing.energy_statements,
            )),
        }
    }
}
