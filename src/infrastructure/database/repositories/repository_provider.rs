//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::employee::EmployeeRepository;
use crate::domain::energy_statement::EnergyStatementRepository;
use crate::domain::office::OfficeRepository;
use crate::domain::repositories::RepositoryProvider;

use super::employee_repository::SeaOrmEmployeeRepository;
use super::energy_statement_repository::SeaOrmEnergyStatementRepository;
use super::office_repository::SeaOrmOfficeRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let office = repos.offices().find_by_id(&id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    offices: SeaOrmOfficeRepository,
    employees: SeaOrmEmployeeRepository,
    energy_statements: SeaOrmEnergyStatementRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            offices: SeaOrmOfficeRepository::new(db.clone()),
            employees: SeaOrmEmployeeRepository::new(db.clone()),
            energy_statements: SeaOrmEnergyStatementRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn offices(&self) -> &dyn OfficeRepository {
        &self.offices
    }

    fn employees(&self) -> &dyn EmployeeRepository {
        &self.employees
    }

    fn energy_statements(&self) -> &dyn EnergyStatementRepository {
        &self.energy_statements
    }
}
