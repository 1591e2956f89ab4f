//! Repository access for the domain layer
//!
//! - `RepositoryProvider`: unified access to the per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::employee::EmployeeRepository;
use super::energy_statement::EnergyStatementRepository;
use super::office::OfficeRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let office = repos.offices().find_by_id("…").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn offices(&self) -> &dyn OfficeRepository;
    fn employees(&self) -> &dyn EmployeeRepository;
    fn energy_statements(&self) -> &dyn EnergyStatementRepository;
}
