//! Employee repository interface

use async_trait::async_trait;

use super::model::{Employee, EmployeeFilter, EmployeePatch, EmployeeSortField, NewEmployee};
use crate::domain::listing::{ListRequest, PageSlice};
use crate::domain::DomainResult;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, employee: NewEmployee) -> DomainResult<Employee>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Employee>>;
    async fn find_page(
        &self,
        request: &ListRequest<EmployeeSortField, EmployeeFilter>,
    ) -> DomainResult<PageSlice<Employee>>;
    async fn update(&self, id: &str, patch: EmployeePatch) -> DomainResult<Employee>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
