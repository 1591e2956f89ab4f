//! Energy statement repository interface

use async_trait::async_trait;

use super::model::{
    EnergyStatement, EnergyStatementFilter, EnergyStatementPatch, EnergyStatementSortField,
    NewEnergyStatement,
};
use crate::domain::listing::{ListRequest, PageSlice};
use crate::domain::DomainResult;

#[async_trait]
pub trait EnergyStatementRepository: Send + Sync {
    async fn create(&self, statement: NewEnergyStatement) -> DomainResult<EnergyStatement>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<EnergyStatement>>;
    async fn find_page(
        &self,
        request: &ListRequest<EnergyStatementSortField, EnergyStatementFilter>,
    ) -> DomainResult<PageSlice<EnergyStatement>>;
    async fn update(&self, id: &str, patch: EnergyStatementPatch)
        -> DomainResult<EnergyStatement>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
