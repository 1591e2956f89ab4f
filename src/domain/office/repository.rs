//! Office repository interface

use async_trait::async_trait;

use super::model::{NewOffice, Office, OfficeFilter, OfficePatch, OfficeSortField};
use crate::domain::listing::{ListRequest, PageSlice};
use crate::domain::DomainResult;

#[async_trait]
pub trait OfficeRepository: Send + Sync {
    async fn create(&self, office: NewOffice) -> DomainResult<Office>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Office>>;
    /// One page plus the total match count, read from a single snapshot.
    async fn find_page(
        &self,
        request: &ListRequest<OfficeSortField, OfficeFilter>,
    ) -> DomainResult<PageSlice<Office>>;
    async fn update(&self, id: &str, patch: OfficePatch) -> DomainResult<Office>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
