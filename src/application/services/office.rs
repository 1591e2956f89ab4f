//! Office use cases

use std::sync::Arc;

use tracing::debug;

use crate::domain::listing::{ListDefaults, ListRequest, Page, PageParams};
use crate::domain::office::{NewOffice, Office, OfficeFilter, OfficePatch, OfficeSortField};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

pub type OfficePage = Page<Office, OfficeSortField, OfficeFilter>;

pub struct OfficeService {
    repos: Arc<dyn RepositoryProvider>,
    defaults: ListDefaults<OfficeSortField>,
}

impl OfficeService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, defaults: ListDefaults<OfficeSortField>) -> Self {
        Self { repos, defaults }
    }

    pub async fn create(&self, office: NewOffice) -> DomainResult<Office> {
        self.repos.offices().create(office).await
    }

    /// One page of offices plus paging metadata.
    pub async fn list(&self, params: PageParams, filter: OfficeFilter) -> DomainResult<OfficePage> {
        let request = ListRequest::normalize(params, filter, &self.defaults)?;
        debug!(
            page = request.page,
            size = request.size,
            sort = %request.sort,
            "Listing offices"
        );
        let slice = self.repos.offices().find_page(&request).await?;
        Ok(Page::assemble(request, slice))
    }

    pub async fn find_one(&self, id: &str) -> DomainResult<Office> {
        self.repos
            .offices()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Office", id))
    }

    pub async fn update(&self, id: &str, patch: OfficePatch) -> DomainResult<Office> {
        let existing = self.find_one(id).await?;
        if patch.is_empty() {
            return Ok(existing);
        }
        self.repos.offices().update(id, patch).await
    }

    /// Delete and return the removed office. Its employees are detached and
    /// its energy statements go with it.
    pub async fn remove(&self, id: &str) -> DomainResult<Office> {
        let existing = self.find_one(id).await?;
        self.repos.offices().delete(id).await?;
        Ok(existing)
    }
}
