//! Energy statement use cases

use std::sync::Arc;

use tracing::debug;

use crate::domain::energy_statement::{
    EnergyStatement, EnergyStatementFilter, EnergyStatementPatch, EnergyStatementSortField,
    NewEnergyStatement, MAX_YEAR, MIN_YEAR,
};
use crate::domain::listing::{ListDefaults, ListRequest, Page, PageParams};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

pub type EnergyStatementPage = Page<EnergyStatement, EnergyStatementSortField, EnergyStatementFilter>;

/// Re-checks the period and energy bounds the HTTP layer already enforces.
fn check_bounds(
    year: Option<i32>,
    month: Option<i32>,
    energies: &[Option<f64>],
) -> DomainResult<()> {
    if let Some(year) = year {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DomainError::invalid(format!(
                "year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
            )));
        }
    }
    if let Some(month) = month {
        if !(1..=12).contains(&month) {
            return Err(DomainError::invalid(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
    }
    if energies.iter().flatten().any(|kwh| kwh.is_nan() || *kwh < 0.0) {
        return Err(DomainError::invalid("energy values must be non-negative"));
    }
    Ok(())
}

pub struct EnergyStatementService {
    repos: Arc<dyn RepositoryProvider>,
    defaults: ListDefaults<EnergyStatementSortField>,
}

impl EnergyStatementService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        defaults: ListDefaults<EnergyStatementSortField>,
    ) -> Self {
        Self { repos, defaults }
    }

    pub async fn create(&self, statement: NewEnergyStatement) -> DomainResult<EnergyStatement> {
        check_bounds(
            Some(statement.year),
            Some(statement.month),
            &[
                Some(statement.electricity_kwh),
                statement.heating_energy_kwh,
                statement.renewable_ppas_kwh,
            ],
        )?;
        self.repos.energy_statements().create(statement).await
    }

    pub async fn list(
        &self,
        params: PageParams,
        filter: EnergyStatementFilter,
    ) -> DomainResult<EnergyStatementPage> {
        let request = ListRequest::normalize(params, filter.normalized(), &self.defaults)?;
        debug!(
            page = request.page,
            size = request.size,
            sort = %request.sort,
            filters = ?request.filters,
            "Listing energy statements"
        );
        let slice = self.repos.energy_statements().find_page(&request).await?;
        Ok(Page::assemble(request, slice))
    }

    pub async fn find_one(&self, id: &str) -> DomainResult<EnergyStatement> {
        self.repos
            .energy_statements()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("EnergyStatement", id))
    }

    pub async fn update(
        &self,
        id: &str,
        patch: EnergyStatementPatch,
    ) -> DomainResult<EnergyStatement> {
        let existing = self.find_one(id).await?;
        if patch.is_empty() {
            return Ok(existing);
        }
        check_bounds(
            patch.year,
            patch.month,
            &[
                patch.electricity_kwh,
                patch.heating_energy_kwh,
                patch.renewable_ppas_kwh,
            ],
        )?;
        self.repos.energy_statements().update(id, patch).await
    }

    pub async fn remove(&self, id: &str) -> DomainResult<EnergyStatement> {
        let existing = self.find_one(id).await?;
        self.repos.energy_statements().delete(id).await?;
        Ok(existing)
    }
}
