//! Query normalization
//!
//! Turns raw, possibly absent paging inputs into a bounded [`ListRequest`].

use super::filter::FilterSet;
use super::sort::{SortField, SortSpec};
use crate::shared::errors::DomainError;

/// Largest page a caller may ask for.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Page size used when no per-entity default is configured.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Raw paging inputs as they arrive from the boundary.
///
/// Signed on purpose: a negative value that slips past boundary validation
/// is rejected here instead of wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

/// Per-entity listing policy, built once from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListDefaults<F> {
    pub page_size: u64,
    pub sort: SortSpec<F>,
}

impl<F: SortField> ListDefaults<F> {
    pub fn new(page_size: u64, sort: SortSpec<F>) -> Self {
        Self { page_size, sort }
    }

    /// Build from a configured size and sort expression. The expression goes
    /// through the same resolver as caller input, falling back to the
    /// entity's primary field.
    pub fn from_settings(page_size: u64, sort_expr: &str) -> Self {
        Self::new(page_size, SortSpec::resolve(sort_expr, F::PRIMARY))
    }
}

impl<F: SortField> Default for ListDefaults<F> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, SortSpec::default())
    }
}

/// Validated, bounded listing request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest<F, S> {
    pub page: u64,
    pub size: u64,
    pub sort: SortSpec<F>,
    pub filters: S,
}

impl<F: SortField, S: FilterSet> ListRequest<F, S> {
    pub fn normalize(
        params: PageParams,
        filters: S,
        defaults: &ListDefaults<F>,
    ) -> Result<Self, DomainError> {
        let page = match params.page {
            None => 0,
            Some(p) => u64::try_from(p)
                .map_err(|_| DomainError::invalid(format!("page must be >= 0, got {p}")))?,
        };

        let size = match params.size {
            None => defaults.page_size,
            Some(s) => u64::try_from(s)
                .ok()
                .filter(|s| (1..=MAX_PAGE_SIZE).contains(s))
                .ok_or_else(|| {
                    DomainError::invalid(format!(
                        "size must be between 1 and {MAX_PAGE_SIZE}, got {s}"
                    ))
                })?,
        };

        // Skip must fit the store's signed 64-bit offset.
        page.checked_mul(size)
            .filter(|skip| i64::try_from(*skip).is_ok())
            .ok_or_else(|| DomainError::invalid(format!("page {page} is out of range")))?;

        let sort = match params.sort {
            None => defaults.sort,
            Some(expr) => SortSpec::resolve(&expr, defaults.sort.field),
        };

        Ok(Self {
            page,
            size,
            sort,
            filters,
        })
    }

    pub fn skip(&self) -> u64 {
        self.page * self.size
    }

    pub fn take(&self) -> u64 {
        self.size
    }

    pub fn predicates(&self) -> Vec<S::Predicate> {
        self.filters.predicates()
    }
}
