//! Page envelope DTO

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::listing::{Page, SortField, SortSpec};

/// Resolved sort of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SortDto {
    /// Public field name, e.g. `name`
    pub field: String,
    /// `asc` or `desc`
    pub direction: String,
}

impl<F: SortField> From<SortSpec<F>> for SortDto {
    fn from(spec: SortSpec<F>) -> Self {
        Self {
            field: spec.field.as_str().to_string(),
            direction: spec.direction.as_str().to_string(),
        }
    }
}

/// One page of records with paging metadata, the resolved sort and the
/// echoed filters.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T, F> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub sort: SortDto,
    pub filters: F,
}

impl<T, F> PageResponse<T, F> {
    pub fn from_page<E, SF, S>(page: Page<E, SF, S>) -> Self
    where
        T: From<E>,
        F: From<S>,
        SF: SortField,
    {
        Self {
            content: page.content.into_iter().map(T::from).collect(),
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            sort: page.sort.into(),
            filters: page.filters.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::SortDirection;
    use crate::domain::office::OfficeSortField;

    #[derive(Debug, Serialize, PartialEq)]
    struct Echo {
        region: Option<String>,
    }

    impl From<Option<String>> for Echo {
        fn from(region: Option<String>) -> Self {
            Self { region }
        }
    }

    #[test]
    fn serializes_camel_case_with_null_filters() {
        let page: Page<u32, OfficeSortField, Option<String>> = Page {
            content: vec![1, 2],
            page: 0,
            size: 2,
            total_elements: 3,
            total_pages: 2,
            sort: SortSpec::new(OfficeSortField::GridRegionCode, SortDirection::Desc),
            filters: None,
        };
        let response: PageResponse<u32, Echo> = PageResponse::from_page(page);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "content": [1, 2],
                "page": 0,
                "size": 2,
                "totalElements": 3,
                "totalPages": 2,
                "sort": {"field": "gridRegionCode", "direction": "desc"},
                "filters": {"region": null},
            })
        );
    }
}
