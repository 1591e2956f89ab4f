//! Office domain entity

use chrono::{DateTime, Utc};

use crate::domain::listing::{non_empty, FilterSet, SortField};

/// An organizational office
#[derive(Debug, Clone, PartialEq)]
pub struct Office {
    pub id: String,
    /// Unique short code, e.g. "LON-01"
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    /// Electricity grid region the office draws from
    pub grid_region_code: String,
    pub floor_area_m2: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOffice {
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub grid_region_code: String,
    pub floor_area_m2: Option<f64>,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfficePatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub grid_region_code: Option<String>,
    pub floor_area_m2: Option<f64>,
}

impl OfficePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfficeSortField {
    Code,
    Name,
    GridRegionCode,
    CreatedAt,
}

impl SortField for OfficeSortField {
    const ALLOWED: &'static [Self] = &[
        Self::Code,
        Self::Name,
        Self::GridRegionCode,
        Self::CreatedAt,
    ];
    const PRIMARY: Self = Self::Name;

    fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Name => "name",
            Self::GridRegionCode => "gridRegionCode",
            Self::CreatedAt => "createdAt",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfficeFilter {
    pub grid_region_code: Option<String>,
}

impl OfficeFilter {
    pub fn new(grid_region_code: Option<String>) -> Self {
        Self {
            grid_region_code: non_empty(grid_region_code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfficePredicate {
    GridRegionCode(String),
}

impl FilterSet for OfficeFilter {
    type Predicate = OfficePredicate;

    fn predicates(&self) -> Vec<OfficePredicate> {
        non_empty(self.grid_region_code.clone())
            .map(OfficePredicate::GridRegionCode)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::{SortDirection, SortSpec};

    #[test]
    fn bogus_sort_field_falls_back_to_name() {
        let spec = SortSpec::resolve("bogusField,asc", OfficeSortField::PRIMARY);
        assert_eq!(spec.field, OfficeSortField::Name);
        assert_eq!(spec.field.as_str(), "name");
        assert_eq!(spec.direction, SortDirection::Asc);
    }

    #[test]
    fn uppercase_direction_is_desc() {
        let spec = SortSpec::resolve("name,DESC", OfficeSortField::PRIMARY);
        assert_eq!(spec.direction, SortDirection::Desc);
    }

    #[test]
    fn grid_region_code_is_sortable() {
        let spec = SortSpec::resolve("gridRegionCode,asc", OfficeSortField::PRIMARY);
        assert_eq!(spec.field, OfficeSortField::GridRegionCode);
    }

    #[test]
    fn empty_region_filter_is_absent() {
        let filter = OfficeFilter::new(Some(String::new()));
        assert_eq!(filter.grid_region_code, None);
        assert!(filter.predicates().is_empty());
    }

    #[test]
    fn region_filter_becomes_predicate() {
        let filter = OfficeFilter::new(Some("UK-GB-L".into()));
        assert_eq!(
            filter.predicates(),
            vec![OfficePredicate::GridRegionCode("UK-GB-L".into())]
        );
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(OfficePatch::default().is_empty());
        assert!(!OfficePatch {
            name: Some("x".into()),
            ..Default::default()
        }
        .is_empty());
    }
}
