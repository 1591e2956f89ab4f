//! Office DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::listing::PageParams;
use crate::domain::office::{NewOffice, Office, OfficeFilter, OfficePatch};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfficeResponse {
    pub id: String,
    #[schema(example = "LON-01")]
    pub code: String,
    #[schema(example = "London HQ")]
    pub name: String,
    pub address: Option<String>,
    #[schema(example = "UK-GB-L")]
    pub grid_region_code: String,
    pub floor_area_m2: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Office> for OfficeResponse {
    fn from(o: Office) -> Self {
        Self {
            id: o.id,
            code: o.code,
            name: o.name,
            address: o.address,
            grid_region_code: o.grid_region_code,
            floor_area_m2: o.floor_area_m2,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfficeRequest {
    #[validate(length(min = 1, max = 32, message = "code is required (max 32 chars)"))]
    pub code: String,
    #[validate(length(min = 1, max = 200, message = "name is required (max 200 chars)"))]
    pub name: String,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 32, message = "gridRegionCode is required"))]
    pub grid_region_code: String,
    #[validate(range(min = 0.0, message = "floorAreaM2 must be non-negative"))]
    pub floor_area_m2: Option<f64>,
}

impl From<CreateOfficeRequest> for NewOffice {
    fn from(r: CreateOfficeRequest) -> Self {
        Self {
            code: r.code,
            name: r.name,
            address: r.address,
            grid_region_code: r.grid_region_code,
            floor_area_m2: r.floor_area_m2,
        }
    }
}

/// Only supplied fields change.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfficeRequest {
    #[validate(length(min = 1, max = 32))]
    pub code: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub grid_region_code: Option<String>,
    #[validate(range(min = 0.0, message = "floorAreaM2 must be non-negative"))]
    pub floor_area_m2: Option<f64>,
}

impl From<UpdateOfficeRequest> for OfficePatch {
    fn from(r: UpdateOfficeRequest) -> Self {
        Self {
            code: r.code,
            name: r.name,
            address: r.address,
            grid_region_code: r.grid_region_code,
            floor_area_m2: r.floor_area_m2,
        }
    }
}

/// Paging, sort and filter parameters of `GET /offices`
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OfficeListQuery {
    /// Zero-based page index
    #[validate(range(min = 0))]
    pub page: Option<i64>,
    /// Page size, 1-100
    #[validate(range(min = 1, max = 100))]
    pub size: Option<i64>,
    /// `field,direction`; fields: code, name, gridRegionCode, createdAt
    #[param(example = "name,asc")]
    pub sort: Option<String>,
    pub grid_region_code: Option<String>,
}

impl OfficeListQuery {
    pub fn into_parts(self) -> (PageParams, OfficeFilter) {
        (
            PageParams {
                page: self.page,
                size: self.size,
                sort: self.sort,
            },
            OfficeFilter::new(self.grid_region_code),
        )
    }
}

/// Filters applied to an office listing; absent ones are `null`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfficeFilters {
    pub grid_region_code: Option<String>,
}

impl From<OfficeFilter> for OfficeFilters {
    fn from(f: OfficeFilter) -> Self {
        Self {
            grid_region_code: f.grid_region_code,
        }
    }
}
