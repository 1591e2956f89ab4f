//! Employee DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::employee::{
    Employee, EmployeeFilter, EmployeePatch, EmploymentType, NewEmployee, WorkPattern,
};
use crate::domain::listing::PageParams;
use crate::interfaces::http::common::empty_as_none;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    pub department: Option<String>,
    #[schema(value_type = Option<String>, example = "full_time")]
    pub employment_type: Option<EmploymentType>,
    #[schema(value_type = Option<String>, example = "hybrid")]
    pub work_pattern: Option<WorkPattern>,
    pub office_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            email: e.email,
            department: e.department,
            employment_type: e.employment_type,
            work_pattern: e.work_pattern,
            office_id: e.office_id,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub department: Option<String>,
    /// full_time, part_time, contractor or intern
    #[schema(value_type = Option<String>, example = "full_time")]
    pub employment_type: Option<EmploymentType>,
    /// remote, hybrid or on_site
    #[schema(value_type = Option<String>, example = "hybrid")]
    pub work_pattern: Option<WorkPattern>,
    #[validate(length(min = 1))]
    pub office_id: Option<String>,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(r: CreateEmployeeRequest) -> Self {
        Self {
            email: r.email,
            department: r.department,
            employment_type: r.employment_type,
            work_pattern: r.work_pattern,
            office_id: r.office_id,
        }
    }
}

/// Only supplied fields change.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub department: Option<String>,
    #[schema(value_type = Option<String>, example = "part_time")]
    pub employment_type: Option<EmploymentType>,
    #[schema(value_type = Option<String>, example = "remote")]
    pub work_pattern: Option<WorkPattern>,
    #[validate(length(min = 1))]
    pub office_id: Option<String>,
}

impl From<UpdateEmployeeRequest> for EmployeePatch {
    fn from(r: UpdateEmployeeRequest) -> Self {
        Self {
            email: r.email,
            department: r.department,
            employment_type: r.employment_type,
            work_pattern: r.work_pattern,
            office_id: r.office_id,
        }
    }
}

/// Paging, sort and filter parameters of `GET /employees`
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EmployeeListQuery {
    /// Zero-based page index
    #[validate(range(min = 0))]
    pub page: Option<i64>,
    /// Page size, 1-100
    #[validate(range(min = 1, max = 100))]
    pub size: Option<i64>,
    /// `field,direction`; fields: email, department, createdAt
    #[param(example = "email,asc")]
    pub sort: Option<String>,
    pub office_id: Option<String>,
    pub department: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[param(value_type = Option<String>)]
    pub employment_type: Option<EmploymentType>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[param(value_type = Option<String>)]
    pub work_pattern: Option<WorkPattern>,
}

impl EmployeeListQuery {
    pub fn into_parts(self) -> (PageParams, EmployeeFilter) {
        (
            PageParams {
                page: self.page,
                size: self.size,
                sort: self.sort,
            },
            EmployeeFilter {
                office_id: self.office_id,
                department: self.department,
                employment_type: self.employment_type,
                work_pattern: self.work_pattern,
            },
        )
    }
}

/// Filters applied to an employee listing; absent ones are `null`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFilters {
    pub office_id: Option<String>,
    pub department: Option<String>,
    #[schema(value_type = Option<String>)]
    pub employment_type: Option<EmploymentType>,
    #[schema(value_type = Option<String>)]
    pub work_pattern: Option<WorkPattern>,
}

impl From<EmployeeFilter> for EmployeeFilters {
    fn from(f: EmployeeFilter) -> Self {
        Self {
            office_id: f.office_id,
            department: f.department,
            employment_type: f.employment_type,
            work_pattern: f.work_pattern,
        }
    }
}
