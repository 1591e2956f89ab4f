//! Energy statement DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::energy_statement::{
    EnergyStatement, EnergyStatementFilter, EnergyStatementPatch, HeatingFuelType,
    NewEnergyStatement,
};
use crate::domain::listing::PageParams;
use crate::interfaces::http::common::empty_as_none;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnergyStatementResponse {
    pub id: String,
    pub office_id: String,
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(example = 3)]
    pub month: i32,
    pub electricity_kwh: f64,
    #[schema(value_type = Option<String>, example = "natural_gas")]
    pub heating_fuel_type: Option<HeatingFuelType>,
    pub heating_energy_kwh: Option<f64>,
    pub renewable_ppas_kwh: Option<f64>,
    /// Electricity plus heating energy
    pub total_energy_kwh: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EnergyStatement> for EnergyStatementResponse {
    fn from(s: EnergyStatement) -> Self {
        Self {
            total_energy_kwh: s.total_energy_kwh(),
            id: s.id,
            office_id: s.office_id,
            year: s.year,
            month: s.month,
            electricity_kwh: s.electricity_kwh,
            heating_fuel_type: s.heating_fuel_type,
            heating_energy_kwh: s.heating_energy_kwh,
            renewable_ppas_kwh: s.renewable_ppas_kwh,
            notes: s.notes,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnergyStatementRequest {
    #[validate(length(min = 1, message = "officeId is required"))]
    pub office_id: String,
    #[validate(range(min = 2000, max = 2100, message = "year must be between 2000 and 2100"))]
    pub year: i32,
    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12"))]
    pub month: i32,
    #[validate(range(min = 0.0, message = "electricityKwh must be non-negative"))]
    pub electricity_kwh: f64,
    #[schema(value_type = Option<String>, example = "natural_gas")]
    pub heating_fuel_type: Option<HeatingFuelType>,
    #[validate(range(min = 0.0, message = "heatingEnergyKwh must be non-negative"))]
    pub heating_energy_kwh: Option<f64>,
    #[validate(range(min = 0.0, message = "renewablePpasKwh must be non-negative"))]
    pub renewable_ppas_kwh: Option<f64>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl From<CreateEnergyStatementRequest> for NewEnergyStatement {
    fn from(r: CreateEnergyStatementRequest) -> Self {
        Self {
            office_id: r.office_id,
            year: r.year,
            month: r.month,
            electricity_kwh: r.electricity_kwh,
            heating_fuel_type: r.heating_fuel_type,
            heating_energy_kwh: r.heating_energy_kwh,
            renewable_ppas_kwh: r.renewable_ppas_kwh,
            notes: r.notes,
        }
    }
}

/// Only supplied fields change.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnergyStatementRequest {
    #[validate(length(min = 1))]
    pub office_id: Option<String>,
    #[validate(range(min = 2000, max = 2100, message = "year must be between 2000 and 2100"))]
    pub year: Option<i32>,
    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12"))]
    pub month: Option<i32>,
    #[validate(range(min = 0.0, message = "electricityKwh must be non-negative"))]
    pub electricity_kwh: Option<f64>,
    #[schema(value_type = Option<String>)]
    pub heating_fuel_type: Option<HeatingFuelType>,
    #[validate(range(min = 0.0, message = "heatingEnergyKwh must be non-negative"))]
    pub heating_energy_kwh: Option<f64>,
    #[validate(range(min = 0.0, message = "renewablePpasKwh must be non-negative"))]
    pub renewable_ppas_kwh: Option<f64>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl From<UpdateEnergyStatementRequest> for EnergyStatementPatch {
    fn from(r: UpdateEnergyStatementRequest) -> Self {
        Self {
            office_id: r.office_id,
            year: r.year,
            month: r.month,
            electricity_kwh: r.electricity_kwh,
            heating_fuel_type: r.heating_fuel_type,
            heating_energy_kwh: r.heating_energy_kwh,
            renewable_ppas_kwh: r.renewable_ppas_kwh,
            notes: r.notes,
        }
    }
}

/// Paging, sort and filter parameters of `GET /energy-statements`
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EnergyStatementListQuery {
    /// Zero-based page index
    #[validate(range(min = 0))]
    pub page: Option<i64>,
    /// Page size, 1-100
    #[validate(range(min = 1, max = 100))]
    pub size: Option<i64>,
    /// `field,direction`; fields: period, electricityKwh, createdAt
    #[param(example = "period,desc")]
    pub sort: Option<String>,
    pub office_id: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub month: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[param(value_type = Option<String>)]
    pub heating_fuel_type: Option<HeatingFuelType>,
}

impl EnergyStatementListQuery {
    pub fn into_parts(self) -> (PageParams, EnergyStatementFilter) {
        (
            PageParams {
                page: self.page,
                size: self.size,
                sort: self.sort,
            },
            EnergyStatementFilter {
                office_id: self.office_id,
                year: self.year,
                month: self.month,
                heating_fuel_type: self.heating_fuel_type,
            },
        )
    }
}

/// Filters applied to an energy statement listing; absent ones are `null`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnergyStatementFilters {
    pub office_id: Option<String>,
    pub year: Option<i32>,
    pub month: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub heating_fuel_type: Option<HeatingFuelType>,
}

impl From<EnergyStatementFilter> for EnergyStatementFilters {
    fn from(f: EnergyStatementFilter) -> Self {
        Self {
            office_id: f.office_id,
            year: f.year,
            month: f.month,
            heating_fuel_type: f.heating_fuel_type,
        }
    }
}
