//! Monthly energy statement of one office

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::listing::{non_empty, FilterSet, SortField};

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingFuelType {
    NaturalGas,
    HeatingOil,
    Electricity,
    DistrictHeating,
    Biomass,
    HeatPump,
    Other,
}

impl HeatingFuelType {
    pub const ALL: [Self; 7] = [
        Self::NaturalGas,
        Self::HeatingOil,
        Self::Electricity,
        Self::DistrictHeating,
        Self::Biomass,
        Self::HeatPump,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NaturalGas => "natural_gas",
            Self::HeatingOil => "heating_oil",
            Self::Electricity => "electricity",
            Self::DistrictHeating => "district_heating",
            Self::Biomass => "biomass",
            Self::HeatPump => "heat_pump",
            Self::Other => "other",
        }
    }
}

impl FromStr for HeatingFuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|v| v.as_str()).collect();
                format!("unknown heating fuel type '{s}', expected one of: {}", names.join(", "))
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyStatement {
    pub id: String,
    pub office_id: String,
    pub year: i32,
    /// 1..=12
    pub month: i32,
    pub electricity_kwh: f64,
    pub heating_fuel_type: Option<HeatingFuelType>,
    pub heating_energy_kwh: Option<f64>,
    /// Renewable energy covered by power purchase agreements
    pub renewable_ppas_kwh: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EnergyStatement {
    /// Electricity plus heating energy, in kWh.
    pub fn total_energy_kwh(&self) -> f64 {
        self.electricity_kwh + self.heating_energy_kwh.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEnergyStatement {
    pub office_id: String,
    pub year: i32,
    pub month: i32,
    pub electricity_kwh: f64,
    pub heating_fuel_type: Option<HeatingFuelType>,
    pub heating_energy_kwh: Option<f64>,
    pub renewable_ppas_kwh: Option<f64>,
    pub notes: Option<String>,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyStatementPatch {
    pub office_id: Option<String>,
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub electricity_kwh: Option<f64>,
    pub heating_fuel_type: Option<HeatingFuelType>,
    pub heating_energy_kwh: Option<f64>,
    pub renewable_ppas_kwh: Option<f64>,
    pub notes: Option<String>,
}

impl EnergyStatementPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyStatementSortField {
    /// Year, then month
    Period,
    ElectricityKwh,
    CreatedAt,
}

impl SortField for EnergyStatementSortField {
    const ALLOWED: &'static [Self] = &[Self::Period, Self::ElectricityKwh, Self::CreatedAt];
    const PRIMARY: Self = Self::Period;

    fn as_str(self) -> &'static str {
        match self {
            Self::Period => "period",
            Self::ElectricityKwh => "electricityKwh",
            Self::CreatedAt => "createdAt",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnergyStatementFilter {
    pub office_id: Option<String>,
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub heating_fuel_type: Option<HeatingFuelType>,
}

impl EnergyStatementFilter {
    pub fn normalized(self) -> Self {
        Self {
            office_id: non_empty(self.office_id),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnergyStatementPredicate {
    OfficeId(String),
    Year(i32),
    Month(i32),
    HeatingFuelType(HeatingFuelType),
}

impl FilterSet for EnergyStatementFilter {
    type Predicate = EnergyStatementPredicate;

    fn predicates(&self) -> Vec<EnergyStatementPredicate> {
        let mut predicates = Vec::new();
        if let Some(office_id) = non_empty(self.office_id.clone()) {
            predicates.push(EnergyStatementPredicate::OfficeId(office_id));
        }
        if let Some(year) = self.year {
            predicates.push(EnergyStatementPredicate::Year(year));
        }
        if let Some(month) = self.month {
            predicates.push(EnergyStatementPredicate::Month(month));
        }
        if let Some(fuel) = self.heating_fuel_type {
            predicates.push(EnergyStatementPredicate::HeatingFuelType(fuel));
        }
        predicates
    }
}
