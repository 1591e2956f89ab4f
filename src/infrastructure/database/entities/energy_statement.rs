//! Office energy statement entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
pub enum HeatingFuelType {
    #[sea_orm(string_value = "natural_gas")]
    NaturalGas,
    #[sea_orm(string_value = "heating_oil")]
    HeatingOil,
    #[sea_orm(string_value = "electricity")]
    Electricity,
    #[sea_orm(string_value = "district_heating")]
    DistrictHeating,
    #[sea_orm(string_value = "biomass")]
    Biomass,
    #[sea_orm(string_value = "heat_pump")]
    HeatPump,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "energy_statements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub office_id: String,

    pub year: i32,

    pub month: i32,

    pub electricity_kwh: f64,

    pub heating_fuel_type: Option<HeatingFuelType>,

    pub heating_energy_kwh: Option<f64>,

    pub renewable_ppas_kwh: Option<f64>,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::office::Entity",
        from = "Column::OfficeId",
        to = "super::office::Column::Id",
        on_delete = "Cascade"
    )]
    Office,
}

impl Related<super::office::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Office.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
