//! SeaORM implementation of EnergyStatementRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Set};
use tracing::info;
use uuid::Uuid;

use super::{db_err, update_err};
use crate::domain::energy_statement::{
    EnergyStatement, EnergyStatementFilter, EnergyStatementPatch, EnergyStatementPredicate,
    EnergyStatementRepository, EnergyStatementSortField, HeatingFuelType, NewEnergyStatement,
};
use crate::domain::listing::{ListRequest, PageSlice};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::energy_statement;
use crate::infrastructure::database::paging::{fetch_page, order_for, PageQuery, SortColumns};

impl SortColumns<energy_statement::Entity> for EnergyStatementSortField {
    fn columns(self) -> Vec<energy_statement::Column> {
        match self {
            Self::Period => vec![
                energy_statement::Column::Year,
                energy_statement::Column::Month,
            ],
            Self::ElectricityKwh => vec![energy_statement::Column::ElectricityKwh],
            Self::CreatedAt => vec![energy_statement::Column::CreatedAt],
        }
    }
}

fn fuel_to_entity(f: HeatingFuelType) -> energy_statement::HeatingFuelType {
    match f {
        HeatingFuelType::NaturalGas => energy_statement::HeatingFuelType::NaturalGas,
        HeatingFuelType::HeatingOil => energy_statement::HeatingFuelType::HeatingOil,
        HeatingFuelType::Electricity => energy_statement::HeatingFuelType::Electricity,
        HeatingFuelType::DistrictHeating => energy_statement::HeatingFuelType::DistrictHeating,
        HeatingFuelType::Biomass => energy_statement::HeatingFuelType::Biomass,
        HeatingFuelType::HeatPump => energy_statement::HeatingFuelType::HeatPump,
        HeatingFuelType::Other => energy_statement::HeatingFuelType::Other,
    }
}

fn fuel_to_domain(f: energy_statement::HeatingFuelType) -> HeatingFuelType {
    match f {
        energy_statement::HeatingFuelType::NaturalGas => HeatingFuelType::NaturalGas,
        energy_statement::HeatingFuelType::HeatingOil => HeatingFuelType::HeatingOil,
        energy_statement::HeatingFuelType::Electricity => HeatingFuelType::Electricity,
        energy_statement::HeatingFuelType::DistrictHeating => HeatingFuelType::DistrictHeating,
        energy_statement::HeatingFuelType::Biomass => HeatingFuelType::Biomass,
        energy_statement::HeatingFuelType::HeatPump => HeatingFuelType::HeatPump,
        energy_statement::HeatingFuelType::Other => HeatingFuelType::Other,
    }
}

fn condition(predicates: Vec<EnergyStatementPredicate>) -> Condition {
    use energy_statement::Column;

    predicates
        .into_iter()
        .fold(Condition::all(), |cond, predicate| match predicate {
            EnergyStatementPredicate::OfficeId(id) => cond.add(Column::OfficeId.eq(id)),
            EnergyStatementPredicate::Year(year) => cond.add(Column::Year.eq(year)),
            EnergyStatementPredicate::Month(month) => cond.add(Column::Month.eq(month)),
            EnergyStatementPredicate::HeatingFuelType(fuel) => {
                cond.add(Column::HeatingFuelType.eq(fuel_to_entity(fuel)))
            }
        })
}

fn model_to_domain(m: energy_statement::Model) -> EnergyStatement {
    EnergyStatement {
        id: m.id,
        office_id: m.office_id,
        year: m.year,
        month: m.month,
        electricity_kwh: m.electricity_kwh,
        heating_fuel_type: m.heating_fuel_type.map(fuel_to_domain),
        heating_energy_kwh: m.heating_energy_kwh,
        renewable_ppas_kwh: m.renewable_ppas_kwh,
        notes: m.notes,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

pub struct SeaOrmEnergyStatementRepository {
    db: DatabaseConnection,
}

impl SeaOrmEnergyStatementRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnergyStatementRepository for SeaOrmEnergyStatementRepository {
    async fn create(&self, statement: NewEnergyStatement) -> DomainResult<EnergyStatement> {
        let now = Utc::now();
        let model = energy_statement::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            office_id: Set(statement.office_id),
            year: Set(statement.year),
            month: Set(statement.month),
            electricity_kwh: Set(statement.electricity_kwh),
            heating_fuel_type: Set(statement.heating_fuel_type.map(fuel_to_entity)),
            heating_energy_kwh: Set(statement.heating_energy_kwh),
            renewable_ppas_kwh: Set(statement.renewable_ppas_kwh),
            notes: Set(statement.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            statement_id = %saved.id,
            office_id = %saved.office_id,
            "Energy statement created for {}-{:02}",
            saved.year,
            saved.month
        );
        Ok(model_to_domain(saved))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<EnergyStatement>> {
        let model = energy_statement::Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_page(
        &self,
        request: &ListRequest<EnergyStatementSortField, EnergyStatementFilter>,
    ) -> DomainResult<PageSlice<EnergyStatement>> {
        let query = PageQuery::<energy_statement::Entity> {
            condition: condition(request.predicates()),
            order: order_for(request.sort.field, request.sort.direction),
            tie_breaker: energy_statement::Column::Id,
            skip: request.skip(),
            take: request.take(),
        };
        let (models, total) = fetch_page(&self.db, query).await.map_err(db_err)?;
        Ok(PageSlice::new(
            models.into_iter().map(model_to_domain).collect(),
            total,
        ))
    }

    async fn update(
        &self,
        id: &str,
        patch: EnergyStatementPatch,
    ) -> DomainResult<EnergyStatement> {
        let existing = energy_statement::Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("EnergyStatement", id))?;

        let mut model: energy_statement::ActiveModel = existing.into();
        if let Some(office_id) = patch.office_id {
            model.office_id = Set(office_id);
        }
        if let Some(year) = patch.year {
            model.year = Set(year);
        }
        if let Some(month) = patch.month {
            model.month = Set(month);
        }
        if let Some(kwh) = patch.electricity_kwh {
            model.electricity_kwh = Set(kwh);
        }
        if let Some(fuel) = patch.heating_fuel_type {
            model.heating_fuel_type = Set(Some(fuel_to_entity(fuel)));
        }
        if let Some(kwh) = patch.heating_energy_kwh {
            model.heating_energy_kwh = Set(Some(kwh));
        }
        if let Some(kwh) = patch.renewable_ppas_kwh {
            model.renewable_ppas_kwh = Set(Some(kwh));
        }
        if let Some(notes) = patch.notes {
            model.notes = Set(Some(notes));
        }
        model.updated_at = Set(Utc::now());

        let updated = model
            .update(&self.db)
            .await
            .map_err(update_err("EnergyStatement", id))?;
        info!(statement_id = %updated.id, "Energy statement updated");
        Ok(model_to_domain(updated))
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = energy_statement::Entity::delete_by_id(id.to_owned())
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("EnergyStatement", id));
        }
        info!(statement_id = %id, "Energy statement deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::{ListDefaults, PageParams};
    use crate::domain::office::{NewOffice, OfficeRepository};
    use crate::infrastructure::database::init_in_memory;
    use crate::infrastructure::database::repositories::SeaOrmOfficeRepository;
    use sea_orm::DatabaseConnection;

    async fn office(db: &DatabaseConnection, code: &str) -> String {
        SeaOrmOfficeRepository::new(db.clone())
            .create(NewOffice {
                code: code.into(),
                name: code.into(),
                address: None,
                grid_region_code: "UK-GB-L".into(),
                floor_area_m2: None,
            })
            .await
            .unwrap()
            .id
    }

    fn statement(office_id: &str, year: i32, month: i32, kwh: f64) -> NewEnergyStatement {
        NewEnergyStatement {
            office_id: office_id.into(),
            year,
            month,
            electricity_kwh: kwh,
            heating_fuel_type: Some(HeatingFuelType::NaturalGas),
            heating_energy_kwh: None,
            renewable_ppas_kwh: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn period_orders_by_year_then_month() {
        let db = init_in_memory().await.unwrap();
        let office_id = office(&db, "LON-01").await;
        let repo = SeaOrmEnergyStatementRepository::new(db);
        for (year, month) in [(2024, 2), (2023, 12), (2024, 11), (2024, 1)] {
            repo.create(statement(&office_id, year, month, 100.0))
                .await
                .unwrap();
        }

        let request = ListRequest::normalize(
            PageParams {
                sort: Some("period,desc".into()),
                ..Default::default()
            },
            EnergyStatementFilter::default(),
            &ListDefaults::default(),
        )
        .unwrap();
        let slice = repo.find_page(&request).await.unwrap();
        let periods: Vec<_> = slice.items.iter().map(|s| (s.year, s.month)).collect();
        assert_eq!(periods, [(2024, 11), (2024, 2), (2024, 1), (2023, 12)]);
    }

    #[tokio::test]
    async fn office_and_year_filters_combine() {
        let db = init_in_memory().await.unwrap();
        let london = office(&db, "LON-01").await;
        let paris = office(&db, "PAR-01").await;
        let repo = SeaOrmEnergyStatementRepository::new(db);
        repo.create(statement(&london, 2024, 1, 100.0)).await.unwrap();
        repo.create(statement(&london, 2023, 1, 100.0)).await.unwrap();
        repo.create(statement(&paris, 2024, 1, 100.0)).await.unwrap();

        let request = ListRequest::normalize(
            PageParams::default(),
            EnergyStatementFilter {
                office_id: Some(london.clone()),
                year: Some(2024),
                ..Default::default()
            },
            &ListDefaults::default(),
        )
        .unwrap();
        let slice = repo.find_page(&request).await.unwrap();
        assert_eq!(slice.total, 1);
        assert_eq!(slice.items[0].office_id, london);
    }

    #[tokio::test]
    async fn deleting_the_office_removes_its_statements() {
        let db = init_in_memory().await.unwrap();
        let office_id = office(&db, "LON-01").await;
        let repo = SeaOrmEnergyStatementRepository::new(db.clone());
        let created = repo
            .create(statement(&office_id, 2024, 3, 1200.5))
            .await
            .unwrap();

        SeaOrmOfficeRepository::new(db)
            .delete(&office_id)
            .await
            .unwrap();
        assert!(repo.find_by_id(&created.id).await.unwrap().is_none());
    }
}
