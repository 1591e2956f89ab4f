//! SeaORM implementation of OfficeRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Set};
use tracing::info;
use uuid::Uuid;

use super::{db_err, update_err};
use crate::domain::listing::{ListRequest, PageSlice};
use crate::domain::office::{
    NewOffice, Office, OfficeFilter, OfficePatch, OfficePredicate, OfficeRepository,
    OfficeSortField,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::office;
use crate::infrastructure::database::paging::{fetch_page, order_for, PageQuery, SortColumns};

impl SortColumns<office::Entity> for OfficeSortField {
    fn columns(self) -> Vec<office::Column> {
        match self {
            Self::Code => vec![office::Column::Code],
            Self::Name => vec![office::Column::Name],
            Self::GridRegionCode => vec![office::Column::GridRegionCode],
            Self::CreatedAt => vec![office::Column::CreatedAt],
        }
    }
}

fn condition(predicates: Vec<OfficePredicate>) -> Condition {
    predicates
        .into_iter()
        .fold(Condition::all(), |cond, predicate| match predicate {
            OfficePredicate::GridRegionCode(code) => {
                cond.add(office::Column::GridRegionCode.eq(code))
            }
        })
}

fn model_to_domain(m: office::Model) -> Office {
    Office {
        id: m.id,
        code: m.code,
        name: m.name,
        address: m.address,
        grid_region_code: m.grid_region_code,
        floor_area_m2: m.floor_area_m2,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

pub struct SeaOrmOfficeRepository {
    db: DatabaseConnection,
}

impl SeaOrmOfficeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OfficeRepository for SeaOrmOfficeRepository {
    async fn create(&self, office: NewOffice) -> DomainResult<Office> {
        let now = Utc::now();
        let model = office::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            code: Set(office.code),
            name: Set(office.name),
            address: Set(office.address),
            grid_region_code: Set(office.grid_region_code),
            floor_area_m2: Set(office.floor_area_m2),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        info!(office_id = %saved.id, code = %saved.code, "Office created");
        Ok(model_to_domain(saved))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Office>> {
        let model = office::Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_page(
        &self,
        request: &ListRequest<OfficeSortField, OfficeFilter>,
    ) -> DomainResult<PageSlice<Office>> {
        let query = PageQuery::<office::Entity> {
            condition: condition(request.predicates()),
            order: order_for(request.sort.field, request.sort.direction),
            tie_breaker: office::Column::Id,
            skip: request.skip(),
            take: request.take(),
        };
        let (models, total) = fetch_page(&self.db, query).await.map_err(db_err)?;
        Ok(PageSlice::new(
            models.into_iter().map(model_to_domain).collect(),
            total,
        ))
    }

    async fn update(&self, id: &str, patch: OfficePatch) -> DomainResult<Office> {
        let existing = office::Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Office", id))?;

        let mut model: office::ActiveModel = existing.into();
        if let Some(code) = patch.code {
            model.code = Set(code);
        }
        if let Some(name) = patch.name {
            model.name = Set(name);
        }
        if let Some(address) = patch.address {
            model.address = Set(Some(address));
        }
        if let Some(region) = patch.grid_region_code {
            model.grid_region_code = Set(region);
        }
        if let Some(area) = patch.floor_area_m2 {
            model.floor_area_m2 = Set(Some(area));
        }
        model.updated_at = Set(Utc::now());

        let updated = model
            .update(&self.db)
            .await
            .map_err(update_err("Office", id))?;
        info!(office_id = %updated.id, "Office updated");
        Ok(model_to_domain(updated))
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = office::Entity::delete_by_id(id.to_owned())
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Office", id));
        }
        info!(office_id = %id, "Office deleted");
        Ok(())
    }
}
