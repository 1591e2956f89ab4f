//! SeaORM implementation of EmployeeRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Set};
use tracing::info;
use uuid::Uuid;

use super::{db_err, update_err};
use crate::domain::employee::{
    Employee, EmployeeFilter, EmployeePatch, EmployeePredicate, EmployeeRepository,
    EmployeeSortField, EmploymentType, NewEmployee, WorkPattern,
};
use crate::domain::listing::{ListRequest, PageSlice};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::employee;
use crate::infrastructure::database::paging::{fetch_page, order_for, PageQuery, SortColumns};

// ── Conversion helpers ──────────────────────────────────────────

impl SortColumns<employee::Entity> for EmployeeSortField {
    fn columns(self) -> Vec<employee::Column> {
        match self {
            Self::Email => vec![employee::Column::Email],
            Self::Department => vec![employee::Column::Department],
            Self::CreatedAt => vec![employee::Column::CreatedAt],
        }
    }
}

fn employment_type_to_entity(t: EmploymentType) -> employee::EmploymentType {
    match t {
        EmploymentType::FullTime => employee::EmploymentType::FullTime,
        EmploymentType::PartTime => employee::EmploymentType::PartTime,
        EmploymentType::Contractor => employee::EmploymentType::Contractor,
        EmploymentType::Intern => employee::EmploymentType::Intern,
    }
}

fn employment_type_to_domain(t: employee::EmploymentType) -> EmploymentType {
    match t {
        employee::EmploymentType::FullTime => EmploymentType::FullTime,
        employee::EmploymentType::PartTime => EmploymentType::PartTime,
        employee::EmploymentType::Contractor => EmploymentType::Contractor,
        employee::EmploymentType::Intern => EmploymentType::Intern,
    }
}

fn work_pattern_to_entity(p: WorkPattern) -> employee::WorkPattern {
    match p {
        WorkPattern::Remote => employee::WorkPattern::Remote,
        WorkPattern::Hybrid => employee::WorkPattern::Hybrid,
        WorkPattern::OnSite => employee::WorkPattern::OnSite,
    }
}

fn work_pattern_to_domain(p: employee::WorkPattern) -> WorkPattern {
    match p {
        employee::WorkPattern::Remote => WorkPattern::Remote,
        employee::WorkPattern::Hybrid => WorkPattern::Hybrid,
        employee::WorkPattern::OnSite => WorkPattern::OnSite,
    }
}

fn condition(predicates: Vec<EmployeePredicate>) -> Condition {
    predicates
        .into_iter()
        .fold(Condition::all(), |cond, predicate| match predicate {
            EmployeePredicate::OfficeId(id) => cond.add(employee::Column::OfficeId.eq(id)),
            EmployeePredicate::Department(dept) => cond.add(employee::Column::Department.eq(dept)),
            EmployeePredicate::EmploymentType(t) => {
                cond.add(employee::Column::EmploymentType.eq(employment_type_to_entity(t)))
            }
            EmployeePredicate::WorkPattern(p) => {
                cond.add(employee::Column::WorkPattern.eq(work_pattern_to_entity(p)))
            }
        })
}

fn model_to_domain(m: employee::Model) -> Employee {
    Employee {
        id: m.id,
        email: m.email,
        department: m.department,
        employment_type: m.employment_type.map(employment_type_to_domain),
        work_pattern: m.work_pattern.map(work_pattern_to_domain),
        office_id: m.office_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

// ── SeaOrmEmployeeRepository ────────────────────────────────────

pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn create(&self, employee: NewEmployee) -> DomainResult<Employee> {
        let now = Utc::now();
        let model = employee::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            email: Set(employee.email),
            department: Set(employee.department),
            employment_type: Set(employee.employment_type.map(employment_type_to_entity)),
            work_pattern: Set(employee.work_pattern.map(work_pattern_to_entity)),
            office_id: Set(employee.office_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        info!(employee_id = %saved.id, "Employee created");
        Ok(model_to_domain(saved))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Employee>> {
        let model = employee::Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_page(
        &self,
        request: &ListRequest<EmployeeSortField, EmployeeFilter>,
    ) -> DomainResult<PageSlice<Employee>> {
        let query = PageQuery::<employee::Entity> {
            condition: condition(request.predicates()),
            order: order_for(request.sort.field, request.sort.direction),
            tie_breaker: employee::Column::Id,
            skip: request.skip(),
            take: request.take(),
        };
        let (models, total) = fetch_page(&self.db, query).await.map_err(db_err)?;
        Ok(PageSlice::new(
            models.into_iter().map(model_to_domain).collect(),
            total,
        ))
    }

    async fn update(&self, id: &str, patch: EmployeePatch) -> DomainResult<Employee> {
        let existing = employee::Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Employee", id))?;

        let mut model: employee::ActiveModel = existing.into();
        if let Some(email) = patch.email {
            model.email = Set(email);
        }
        if let Some(department) = patch.department {
            model.department = Set(Some(department));
        }
        if let Some(t) = patch.employment_type {
            model.employment_type = Set(Some(employment_type_to_entity(t)));
        }
        if let Some(p) = patch.work_pattern {
            model.work_pattern = Set(Some(work_pattern_to_entity(p)));
        }
        if let Some(office_id) = patch.office_id {
            model.office_id = Set(Some(office_id));
        }
        model.updated_at = Set(Utc::now());

        let updated = model
            .update(&self.db)
            .await
            .map_err(update_err("Employee", id))?;
        info!(employee_id = %updated.id, "Employee updated");
        Ok(model_to_domain(updated))
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = employee::Entity::delete_by_id(id.to_owned())
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Employee", id));
        }
        info!(employee_id = %id, "Employee deleted");
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

    fn new_employee(email: &str, department: &str) -> NewEmployee {
        NewEmployee {
            email: email.into(),
            department: Some(department.into()),
            employment_type: Some(EmploymentType::FullTime),
            work_pattern: Some(WorkPattern::Hybrid),
            office_id: None,
        }
    }

    fn by_filter(filter: EmployeeFilter) -> ListRequest<EmployeeSortField, EmployeeFilter> {
        ListRequest::normalize(PageParams::default(), filter, &ListDefaults::default()).unwrap()
    }

    #[tokio::test]
    async fn enums_survive_the_store() {
        let repo = SeaOrmEmployeeRepository::new(init_in_memory().await.unwrap());
        let created = repo
            .create(new_employee("alice@example.com", "Engineering"))
            .await
            .unwrap();
        let found = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found.employment_type, Some(EmploymentType::FullTime));
        assert_eq!(found.work_pattern, Some(WorkPattern::Hybrid));
    }

    #[tokio::test]
    async fn department_and_enum_filters_match_exactly() {
        let repo = SeaOrmEmployeeRepository::new(init_in_memory().await.unwrap());
        repo.create(new_employee("alice@example.com", "Engineering"))
            .await
            .unwrap();
        repo.create(NewEmployee {
            work_pattern: Some(WorkPattern::Remote),
            ..new_employee("bob@example.com", "Engineering")
        })
        .await
        .unwrap();
        repo.create(new_employee("carol@example.com", "Sales"))
            .await
            .unwrap();

        let slice = repo
            .find_page(&by_filter(EmployeeFilter {
                department: Some("Engineering".into()),
                ..Default::default()
            }))
            .await
            .unwrap();
        assert_eq!(slice.total, 2);
        assert!(slice
            .items
            .iter()
            .all(|e| e.department.as_deref() == Some("Engineering")));

        let slice = repo
            .find_page(&by_filter(EmployeeFilter {
                department: Some("Engineering".into()),
                work_pattern: Some(WorkPattern::Remote),
                ..Default::default()
            }))
            .await
            .unwrap();
        assert_eq!(slice.total, 1);
        assert_eq!(slice.items[0].email, "bob@example.com");
    }

    #[tokio::test]
    async fn unknown_office_is_invalid_argument() {
        let repo = SeaOrmEmployeeRepository::new(init_in_memory().await.unwrap());
        let err = repo
            .create(NewEmployee {
                office_id: Some("no-such-office".into()),
                ..new_employee("alice@example.com", "Engineering")
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)), "{err:?}");
    }

    #[tokio::test]
    async fn deleting_the_office_detaches_employees() {
        let db = init_in_memory().await.unwrap();
        let offices = SeaOrmOfficeRepository::new(db.clone());
        let repo = SeaOrmEmployeeRepository::new(db);
        let office = offices
            .create(NewOffice {
                code: "LON-01".into(),
                name: "London HQ".into(),
                address: None,
                grid_region_code: "UK-GB-L".into(),
                floor_area_m2: None,
            })
            .await
            .unwrap();
        let employee = repo
            .create(NewEmployee {
                office_id: Some(office.id.clone()),
                ..new_employee("alice@example.com", "Engineering")
            })
            .await
            .unwrap();

        offices.delete(&office.id).await.unwrap();
        let employee = repo.find_by_id(&employee.id).await.unwrap().unwrap();
        assert_eq!(employee.office_id, None);
    }
}
