//! Employee use cases

use std::sync::Arc;

use tracing::debug;

use crate::domain::employee::{
    Employee, EmployeeFilter, EmployeePatch, EmployeeSortField, NewEmployee,
};
use crate::domain::listing::{ListDefaults, ListRequest, Page, PageParams};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

pub type EmployeePage = Page<Employee, EmployeeSortField, EmployeeFilter>;

pub struct EmployeeService {
    repos: Arc<dyn RepositoryProvider>,
    defaults: ListDefaults<EmployeeSortField>,
}

impl EmployeeService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        defaults: ListDefaults<EmployeeSortField>,
    ) -> Self {
        Self { repos, defaults }
    }

    pub async fn create(&self, employee: NewEmployee) -> DomainResult<Employee> {
        self.repos.employees().create(employee).await
    }

    pub async fn list(
        &self,
        params: PageParams,
        filter: EmployeeFilter,
    ) -> DomainResult<EmployeePage> {
        let request = ListRequest::normalize(params, filter.normalized(), &self.defaults)?;
        debug!(
            page = request.page,
            size = request.size,
            sort = %request.sort,
            filters = ?request.filters,
            "Listing employees"
        );
        let slice = self.repos.employees().find_page(&request).await?;
        Ok(Page::assemble(request, slice))
    }

    pub async fn find_one(&self, id: &str) -> DomainResult<Employee> {
        self.repos
            .employees()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee", id))
    }

    pub async fn update(&self, id: &str, patch: EmployeePatch) -> DomainResult<Employee> {
        let existing = self.find_one(id).await?;
        if patch.is_empty() {
            return Ok(existing);
        }
        self.repos.employees().update(id, patch).await
    }

    pub async fn remove(&self, id: &str) -> DomainResult<Employee> {
        let existing = self.find_one(id).await?;
        self.repos.employees().delete(id).await?;
        Ok(existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::{EmploymentType, WorkPattern};
    use crate::domain::listing::total_pages;
    use crate::infrastructure::{init_in_memory, SeaOrmRepositoryProvider};

    async fn service() -> Arc<EmployeeService> {
        let db = init_in_memory().await.unwrap();
        Arc::new(EmployeeService::new(
            Arc::new(SeaOrmRepositoryProvider::new(db)),
            ListDefaults::default(),
        ))
    }

    fn employee(email: &str, department: &str) -> NewEmployee {
        NewEmployee {
            email: email.into(),
            department: Some(department.into()),
            employment_type: Some(EmploymentType::FullTime),
            work_pattern: Some(WorkPattern::Hybrid),
            office_id: None,
        }
    }

    #[tokio::test]
    async fn department_filter_is_applied_and_echoed() {
        let svc = service().await;
        let alice = svc
            .create(employee("alice@example.com", "Engineering"))
            .await
            .unwrap();
        svc.create(employee("bob@example.com", "Sales")).await.unwrap();

        let page = svc
            .list(
                PageParams::default(),
                EmployeeFilter {
                    department: Some("Engineering".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(page.content, vec![alice.clone()]);
        assert_eq!(page.filters.department.as_deref(), Some("Engineering"));
        assert_eq!(page.filters.office_id, None);

        let page = svc
            .list(
                PageParams::default(),
                EmployeeFilter {
                    department: Some("Sales".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!page.content.contains(&alice));
    }

    #[tokio::test]
    async fn empty_filter_values_match_everything() {
        let svc = service().await;
        svc.create(employee("alice@example.com", "Engineering"))
            .await
            .unwrap();
        let page = svc
            .list(
                PageParams::default(),
                EmployeeFilter {
                    department: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.filters.department, None);
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() {
        let svc = service().await;
        svc.create(employee("alice@example.com", "Engineering"))
            .await
            .unwrap();
        let err = svc
            .create(employee("alice@example.com", "Sales"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_merges_supplied_fields() {
        let svc = service().await;
        let created = svc
            .create(employee("alice@example.com", "Engineering"))
            .await
            .unwrap();
        let updated = svc
            .update(
                &created.id,
                EmployeePatch {
                    work_pattern: Some(WorkPattern::Remote),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.work_pattern, Some(WorkPattern::Remote));
        assert_eq!(updated.department.as_deref(), Some("Engineering"));
        assert_eq!(updated.email, created.email);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn envelopes_stay_consistent_under_concurrent_writes() {
        let svc = service().await;
        for i in 0..10 {
            svc.create(employee(&format!("seed{i}@example.com"), "Engineering"))
                .await
                .unwrap();
        }

        let writers: Vec<_> = (0..4)
            .map(|w| {
                let svc = svc.clone();
                tokio::spawn(async move {
                    for i in 0..10 {
                        svc.create(employee(&format!("w{w}-{i}@example.com"), "Engineering"))
                            .await
                            .unwrap();
                    }
                })
            })
            .collect();

        // One page holds the whole store, so content and total must agree.
        for _ in 0..20 {
            let page = svc
                .list(
                    PageParams {
                        page: Some(0),
                        size: Some(100),
                        sort: Some("createdAt,desc".into()),
                    },
                    EmployeeFilter::default(),
                )
                .await
                .unwrap();
            assert_eq!(page.content.len() as u64, page.total_elements);
            assert_eq!(page.total_pages, total_pages(page.total_elements, page.size));
            tokio::task::yield_now().await;
        }

        for writer in writers {
            writer.await.unwrap();
        }
        let page = svc
            .list(PageParams::default(), EmployeeFilter::default())
            .await
            .unwrap();
        assert_eq!(page.total_elements, 50);
    }
}
