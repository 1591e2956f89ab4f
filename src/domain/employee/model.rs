//! Employee domain entity

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::listing::{non_empty, FilterSet, SortField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contractor,
    Intern,
}

impl EmploymentType {
    pub const ALL: [Self; 4] = [Self::FullTime, Self::PartTime, Self::Contractor, Self::Intern];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::Contractor => "contractor",
            Self::Intern => "intern",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|v| v.as_str()).collect();
                format!("unknown employment type '{s}', expected one of: {}", names.join(", "))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPattern {
    Remote,
    Hybrid,
    OnSite,
}

impl WorkPattern {
    pub const ALL: [Self; 3] = [Self::Remote, Self::Hybrid, Self::OnSite];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Hybrid => "hybrid",
            Self::OnSite => "on_site",
        }
    }
}

impl FromStr for WorkPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|v| v.as_str()).collect();
                format!("unknown work pattern '{s}', expected one of: {}", names.join(", "))
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: String,
    pub email: String,
    pub department: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub work_pattern: Option<WorkPattern>,
    pub office_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub email: String,
    pub department: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub work_pattern: Option<WorkPattern>,
    pub office_id: Option<String>,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub email: Option<String>,
    pub department: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub work_pattern: Option<WorkPattern>,
    pub office_id: Option<String>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeSortField {
    Email,
    Department,
    CreatedAt,
}

impl SortField for EmployeeSortField {
    const ALLOWED: &'static [Self] = &[Self::Email, Self::Department, Self::CreatedAt];
    const PRIMARY: Self = Self::Email;

    fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Department => "department",
            Self::CreatedAt => "createdAt",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub office_id: Option<String>,
    pub department: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub work_pattern: Option<WorkPattern>,
}

impl EmployeeFilter {
    /// Empty strings count as absent, both for matching and for the echo.
    pub fn normalized(self) -> Self {
        Self {
            office_id: non_empty(self.office_id),
            department: non_empty(self.department),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeePredicate {
    OfficeId(String),
    Department(String),
    EmploymentType(EmploymentType),
    WorkPattern(WorkPattern),
}

impl FilterSet for EmployeeFilter {
    type Predicate = EmployeePredicate;

    fn predicates(&self) -> Vec<EmployeePredicate> {
        let mut predicates = Vec::new();
        if let Some(office_id) = non_empty(self.office_id.clone()) {
            predicates.push(EmployeePredicate::OfficeId(office_id));
        }
        if let Some(department) = non_empty(self.department.clone()) {
            predicates.push(EmployeePredicate::Department(department));
        }
        if let Some(kind) = self.employment_type {
            predicates.push(EmployeePredicate::EmploymentType(kind));
        }
        if let Some(pattern) = self.work_pattern {
            predicates.push(EmployeePredicate::WorkPattern(pattern));
        }
        predicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::SortSpec;

    #[test]
    fn absent_filters_produce_no_predicates() {
        assert!(EmployeeFilter::default().predicates().is_empty());
    }

    #[test]
    fn empty_strings_are_omitted() {
        let filter = EmployeeFilter {
            office_id: Some(String::new()),
            department: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.predicates().is_empty());
        let normalized = filter.normalized();
        assert_eq!(normalized.office_id, None);
        assert_eq!(normalized.department, None);
    }

    #[test]
    fn every_present_slot_becomes_a_predicate() {
        let filter = EmployeeFilter {
            office_id: Some("o-1".into()),
            department: Some("Engineering".into()),
            employment_type: Some(EmploymentType::FullTime),
            work_pattern: Some(WorkPattern::Hybrid),
        };
        assert_eq!(
            filter.predicates(),
            vec![
                EmployeePredicate::OfficeId("o-1".into()),
                EmployeePredicate::Department("Engineering".into()),
                EmployeePredicate::EmploymentType(EmploymentType::FullTime),
                EmployeePredicate::WorkPattern(WorkPattern::Hybrid),
            ]
        );
    }

    #[test]
    fn unknown_sort_field_falls_back_to_email() {
        let spec = SortSpec::resolve("salary,desc", EmployeeSortField::PRIMARY);
        assert_eq!(spec.field, EmployeeSortField::Email);
    }

    #[test]
    fn enum_names_parse_like_serde() {
        for kind in EmploymentType::ALL {
            assert_eq!(serde_json::to_value(kind).unwrap(), serde_json::json!(kind.as_str()));
            assert_eq!(kind.as_str().parse::<EmploymentType>(), Ok(kind));
        }
        for pattern in WorkPattern::ALL {
            assert_eq!(serde_json::to_value(pattern).unwrap(), serde_json::json!(pattern.as_str()));
            assert_eq!(pattern.as_str().parse::<WorkPattern>(), Ok(pattern));
        }
        let err = "sometimes".parse::<WorkPattern>().unwrap_err();
        assert!(err.contains("on_site"));
    }
}
