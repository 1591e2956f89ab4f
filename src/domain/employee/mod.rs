//! Employee aggregate

pub mod model;
pub mod repository;

pub use model::{
    Employee, EmployeeFilter, EmployeePatch, EmployeePredicate, EmployeeSortField,
    EmploymentType, NewEmployee, WorkPattern,
};
pub use repository::EmployeeRepository;
