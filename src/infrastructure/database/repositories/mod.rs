//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod employee_repository;
pub mod energy_statement_repository;
pub mod office_repository;
pub mod repository_provider;

pub use employee_repository::SeaOrmEmployeeRepository;
pub use energy_statement_repository::SeaOrmEnergyStatementRepository;
pub use office_repository::SeaOrmOfficeRepository;
pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::shared::errors::DomainError;

/// Map a store error onto the domain error kinds.
///
/// Constraint violations are caller mistakes; everything else means the
/// store could not serve the request.
pub(crate) fn db_err(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => DomainError::Conflict(detail),
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            DomainError::invalid(format!("referenced record does not exist ({detail})"))
        }
        _ => DomainError::StoreUnavailable(err.to_string()),
    }
}

/// Like [`db_err`], but a vanished row during an update is `NotFound`.
pub(crate) fn update_err<'a>(
    entity: &'static str,
    id: &'a str,
) -> impl FnOnce(DbErr) -> DomainError + 'a {
    move |err| match err {
        DbErr::RecordNotUpdated => DomainError::not_found(entity, id),
        other => db_err(other),
    }
}
