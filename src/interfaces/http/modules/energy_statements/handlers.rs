//! Energy statement REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateEnergyStatementRequest, EnergyStatementFilters, EnergyStatementListQuery,
    EnergyStatementResponse, UpdateEnergyStatementRequest,
};
use crate::application::EnergyStatementService;
use crate::interfaces::http::common::{
    ApiError, ErrorResponse, PageResponse, ValidatedJson, ValidatedQuery,
};

pub type EnergyStatementPageResponse =
    PageResponse<EnergyStatementResponse, EnergyStatementFilters>;

#[utoipa::path(
    post,
    path = "/energy-statements",
    tag = "Energy Statements",
    request_body = CreateEnergyStatementRequest,
    responses(
        (status = 201, description = "Energy statement created", body = EnergyStatementResponse),
        (status = 400, description = "Invalid data or unknown office", body = ErrorResponse)
    )
)]
pub async fn create_energy_statement(
    State(service): State<Arc<EnergyStatementService>>,
    ValidatedJson(req): ValidatedJson<CreateEnergyStatementRequest>,
) -> Result<(StatusCode, Json<EnergyStatementResponse>), ApiError> {
    let statement = service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(statement.into())))
}

#[utoipa::path(
    get,
    path = "/energy-statements",
    tag = "Energy Statements",
    params(EnergyStatementListQuery),
    responses(
        (status = 200, description = "One page of energy statements", body = PageResponse<EnergyStatementResponse, EnergyStatementFilters>),
        (status = 400, description = "Invalid paging parameters", body = ErrorResponse)
    )
)]
pub async fn list_energy_statements(
    State(service): State<Arc<EnergyStatementService>>,
    ValidatedQuery(query): ValidatedQuery<EnergyStatementListQuery>,
) -> Result<Json<EnergyStatementPageResponse>, ApiError> {
    let (params, filter) = query.into_parts();
    let page = service.list(params, filter).await?;
    Ok(Json(PageResponse::from_page(page)))
}

#[utoipa::path(
    get,
    path = "/energy-statements/{id}",
    tag = "Energy Statements",
    params(("id" = String, Path, description = "Energy statement ID")),
    responses(
        (status = 200, description = "Energy statement details", body = EnergyStatementResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn get_energy_statement(
    State(service): State<Arc<EnergyStatementService>>,
    Path(id): Path<String>,
) -> Result<Json<EnergyStatementResponse>, ApiError> {
    Ok(Json(service.find_one(&id).await?.into()))
}

#[utoipa::path(
    patch,
    path = "/energy-statements/{id}",
    tag = "Energy Statements",
    params(("id" = String, Path, description = "Energy statement ID")),
    request_body = UpdateEnergyStatementRequest,
    responses(
        (status = 200, description = "Updated energy statement", body = EnergyStatementResponse),
        (status = 400, description = "Invalid data or unknown office", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn update_energy_statement(
    State(service): State<Arc<EnergyStatementService>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateEnergyStatementRequest>,
) -> Result<Json<EnergyStatementResponse>, ApiError> {
    Ok(Json(service.update(&id, req.into()).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/energy-statements/{id}",
    tag = "Energy Statements",
    params(("id" = String, Path, description = "Energy statement ID")),
    responses(
        (status = 200, description = "Removed energy statement", body = EnergyStatementResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn delete_energy_statement(
    State(service): State<Arc<EnergyStatementService>>,
    Path(id): Path<String>,
) -> Result<Json<EnergyStatementResponse>, ApiError> {
    Ok(Json(service.remove(&id).await?.into()))
}
