//! Office REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateOfficeRequest, OfficeFilters, OfficeListQuery, OfficeResponse, UpdateOfficeRequest,
};
use crate::application::OfficeService;
use crate::interfaces::http::common::{
    ApiError, ErrorResponse, PageResponse, ValidatedJson, ValidatedQuery,
};

pub type OfficePageResponse = PageResponse<OfficeResponse, OfficeFilters>;

#[utoipa::path(
    post,
    path = "/offices",
    tag = "Offices",
    request_body = CreateOfficeRequest,
    responses(
        (status = 201, description = "Office created", body = OfficeResponse),
        (status = 400, description = "Invalid data", body = ErrorResponse),
        (status = 409, description = "Code already in use", body = ErrorResponse)
    )
)]
pub async fn create_office(
    State(service): State<Arc<OfficeService>>,
    ValidatedJson(req): ValidatedJson<CreateOfficeRequest>,
) -> Result<(StatusCode, Json<OfficeResponse>), ApiError> {
    let office = service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(office.into())))
}

#[utoipa::path(
    get,
    path = "/offices",
    tag = "Offices",
    params(OfficeListQuery),
    responses(
        (status = 200, description = "One page of offices", body = PageResponse<OfficeResponse, OfficeFilters>),
        (status = 400, description = "Invalid paging parameters", body = ErrorResponse)
    )
)]
pub async fn list_offices(
    State(service): State<Arc<OfficeService>>,
    ValidatedQuery(query): ValidatedQuery<OfficeListQuery>,
) -> Result<Json<OfficePageResponse>, ApiError> {
    let (params, filter) = query.into_parts();
    let page = service.list(params, filter).await?;
    Ok(Json(PageResponse::from_page(page)))
}

#[utoipa::path(
    get,
    path = "/offices/{id}",
    tag = "Offices",
    params(("id" = String, Path, description = "Office ID")),
    responses(
        (status = 200, description = "Office details", body = OfficeResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn get_office(
    State(service): State<Arc<OfficeService>>,
    Path(id): Path<String>,
) -> Result<Json<OfficeResponse>, ApiError> {
    Ok(Json(service.find_one(&id).await?.into()))
}

#[utoipa::path(
    patch,
    path = "/offices/{id}",
    tag = "Offices",
    params(("id" = String, Path, description = "Office ID")),
    request_body = UpdateOfficeRequest,
    responses(
        (status = 200, description = "Updated office", body = OfficeResponse),
        (status = 400, description = "Invalid data", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 409, description = "Code already in use", body = ErrorResponse)
    )
)]
pub async fn update_office(
    State(service): State<Arc<OfficeService>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateOfficeRequest>,
) -> Result<Json<OfficeResponse>, ApiError> {
    Ok(Json(service.update(&id, req.into()).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/offices/{id}",
    tag = "Offices",
    params(("id" = String, Path, description = "Office ID")),
    responses(
        (status = 200, description = "Removed office", body = OfficeResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn delete_office(
    State(service): State<Arc<OfficeService>>,
    Path(id): Path<String>,
) -> Result<Json<OfficeResponse>, ApiError> {
    Ok(Json(service.remove(&id).await?.into()))
}
