//! Employee REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateEmployeeRequest, EmployeeFilters, EmployeeListQuery, EmployeeResponse, UpdateEmployeeRequest,
};
use crate::application::EmployeeService;
use crate::interfaces::http::common::{
    ApiError, ErrorResponse, PageResponse, ValidatedJson, ValidatedQuery,
};

pub type EmployeePageResponse = PageResponse<EmployeeResponse, EmployeeFilters>;

#[utoipa::path(
    post,
    path = "/employees",
    tag = "Employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Invalid data", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    )
)]
pub async fn create_employee(
    State(service): State<Arc<EmployeeService>>,
    ValidatedJson(req): ValidatedJson<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    let employee = service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

#[utoipa::path(
    get,
    path = "/employees",
    tag = "Employees",
    params(EmployeeListQuery),
    responses(
        (status = 200, description = "One page of employees", body = PageResponse<EmployeeResponse, EmployeeFilters>),
        (status = 400, description = "Invalid paging parameters", body = ErrorResponse)
    )
)]
pub async fn list_employees(
    State(service): State<Arc<EmployeeService>>,
    ValidatedQuery(query): ValidatedQuery<EmployeeListQuery>,
) -> Result<Json<EmployeePageResponse>, ApiError> {
    let (params, filter) = query.into_parts();
    let page = service.list(params, filter).await?;
    Ok(Json(PageResponse::from_page(page)))
}

#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = String, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee details", body = EmployeeResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn get_employee(
    State(service): State<Arc<EmployeeService>>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    Ok(Json(service.find_one(&id).await?.into()))
}

#[utoipa::path(
    patch,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = String, Path, description = "Employee ID")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Updated employee", body = EmployeeResponse),
        (status = 400, description = "Invalid data", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    )
)]
pub async fn update_employee(
    State(service): State<Arc<EmployeeService>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    Ok(Json(service.update(&id, req.into()).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = String, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Removed employee", body = EmployeeResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn delete_employee(
    State(service): State<Arc<EmployeeService>>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    Ok(Json(service.remove(&id).await?.into()))
}
