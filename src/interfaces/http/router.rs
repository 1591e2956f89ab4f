//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    extract::FromRef,
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{EmployeeService, EnergyStatementService, OfficeService, Services};

use super::common::{
    error_envelope_middleware, method_not_allowed, route_not_found, ErrorResponse, PageResponse,
    SortDto,
};
use super::modules::health::{self, HealthState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::request_id::request_id_middleware;
use super::modules::{employees, energy_statements, offices};

/// Unified router state. Handlers keep their own `State<T>` extractor and
/// axum derives it via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub health: HealthState,
}

impl FromRef<AppState> for Arc<OfficeService> {
    fn from_ref(s: &AppState) -> Self {
        Arc::clone(&s.services.offices)
    }
}

impl FromRef<AppState> for Arc<EmployeeService> {
    fn from_ref(s: &AppState) -> Self {
        Arc::clone(&s.services.employees)
    }
}

impl FromRef<AppState> for Arc<EnergyStatementService> {
    fn from_ref(s: &AppState) -> Self {
        Arc::clone(&s.services.energy_statements)
    }
}

impl FromRef<AppState> for HealthState {
    fn from_ref(s: &AppState) -> Self {
        s.health.clone()
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Offices
        offices::create_office,
        offices::list_offices,
        offices::get_office,
        offices::update_office,
        offices::delete_office,
        // Employees
        employees::create_employee,
        employees::list_employees,
        employees::get_employee,
        employees::update_employee,
        employees::delete_employee,
        // Energy statements
        energy_statements::create_energy_statement,
        energy_statements::list_energy_statements,
        energy_statements::get_energy_statement,
        energy_statements::update_energy_statement,
        energy_statements::delete_energy_statement,
    ),
    components(
        schemas(
            // Common
            ErrorResponse,
            SortDto,
            health::HealthResponse,
            health::ComponentHealth,
            // Offices
            offices::OfficeResponse,
            offices::CreateOfficeRequest,
            offices::UpdateOfficeRequest,
            offices::OfficeFilters,
            PageResponse<offices::OfficeResponse, offices::OfficeFilters>,
            // Employees
            employees::EmployeeResponse,
            employees::CreateEmployeeRequest,
            employees::UpdateEmployeeRequest,
            employees::EmployeeFilters,
            PageResponse<employees::EmployeeResponse, employees::EmployeeFilters>,
            // Energy statements
            energy_statements::EnergyStatementResponse,
            energy_statements::CreateEnergyStatementRequest,
            energy_statements::UpdateEnergyStatementRequest,
            energy_statements::EnergyStatementFilters,
            PageResponse<
                energy_statements::EnergyStatementResponse,
                energy_statements::EnergyStatementFilters,
            >,
        )
    ),
    tags(
        (name = "Health", description = "Service and database health"),
        (name = "Offices", description = "Offices and their grid regions"),
        (name = "Employees", description = "Employees, their work pattern and office"),
        (name = "Energy Statements", description = "Monthly energy consumption per office"),
    ),
    info(
        title = "Office Energy Records API",
        version = "1.0.0",
        description = "Paginated CRUD API for offices, employees and monthly energy statements",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `/metrics` is served only when a Prometheus recorder handle is given.
pub fn create_api_router(
    services: Services,
    db: DatabaseConnection,
    metrics_handle: Option<PrometheusHandle>,
) -> Router {
    let state = AppState {
        services,
        health: HealthState::new(db),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // Offices
        .route(
            "/offices",
            get(offices::list_offices).post(offices::create_office),
        )
        .route(
            "/offices/{id}",
            get(offices::get_office)
                .patch(offices::update_office)
                .delete(offices::delete_office),
        )
        // Employees
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/employees/{id}",
            get(employees::get_employee)
                .patch(employees::update_employee)
                .delete(employees::delete_employee),
        )
        // Energy statements
        .route(
            "/energy-statements",
            get(energy_statements::list_energy_statements)
                .post(energy_statements::create_energy_statement),
        )
        .route(
            "/energy-statements/{id}",
            get(energy_statements::get_energy_statement)
                .patch(energy_statements::update_energy_statement)
                .delete(energy_statements::delete_energy_statement),
        );

    if let Some(handle) = metrics_handle {
        router = router.merge(
            Router::new()
                .route("/metrics", get(prometheus_metrics))
                .with_state(MetricsState { handle }),
        );
    }

    router
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Middleware, innermost first
        .layer(middleware::from_fn(error_envelope_middleware))
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
