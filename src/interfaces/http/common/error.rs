//! Uniform error envelope
//!
//! Every failure leaves the API as
//! `{"statusCode", "timestamp", "path", "message"}`. Handlers and extractors
//! return [`ApiError`]; [`error_envelope_middleware`] fills in the request
//! path, which is not known where the error is raised.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::shared::errors::DomainError;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub timestamp: DateTime<Utc>,
    pub path: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            timestamp: Utc::now(),
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Error returned by handlers and extractors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match &err {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

/// Marker left on error responses for [`error_envelope_middleware`].
#[derive(Debug, Clone)]
struct PendingEnvelope(String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, "{}", self.message);
        } else {
            warn!(status = %self.status, "{}", self.message);
        }
        let body = ErrorResponse::new(self.status, "", self.message.clone());
        let mut response = (self.status, Json(body)).into_response();
        response
            .extensions_mut()
            .insert(PendingEnvelope(self.message));
        response
    }
}

/// Re-renders [`ApiError`] responses with the path of the failed request.
pub async fn error_envelope_middleware(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;
    match response.extensions_mut().remove::<PendingEnvelope>() {
        Some(PendingEnvelope(message)) => {
            let status = response.status();
            (status, Json(ErrorResponse::new(status, path, message))).into_response()
        }
        None => response,
    }
}

/// Router fallback for unknown routes.
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::routing::get;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    #[test]
    fn domain_kinds_map_to_statuses() {
        let cases = [
            (DomainError::not_found("Office", "x"), StatusCode::NOT_FOUND),
            (DomainError::invalid("size"), StatusCode::BAD_REQUEST),
            (DomainError::Conflict("code".into()), StatusCode::CONFLICT),
            (
                DomainError::StoreUnavailable("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[tokio::test]
    async fn envelope_carries_the_request_path() {
        async fn failing() -> Result<(), ApiError> {
            Err(DomainError::not_found("Office", "abc").into())
        }
        let app = Router::new()
            .route("/offices/{id}", get(failing))
            .fallback(route_not_found)
            .layer(middleware::from_fn(error_envelope_middleware));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/offices/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["path"], "/offices/abc");
        assert_eq!(json["message"], "Office with ID abc not found");
        assert!(json["timestamp"].is_string());

        let response = app
            .oneshot(Request::builder().uri("/nowhere").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["path"], "/nowhere");
    }
}
