//! Validated query-string extractor
//!
//! Same contract as [`ValidatedJson`](super::ValidatedJson) for
//! `axum::extract::Query`: bad types and failed rules both yield a 400
//! error envelope.

use std::fmt::Display;
use std::str::FromStr;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use validator::Validate;

use super::validated_json::describe_validation_errors;
use super::ApiError;

pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::bad_request(format!("Invalid query: {}", rejection.body_text()))
            })?;

        value
            .validate()
            .map_err(|errors| ApiError::bad_request(describe_validation_errors(&errors)))?;

        Ok(ValidatedQuery(value))
    }
}

/// Query filter value where `?field=` means the same as leaving it out.
///
/// Use with `#[serde(default, deserialize_with = "empty_as_none")]`.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct Paging {
        #[validate(range(min = 0))]
        page: Option<i64>,
        #[validate(range(min = 1, max = 100))]
        size: Option<i64>,
        #[serde(default, deserialize_with = "empty_as_none")]
        year: Option<i32>,
    }

    async fn handler(ValidatedQuery(paging): ValidatedQuery<Paging>) -> String {
        format!("{:?}/{:?}/{:?}", paging.page, paging.size, paging.year)
    }

    async fn status_of(uri: &str) -> StatusCode {
        Router::new()
            .route("/items", get(handler))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn absent_and_in_range_values_pass() {
        assert_eq!(status_of("/items").await, StatusCode::OK);
        assert_eq!(status_of("/items?page=3&size=100").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn out_of_range_values_are_400() {
        assert_eq!(status_of("/items?size=0").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("/items?size=101").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("/items?page=-1").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_numeric_values_are_400() {
        assert_eq!(status_of("/items?page=abc").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("/items?year=abc").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_filter_value_counts_as_absent() {
        assert_eq!(status_of("/items?year=").await, StatusCode::OK);
        assert_eq!(status_of("/items?year=2024").await, StatusCode::OK);
    }
}
