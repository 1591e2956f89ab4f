//! Per-request HTTP metrics
//!
//! Every request is counted under its matched route template
//! (`/offices/{id}`, never the concrete id) and the record resource it
//! addresses, so label cardinality stays bounded.

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};

/// `route` label of requests that matched no route.
const UNMATCHED_ROUTE: &str = "unmatched";

/// Record resource addressed by a route template.
fn resource_of(route: &str) -> &'static str {
    match route.trim_start_matches('/').split('/').next() {
        Some("offices") => "office",
        Some("employees") => "employee",
        Some("energy-statements") => "energy_statement",
        Some("health") => "health",
        Some("metrics") => "metrics",
        Some("docs") | Some("api-doc") => "docs",
        _ => "other",
    }
}

/// Records, labelled by `method`, `route`, `resource`:
///
/// - `http_requests_total` (plus `status`)
/// - `http_request_duration_seconds`
/// - `http_request_errors_total` for 4xx/5xx, with the status class
pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or(UNMATCHED_ROUTE, |mp| mp.as_str())
        .to_owned();
    let resource = resource_of(&route);

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed().as_secs_f64();

    let status = response.status();

    metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "resource" => resource,
        "status" => status.as_u16().to_string()
    )
    .increment(1);
    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method.clone(),
        "route" => route.clone(),
        "resource" => resource
    )
    .record(duration);

    if status.is_client_error() || status.is_server_error() {
        let class = if status.is_server_error() { "5xx" } else { "4xx" };
        metrics::counter!(
            "http_request_errors_total",
            "method" => method,
            "route" => route,
            "resource" => resource,
            "class" => class
        )
        .increment(1);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_resources() {
        assert_eq!(resource_of("/offices"), "office");
        assert_eq!(resource_of("/offices/{id}"), "office");
        assert_eq!(resource_of("/employees/{id}"), "employee");
        assert_eq!(resource_of("/energy-statements"), "energy_statement");
        assert_eq!(resource_of("/health"), "health");
        assert_eq!(resource_of(UNMATCHED_ROUTE), "other");
    }
}
