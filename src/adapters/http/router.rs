//! Top-level router assembly.

use std::time::Duration;

use axum::http::Request;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::oauth::oauth_routes;
use super::state::AppState;
use super::status::status_routes;
use super::webhooks::webhook_routes;

/// Create the complete application router.
///
/// Requests that take longer than `request_timeout` are answered with
/// `408 Request Timeout`.
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        tracing::info_span!(
            "http.request",
            method = %request.method(),
            path = %request.uri().path(),
        )
    });

    Router::new()
        .merge(status_routes())
        .merge(webhook_routes())
        .merge(oauth_routes())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(trace_layer)
        .with_state(state)
}
