//! HTTP handlers for the status page and health probe.

use axum::extract::{Json, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse};
use serde::Serialize;

use crate::application::handlers::webhook::ListUpdatesQuery;
use crate::domain::webhook::WebhookError;

use super::super::state::AppState;
use super::super::webhooks::WebhookApiError;

/// GET / - Received updates as preformatted JSON
pub async fn list_updates(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, WebhookApiError> {
    tracing::debug!(%uri, "Status page requested");

    let result = state
        .list_updates_handler()
        .handle(ListUpdatesQuery::default())
        .await?;

    let json = serde_json::to_string_pretty(&result.payloads())
        .map_err(|e| WebhookError::Storage(e.to_string()))?;

    Ok(Html(format!("<pre>{}</pre>", json)))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub updates: usize,
}

/// GET /health - Liveness probe
pub async fn health(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, WebhookApiError> {
    let updates = state.update_log.len().await?;
    Ok(Json(HealthResponse {
        status: "ok",
        updates,
    }))
}
