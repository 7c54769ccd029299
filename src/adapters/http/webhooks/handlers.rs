//! HTTP handlers for webhook endpoints.
//!
//! The platform is fixed per route at registration time, so each handler
//! takes it as a plain argument ahead of the extractors.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::application::handlers::webhook::{ReceiveUpdateCommand, VerifySubscriptionQuery};
use crate::domain::webhook::{Platform, SubscriptionChallenge, WebhookError};

use super::super::state::AppState;

/// GET /{platform} - Subscription verification handshake
pub async fn verify_subscription(
    platform: Platform,
    State(state): State<AppState>,
    Query(challenge): Query<SubscriptionChallenge>,
) -> Result<impl IntoResponse, WebhookApiError> {
    let result = state
        .verify_subscription_handler()
        .handle(VerifySubscriptionQuery {
            platform,
            challenge,
        })?;

    Ok((StatusCode::OK, result.challenge))
}

/// POST /{platform} - Receive a webhook delivery
pub async fn receive_update(
    platform: Platform,
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, WebhookApiError> {
    let signature = headers
        .get(state.signature_header())
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let cmd = ReceiveUpdateCommand {
        platform,
        payload: body.to_vec(),
        signature,
    };

    state.receive_update_handler().handle(cmd).await?;

    Ok(status_reply(StatusCode::OK))
}

/// Status code with its canonical reason phrase as the body.
fn status_reply(status: StatusCode) -> Response {
    (status, status.canonical_reason().unwrap_or_default()).into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts webhook errors to HTTP responses.
pub struct WebhookApiError(WebhookError);

impl From<WebhookError> for WebhookApiError {
    fn from(err: WebhookError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> Response {
        if let WebhookError::Storage(detail) = &self.0 {
            tracing::error!(error = %detail, "Update log failure");
        }
        status_reply(self.0.status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_body_is_reason_phrase() {
        let response = status_reply(StatusCode::UNAUTHORIZED);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn signature_failures_map_to_unauthorized() {
        let response = WebhookApiError::from(WebhookError::InvalidSignature).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn verification_failure_maps_to_bad_request() {
        let response = WebhookApiError::from(WebhookError::VerificationFailed).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failure_maps_to_internal_error() {
        let response =
            WebhookApiError::from(WebhookError::Storage("lock".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
