//! HTTP handlers for the OAuth redirect.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::oauth::ExchangeAuthorizationCodeCommand;
use crate::domain::oauth::{CallbackParams, OAuthError};

use super::super::state::AppState;

/// GET /auth/instagram/callback - Exchange an authorization code
pub async fn instagram_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, OAuthApiError> {
    let account = state
        .exchange_code_handler()
        .handle(ExchangeAuthorizationCodeCommand { params })
        .await?;

    Ok((StatusCode::OK, account.summary()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type rendering OAuth failures as plain text.
pub struct OAuthApiError(OAuthError);

impl From<OAuthError> for OAuthApiError {
    fn from(err: OAuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for OAuthApiError {
    fn into_response(self) -> Response {
        (self.0.status_code(), self.0.response_body()).into_response()
    }
}
