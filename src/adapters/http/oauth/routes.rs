//! Axum router configuration for OAuth endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::instagram_callback;

/// Create the OAuth router.
///
/// # Routes
/// - `GET /auth/instagram/callback` - Authorization-code redirect target
pub fn oauth_routes() -> Router<AppState> {
    Router::new().route("/auth/instagram/callback", get(instagram_callback))
}
