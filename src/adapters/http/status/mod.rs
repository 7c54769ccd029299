//! HTTP adapter for the status page.
//!
//! - `GET /` - Received updates, newest first, in a `<pre>` block
//! - `GET /health` - Liveness probe with the current log size

mod handlers;

use axum::{routing::get, Router};

use super::state::AppState;

pub use handlers::HealthResponse;

/// Create the status router.
pub fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_updates))
        .route("/health", get(handlers::health))
}
