//! HTTP adapters - axum endpoints.
//!
//! Each area has its own module; `app_router` merges them behind shared
//! tracing and timeout layers.

pub mod oauth;
pub mod router;
pub mod state;
pub mod status;
pub mod webhooks;

pub use oauth::{oauth_routes, OAuthApiError};
pub use router::app_router;
pub use state::AppState;
pub use status::{status_routes, HealthResponse};
pub use webhooks::{webhook_routes, WebhookApiError};
