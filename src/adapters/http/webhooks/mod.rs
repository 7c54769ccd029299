//! HTTP adapter for webhook endpoints.
//!
//! One route per platform:
//! - `GET /{platform}` - Subscription verification (`hub.*` query)
//! - `POST /{platform}` - Delivery, signature checked per policy

mod handlers;
mod routes;

pub use handlers::WebhookApiError;
pub use routes::webhook_routes;
