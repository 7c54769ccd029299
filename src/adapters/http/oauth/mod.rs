//! HTTP adapter for the Instagram OAuth redirect.

mod handlers;
mod routes;

pub use handlers::OAuthApiError;
pub use routes::oauth_routes;
