//! Instagram API adapter.
//!
//! Implements the `OAuthProvider` port for Instagram Login:
//! - Authorization-code exchange (`POST /oauth/access_token`)
//! - Profile lookup (`GET /me?fields=id,username`)
//!
//! # Security
//!
//! The app secret and issued access tokens are held as
//! `secrecy::SecretString` and never logged.

mod api_types;
mod oauth_adapter;

pub use api_types::extract_error_message;
pub use oauth_adapter::{
    InstagramOAuthAdapter, InstagramOAuthConfig, DEFAULT_API_BASE_URL, DEFAULT_GRAPH_BASE_URL,
};
