//! OAuthProvider port - authorization-code exchange and profile lookup.
//!
//! Implementations are stateless: nothing is cached or persisted between
//! calls, and no call is retried.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::oauth::{OAuthError, TokenGrant, UserProfile};

#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Exchanges an authorization code for an access token.
    ///
    /// # Errors
    ///
    /// - `Upstream` - the token endpoint answered with a non-success status
    /// - `Network` - the token endpoint could not be reached
    /// - `InvalidResponse` - the success body could not be parsed
    async fn exchange_code(&self, code: &str) -> Result<TokenGrant, OAuthError>;

    /// Fetches the basic profile (`id`, `username`) for an access token.
    async fn fetch_profile(&self, access_token: &SecretString) -> Result<UserProfile, OAuthError>;
}
