//! Values produced by a successful code exchange.

use secrecy::{ExposeSecret, SecretString};

/// Access token and the account it belongs to. Never persisted.
#[derive(Debug, Clone)]
pub struct TokenGrant {
    pub access_token: SecretString,
    pub user_id: String,
    pub permissions: Vec<String>,
}

impl TokenGrant {
    pub fn new(access_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::new(access_token.into()),
            user_id: user_id.into(),
            permissions: Vec::new(),
        }
    }

    pub fn with_permissions(mut self, permissions: Vec<String>) -> Self {
        self.permissions = permissions;
        self
    }
}

/// Basic profile fetched with a fresh access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
}

/// Outcome of a completed callback.
#[derive(Debug, Clone)]
pub struct AuthorizedAccount {
    pub grant: TokenGrant,
    pub profile: Option<UserProfile>,
}

impl AuthorizedAccount {
    /// User id to report: the profile's id when one was fetched.
    pub fn user_id(&self) -> &str {
        self.profile
            .as_ref()
            .map(|p| p.id.as_str())
            .unwrap_or(&self.grant.user_id)
    }

    /// Plain-text summary sent back to the browser.
    pub fn summary(&self) -> String {
        format!(
            "Access Token: {}, User ID: {}",
            self.grant.access_token.expose_secret(),
            self.user_id()
        )
    }
}
