//! Instagram OAuth adapter.
//!
//! Implements `OAuthProvider` against the Instagram API: a form-encoded
//! `authorization_code` exchange and a Graph `/me` profile lookup.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::oauth::{OAuthError, TokenGrant, UserProfile};
use crate::ports::OAuthProvider;

use super::api_types::{extract_error_message, ProfileResponse, TokenResponse};

pub const DEFAULT_API_BASE_URL: &str = "https://api.instagram.com";
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.instagram.com";

/// Client registration and endpoints for the Instagram app.
#[derive(Debug, Clone)]
pub struct InstagramOAuthConfig {
    pub app_id: String,
    pub app_secret: SecretString,
    pub redirect_uri: String,
    pub api_base_url: String,
    pub graph_base_url: String,
}

impl InstagramOAuthConfig {
    pub fn new(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: SecretString::new(app_secret.into()),
            redirect_uri: redirect_uri.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            graph_base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
        }
    }

    /// Point both endpoints at another host (for testing).
    pub fn with_base_urls(
        mut self,
        api_base_url: impl Into<String>,
        graph_base_url: impl Into<String>,
    ) -> Self {
        self.api_base_url = api_base_url.into();
        self.graph_base_url = graph_base_url.into();
        self
    }

    fn token_url(&self) -> String {
        format!(
            "{}/oauth/access_token",
            self.api_base_url.trim_end_matches('/')
        )
    }

    fn profile_url(&self) -> String {
        format!("{}/me", self.graph_base_url.trim_end_matches('/'))
    }
}

pub struct InstagramOAuthAdapter {
    config: InstagramOAuthConfig,
    http_client: reqwest::Client,
}

impl InstagramOAuthAdapter {
    /// Creates the adapter with a client that gives up after `timeout`.
    pub fn new(config: InstagramOAuthConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            config,
            http_client,
        })
    }
}

fn network_error(err: reqwest::Error) -> OAuthError {
    if err.is_timeout() {
        tracing::error!(error = %err, "Instagram request timed out");
    } else {
        tracing::error!(error = %err, "Instagram request failed");
    }
    OAuthError::Network(err.to_string())
}

async fn upstream_error(response: reqwest::Response, operation: &str) -> OAuthError {
    let status = response.status().as_u16();
    let error_text = response.text().await.unwrap_or_default();
    tracing::error!(status, error = %error_text, "Instagram {} failed", operation);
    OAuthError::Upstream {
        status,
        message: extract_error_message(&error_text),
    }
}

#[async_trait]
impl OAuthProvider for InstagramOAuthAdapter {
    async fn exchange_code(&self, code: &str) -> Result<TokenGrant, OAuthError> {
        let params = [
            ("client_id", self.config.app_id.as_str()),
            ("client_secret", self.config.app_secret.expose_secret().as_str()),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("code", code),
        ];

        let response = self
            .http_client
            .post(self.config.token_url())
            .form(&params)
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(upstream_error(response, "token exchange").await);
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse Instagram token response");
            OAuthError::InvalidResponse(e.to_string())
        })?;

        let payload = token
            .into_payload()
            .ok_or_else(|| OAuthError::InvalidResponse("empty token list".to_string()))?;

        Ok(
            TokenGrant::new(payload.access_token, payload.user_id.to_string())
                .with_permissions(payload.permissions.into_vec()),
        )
    }

    async fn fetch_profile(&self, access_token: &SecretString) -> Result<UserProfile, OAuthError> {
        let response = self
            .http_client
            .get(self.config.profile_url())
            .query(&[
                ("fields", "id,username"),
                ("access_token", access_token.expose_secret().as_str()),
            ])
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(upstream_error(response, "profile fetch").await);
        }

        let profile: ProfileResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse Instagram profile response");
            OAuthError::InvalidResponse(e.to_string())
        })?;

        Ok(UserProfile {
            id: profile.id.to_string(),
            username: profile.username,
        })
    }
}
