//! ExchangeAuthorizationCodeHandler - Command handler for the OAuth redirect.
//!
//! One pass per callback: classify the redirect, exchange the code, optionally
//! fetch the profile. Any failure ends the callback; nothing is retried or
//! kept between invocations.

use std::sync::Arc;

use crate::domain::oauth::{AuthorizedAccount, CallbackOutcome, CallbackParams, OAuthError};
use crate::ports::OAuthProvider;

/// Command carrying the redirect's query parameters.
#[derive(Debug, Clone)]
pub struct ExchangeAuthorizationCodeCommand {
    pub params: CallbackParams,
}

pub struct ExchangeAuthorizationCodeHandler {
    provider: Arc<dyn OAuthProvider>,
    fetch_profile: bool,
}

impl ExchangeAuthorizationCodeHandler {
    pub fn new(provider: Arc<dyn OAuthProvider>, fetch_profile: bool) -> Self {
        Self {
            provider,
            fetch_profile,
        }
    }

    pub async fn handle(
        &self,
        cmd: ExchangeAuthorizationCodeCommand,
    ) -> Result<AuthorizedAccount, OAuthError> {
        // 1. Entry
        let code = match cmd.params.classify()? {
            CallbackOutcome::Authorized { code } => code,
            CallbackOutcome::Denied {
                error,
                reason,
                description,
            } => {
                tracing::warn!(
                    error = %error,
                    reason = reason.as_deref().unwrap_or(""),
                    "Authorization denied by provider"
                );
                return Err(OAuthError::Denied { error, description });
            }
        };

        // 2. Exchange
        let grant = self.provider.exchange_code(&code).await.map_err(|err| {
            tracing::error!(error = %err, "Authorization code exchange failed");
            err
        })?;

        tracing::info!(user_id = %grant.user_id, "Authorization code exchanged");

        // 3. Profile
        let profile = if self.fetch_profile {
            let profile = self
                .provider
                .fetch_profile(&grant.access_token)
                .await
                .map_err(|err| {
                    tracing::error!(error = %err, "Profile fetch failed");
                    err
                })?;
            tracing::info!(user_id = %profile.id, username = %profile.username, "Profile fetched");
            Some(profile)
        } else {
            None
        };

        Ok(AuthorizedAccount { grant, profile })
    }
}
