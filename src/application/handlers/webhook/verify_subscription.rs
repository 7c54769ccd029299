//! VerifySubscriptionHandler - Query handler for the webhook setup handshake.

use secrecy::{ExposeSecret, SecretString};

use crate::domain::webhook::{Platform, SubscriptionChallenge, WebhookError};

/// Query carrying a platform's verification request.
#[derive(Debug, Clone)]
pub struct VerifySubscriptionQuery {
    pub platform: Platform,
    pub challenge: SubscriptionChallenge,
}

/// Result of a successful handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifySubscriptionResult {
    /// Value to echo back, byte for byte.
    pub challenge: String,
}

/// Handler comparing verification requests against the configured token.
pub struct VerifySubscriptionHandler {
    verify_token: SecretString,
}

impl VerifySubscriptionHandler {
    pub fn new(verify_token: SecretString) -> Self {
        Self { verify_token }
    }

    pub fn handle(
        &self,
        query: VerifySubscriptionQuery,
    ) -> Result<VerifySubscriptionResult, WebhookError> {
        match query.challenge.verify(self.verify_token.expose_secret()) {
            Ok(challenge) => {
                tracing::info!(platform = %query.platform, "Webhook subscription verified");
                Ok(VerifySubscriptionResult { challenge })
            }
            Err(err) => {
                tracing::warn!(
                    platform = %query.platform,
                    mode = query.challenge.mode.as_deref().unwrap_or(""),
                    "Webhook subscription verification rejected"
                );
                Err(err)
            }
        }
    }
}
