//! Webhook configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::webhook::{SignatureAlgorithm, SignaturePolicy};

use super::error::ValidationError;

/// Webhook receiver configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// App secret used to sign deliveries
    #[serde(default)]
    pub app_secret: Option<SecretString>,

    /// Token echoed by the subscription handshake
    #[serde(default = "default_verify_token")]
    pub verify_token: SecretString,

    /// Which delivery routes require a signature
    #[serde(default)]
    pub signature_policy: SignaturePolicy,

    /// Signature header to check (`sha1` or `sha256`)
    #[serde(default)]
    pub signature_algorithm: SignatureAlgorithm,

    /// Maximum number of retained updates
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
}

impl WebhookConfig {
    /// The app secret, if one is set and non-empty
    pub fn app_secret(&self) -> Option<&SecretString> {
        self.app_secret
            .as_ref()
            .filter(|s| !s.expose_secret().is_empty())
    }

    /// Validate webhook configuration
    pub fn validate(&self, is_production: bool) -> Result<(), ValidationError> {
        if self.verify_token.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("WEBHOOK__VERIFY_TOKEN"));
        }
        if self.log_capacity == 0 {
            return Err(ValidationError::InvalidLogCapacity);
        }
        if is_production && self.app_secret().is_none() {
            return Err(ValidationError::MissingRequired("WEBHOOK__APP_SECRET"));
        }
        Ok(())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            app_secret: None,
            verify_token: default_verify_token(),
            signature_policy: SignaturePolicy::default(),
            signature_algorithm: SignatureAlgorithm::default(),
            log_capacity: default_log_capacity(),
        }
    }
}

fn default_verify_token() -> SecretString {
    SecretString::new("token".to_string())
}

fn default_log_capacity() -> usize {
    1000
}
