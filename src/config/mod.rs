//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `META_WEBHOOKS` prefix and nested values use double underscores as separators.
//!
//! The unprefixed names used by Heroku-style deployments (`PORT`, `APP_SECRET`,
//! `TOKEN`, `INSTAGRAM_APP_ID`, `INSTAGRAM_APP_SECRET`, `REDIRECT_URI`) are
//! honoured as fallbacks; a prefixed variable always wins.
//!
//! # Example
//!
//! ```no_run
//! use meta_webhooks::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod instagram;
mod server;
mod webhook;

pub use error::{ConfigError, ValidationError};
pub use instagram::InstagramConfig;
pub use server::{Environment, ServerConfig};
pub use webhook::WebhookConfig;

use serde::Deserialize;

/// Unprefixed environment variables and the keys they fall back to.
const LEGACY_ENV_KEYS: [(&str, &str); 6] = [
    ("PORT", "server.port"),
    ("APP_SECRET", "webhook.app_secret"),
    ("TOKEN", "webhook.verify_token"),
    ("INSTAGRAM_APP_ID", "instagram.app_id"),
    ("INSTAGRAM_APP_SECRET", "instagram.app_secret"),
    ("REDIRECT_URI", "instagram.redirect_uri"),
];

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Webhook receiver configuration (secret, verify token, policy)
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Instagram OAuth configuration
    #[serde(default)]
    pub instagram: InstagramConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Applies unprefixed legacy variables as defaults
    /// 3. Reads environment variables with `META_WEBHOOKS` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `META_WEBHOOKS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `META_WEBHOOKS__WEBHOOK__APP_SECRET=...` -> `webhook.app_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        for (var, key) in LEGACY_ENV_KEYS {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_default(key, value)?;
            }
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("META_WEBHOOKS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let is_production = self.is_production();
        self.server.validate()?;
        self.webhook.validate(is_production)?;
        self.instagram.validate(is_production)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
