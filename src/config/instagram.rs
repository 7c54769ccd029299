//! Instagram OAuth configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use crate::adapters::instagram::{
    InstagramOAuthConfig, DEFAULT_API_BASE_URL, DEFAULT_GRAPH_BASE_URL,
};

use super::error::ValidationError;

/// Instagram app registration and endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct InstagramConfig {
    /// Instagram app (client) id
    #[serde(default)]
    pub app_id: String,

    /// Instagram app secret
    #[serde(default = "empty_secret")]
    pub app_secret: SecretString,

    /// Redirect URI registered with the app
    #[serde(default)]
    pub redirect_uri: String,

    /// Base URL of the token endpoint host
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL of the Graph API host
    #[serde(default = "default_graph_base_url")]
    pub graph_base_url: String,

    /// Fetch `id,username` after a successful exchange
    #[serde(default = "default_fetch_profile")]
    pub fetch_profile: bool,

    /// Outbound request timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,
}

impl InstagramConfig {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Adapter configuration built from these settings
    pub fn oauth_config(&self) -> InstagramOAuthConfig {
        InstagramOAuthConfig::new(
            self.app_id.clone(),
            self.app_secret.expose_secret().clone(),
            self.redirect_uri.clone(),
        )
        .with_base_urls(self.api_base_url.clone(), self.graph_base_url.clone())
    }

    /// Validate Instagram configuration
    pub fn validate(&self, is_production: bool) -> Result<(), ValidationError> {
        if self.http_timeout_secs == 0 || self.http_timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }

        for (name, url) in [
            ("INSTAGRAM__API_BASE_URL", &self.api_base_url),
            ("INSTAGRAM__GRAPH_BASE_URL", &self.graph_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidUrl(name));
            }
            if is_production && !url.starts_with("https://") {
                return Err(ValidationError::UrlMustBeHttps(name));
            }
        }

        if is_production {
            if self.app_id.is_empty() {
                return Err(ValidationError::MissingRequired("INSTAGRAM__APP_ID"));
            }
            if self.app_secret.expose_secret().is_empty() {
                return Err(ValidationError::MissingRequired("INSTAGRAM__APP_SECRET"));
            }
            if self.redirect_uri.is_empty() {
                return Err(ValidationError::MissingRequired("INSTAGRAM__REDIRECT_URI"));
            }
        }

        Ok(())
    }
}

impl Default for InstagramConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_secret: empty_secret(),
            redirect_uri: String::new(),
            api_base_url: default_api_base_url(),
            graph_base_url: default_graph_base_url(),
            fetch_profile: default_fetch_profile(),
            http_timeout_secs: default_http_timeout(),
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_graph_base_url() -> String {
    DEFAULT_GRAPH_BASE_URL.to_string()
}

fn default_fetch_profile() -> bool {
    true
}

fn default_http_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn production_ready() -> InstagramConfig {
        InstagramConfig {
            app_id: "123".to_string(),
            app_secret: SecretString::new("abc".to_string()),
            redirect_uri: "https://example.com/auth/instagram/callback".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = InstagramConfig::default();
        assert_eq!(config.api_base_url, "https://api.instagram.com");
        assert_eq!(config.graph_base_url, "https://graph.instagram.com");
        assert!(config.fetch_profile);
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
        assert!(config.validate(false).is_ok());
    }

    #[test]
    fn test_production_requires_credentials() {
        assert!(matches!(
            InstagramConfig::default().validate(true),
            Err(ValidationError::MissingRequired("INSTAGRAM__APP_ID"))
        ));
        assert!(production_ready().validate(true).is_ok());
    }

    #[test]
    fn test_production_requires_https() {
        let config = InstagramConfig {
            api_base_url: "http://localhost:9000".to_string(),
            ..production_ready()
        };
        assert!(config.validate(false).is_ok());
        assert!(matches!(
            config.validate(true),
            Err(ValidationError::UrlMustBeHttps("INSTAGRAM__API_BASE_URL"))
        ));
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = InstagramConfig {
            graph_base_url: "graph.instagram.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(false),
            Err(ValidationError::InvalidUrl("INSTAGRAM__GRAPH_BASE_URL"))
        ));
    }

    #[test]
    fn test_timeout_bounds() {
        let config = InstagramConfig {
            http_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate(false).is_err());
    }
}
