//! OAuth exchange error types.

use axum::http::StatusCode;
use thiserror::Error;

/// Body sent when the provider gave no usable error detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "Authentication failed";

/// Errors that end an authorization-code callback.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The user (or provider) declined the authorization request.
    #[error("Authorization denied: {error}")]
    Denied { error: String, description: String },

    /// The callback carried neither `code` nor `error`.
    #[error("Missing authorization code")]
    MissingCode,

    /// The provider answered with a non-success status.
    #[error("Provider returned status {status}")]
    Upstream { status: u16, message: Option<String> },

    /// The provider could not be reached.
    #[error("Unable to reach provider: {0}")]
    Network(String),

    /// The provider answered with a body that could not be understood.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl OAuthError {
    /// Maps the error to an HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            OAuthError::Denied { .. } | OAuthError::MissingCode => StatusCode::BAD_REQUEST,
            OAuthError::Upstream { .. }
            | OAuthError::Network(_)
            | OAuthError::InvalidResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body returned to the browser.
    pub fn response_body(&self) -> String {
        match self {
            OAuthError::Denied { description, .. } => format!("Error: {}", description),
            OAuthError::MissingCode => "Error: missing authorization code".to_string(),
            OAuthError::Upstream {
                message: Some(message),
                ..
            } => format!("{}: {}", GENERIC_FAILURE_MESSAGE, message),
            OAuthError::Network(_) => {
                format!("{}: unable to reach provider", GENERIC_FAILURE_MESSAGE)
            }
            OAuthError::Upstream { message: None, .. } | OAuthError::InvalidResponse(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}
