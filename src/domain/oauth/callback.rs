//! Authorization redirect handling.

use serde::Deserialize;

use super::errors::OAuthError;

/// Query parameters the provider appends to the redirect URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_reason: Option<String>,
    pub error_description: Option<String>,
}

/// What the redirect tells us to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The user granted access; exchange this code.
    Authorized { code: String },

    /// The user (or provider) declined.
    Denied {
        error: String,
        reason: Option<String>,
        description: String,
    },
}

impl CallbackParams {
    /// Classifies the redirect. An error indicator wins over a code.
    ///
    /// # Errors
    ///
    /// Returns `OAuthError::MissingCode` when neither a code nor an error is
    /// present.
    pub fn classify(self) -> Result<CallbackOutcome, OAuthError> {
        if let Some(error) = non_empty(self.error) {
            return Ok(CallbackOutcome::Denied {
                error,
                reason: non_empty(self.error_reason),
                description: self.error_description.unwrap_or_default(),
            });
        }

        non_empty(self.code)
            .map(|code| CallbackOutcome::Authorized { code })
            .ok_or(OAuthError::MissingCode)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
