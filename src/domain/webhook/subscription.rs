//! Subscription verification handshake.
//!
//! When a webhook subscription is created, Meta issues a GET with
//! `hub.mode=subscribe`, the verify token entered in the app dashboard, and a
//! random `hub.challenge`. Echoing the challenge proves endpoint ownership.

use serde::Deserialize;
use subtle::ConstantTimeEq;

use super::errors::WebhookError;

/// The only mode Meta sends during setup.
pub const SUBSCRIBE_MODE: &str = "subscribe";

/// Query parameters of a verification request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubscriptionChallenge {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,

    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,

    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

impl SubscriptionChallenge {
    /// Returns the challenge to echo if mode and token are accepted.
    ///
    /// A missing `hub.challenge` on an otherwise valid request echoes an empty
    /// string.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::VerificationFailed` when the mode is not
    /// `subscribe` or the token does not match.
    pub fn verify(&self, expected_token: &str) -> Result<String, WebhookError> {
        let mode_ok = self.mode.as_deref() == Some(SUBSCRIBE_MODE);
        let token_ok = self
            .verify_token
            .as_deref()
            .is_some_and(|token| bool::from(token.as_bytes().ct_eq(expected_token.as_bytes())));

        if !(mode_ok && token_ok) {
            return Err(WebhookError::VerificationFailed);
        }

        Ok(self.challenge.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOKEN: &str = "token";

    fn challenge(mode: &str, token: &str, value: &str) -> SubscriptionChallenge {
        SubscriptionChallenge {
            mode: Some(mode.to_string()),
            verify_token: Some(token.to_string()),
            challenge: Some(value.to_string()),
        }
    }

    #[test]
    fn valid_request_echoes_challenge() {
        let result = challenge("subscribe", TOKEN, "1158201444").verify(TOKEN);
        assert_eq!(result.unwrap(), "1158201444");
    }

    #[test]
    fn wrong_token_fails() {
        let result = challenge("subscribe", "nope", "123").verify(TOKEN);
        assert!(matches!(result, Err(WebhookError::VerificationFailed)));
    }

    #[test]
    fn wrong_mode_fails() {
        let result = challenge("unsubscribe", TOKEN, "123").verify(TOKEN);
        assert!(matches!(result, Err(WebhookError::VerificationFailed)));
    }

    #[test]
    fn mode_is_case_sensitive() {
        let result = challenge("Subscribe", TOKEN, "123").verify(TOKEN);
        assert!(result.is_err());
    }

    #[test]
    fn missing_params_fail() {
        let result = SubscriptionChallenge::default().verify(TOKEN);
        assert!(matches!(result, Err(WebhookError::VerificationFailed)));
    }

    #[test]
    fn missing_challenge_echoes_empty() {
        let request = SubscriptionChallenge {
            challenge: None,
            ..challenge("subscribe", TOKEN, "")
        };
        assert_eq!(request.verify(TOKEN).unwrap(), "");
    }

    #[test]
    fn deserializes_dotted_query_names() {
        let parsed: SubscriptionChallenge = serde_json::from_value(serde_json::json!({
            "hub.mode": "subscribe",
            "hub.verify_token": "token",
            "hub.challenge": "42"
        }))
        .unwrap();

        assert_eq!(parsed, challenge("subscribe", "token", "42"));
    }

    proptest! {
        #[test]
        fn accepted_challenge_is_echoed_byte_for_byte(value in ".*") {
            let echoed = challenge("subscribe", TOKEN, &value).verify(TOKEN).unwrap();
            prop_assert_eq!(echoed, value);
        }

        #[test]
        fn mismatched_token_never_verifies(token in "[a-z0-9]{1,16}") {
            prop_assume!(token != TOKEN);
            let result = challenge("subscribe", &token, "x").verify(TOKEN);
            prop_assert!(result.is_err());
        }
    }
}
