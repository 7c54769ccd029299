//! Webhook error types.
//!
//! Covers subscription verification, signature validation and payload
//! acceptance, with HTTP status code mapping.

use axum::http::StatusCode;
use thiserror::Error;

use super::signature::SignatureAlgorithm;

/// Errors that occur while verifying or accepting a webhook request.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// `hub.mode` was not `subscribe` or `hub.verify_token` did not match.
    #[error("Subscription verification failed")]
    VerificationFailed,

    /// Delivery arrived without a signature header.
    #[error("Missing signature header")]
    MissingSignature,

    /// Signature header was present but did not match the body.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Signature header could not be parsed.
    #[error("Malformed signature header: {0}")]
    MalformedSignature(String),

    /// Signature was computed with a different algorithm than configured.
    #[error("Signature algorithm mismatch: expected {expected}, got {actual}")]
    AlgorithmMismatch {
        expected: SignatureAlgorithm,
        actual: SignatureAlgorithm,
    },

    /// The route requires a signature but no app secret is configured.
    #[error("Signing secret not configured")]
    SecretNotConfigured,

    /// Body is not valid JSON.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Update log could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WebhookError {
    /// Returns true for every failure that means "sender not authenticated".
    pub fn is_signature_failure(&self) -> bool {
        matches!(
            self,
            WebhookError::MissingSignature
                | WebhookError::InvalidSignature
                | WebhookError::MalformedSignature(_)
                | WebhookError::AlgorithmMismatch { .. }
                | WebhookError::SecretNotConfigured
        )
    }

    /// Maps the error to an HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::VerificationFailed | WebhookError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            WebhookError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ if self.is_signature_failure() => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
