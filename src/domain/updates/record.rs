//! A single accepted webhook delivery.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::webhook::{Platform, WebhookError};

/// Payload received on a delivery route, kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateRecord {
    pub platform: Platform,
    pub received_at: DateTime<Utc>,
    pub payload: Value,
}

impl UpdateRecord {
    pub fn new(platform: Platform, payload: Value) -> Self {
        Self {
            platform,
            received_at: Utc::now(),
            payload,
        }
    }

    /// Parses a raw request body into a record.
    ///
    /// An empty body becomes `{}`. Anything else must be a JSON object or
    /// array; key order is kept as received.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::InvalidPayload` if the body is not valid JSON,
    /// is a top-level primitive, or is whitespace only.
    pub fn from_body(platform: Platform, body: &[u8]) -> Result<Self, WebhookError> {
        if body.is_empty() {
            return Ok(Self::new(platform, Value::Object(Default::default())));
        }

        let payload: Value = serde_json::from_slice(body)
            .map_err(|e| WebhookError::InvalidPayload(e.to_string()))?;

        if !(payload.is_object() || payload.is_array()) {
            return Err(WebhookError::InvalidPayload(
                "top-level value must be an object or array".to_string(),
            ));
        }

        Ok(Self::new(platform, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_json_body() {
        let body = br#"{"object":"page","entry":[{"id":"123"}]}"#;

        let record = UpdateRecord::from_body(Platform::Facebook, body).unwrap();

        assert_eq!(record.platform, Platform::Facebook);
        assert_eq!(record.payload, json!({"object": "page", "entry": [{"id": "123"}]}));
    }

    #[test]
    fn empty_body_becomes_empty_object() {
        let record = UpdateRecord::from_body(Platform::Threads, b"").unwrap();
        assert_eq!(record.payload, json!({}));
    }

    #[test]
    fn whitespace_only_body_fails() {
        let result = UpdateRecord::from_body(Platform::Threads, b"  \n");
        assert!(matches!(result, Err(WebhookError::InvalidPayload(_))));
    }

    #[test]
    fn top_level_primitives_fail() {
        for body in ["\"x\"", "1", "true", "null"] {
            let result = UpdateRecord::from_body(Platform::Facebook, body.as_bytes());
            assert!(
                matches!(result, Err(WebhookError::InvalidPayload(_))),
                "{}",
                body
            );
        }
    }

    #[test]
    fn key_order_is_preserved() {
        let body = br#"{"object":"page","entry":[{"time":1,"id":"1"}]}"#;

        let record = UpdateRecord::from_body(Platform::Facebook, body).unwrap();

        assert_eq!(
            serde_json::to_string(&record.payload).unwrap().as_bytes(),
            &body[..]
        );
    }

    #[test]
    fn invalid_json_fails() {
        let result = UpdateRecord::from_body(Platform::Instagram, b"not json");
        assert!(matches!(result, Err(WebhookError::InvalidPayload(_))));
    }

    #[test]
    fn non_object_json_is_kept_verbatim() {
        let record = UpdateRecord::from_body(Platform::Instagram, b"[1,2,3]").unwrap();
        assert_eq!(record.payload, json!([1, 2, 3]));
    }
}
