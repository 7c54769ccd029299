//! Wire types for the Instagram token and Graph endpoints.
//!
//! The token endpoint has answered in more than one shape over time: a flat
//! object, or the same object wrapped in a `data` list. `user_id` arrives as
//! a number or a string, `permissions` as a list or a comma-separated string.

use serde::Deserialize;
use serde_json::Value;

/// Success body of `POST /oauth/access_token`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TokenResponse {
    Wrapped { data: Vec<TokenPayload> },
    Flat(TokenPayload),
}

impl TokenResponse {
    /// The first grant in the response, whatever its shape.
    pub fn into_payload(self) -> Option<TokenPayload> {
        match self {
            TokenResponse::Flat(payload) => Some(payload),
            TokenResponse::Wrapped { data } => data.into_iter().next(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TokenPayload {
    pub access_token: String,
    pub user_id: UserIdValue,
    #[serde(default)]
    pub permissions: Permissions,
}

/// Numeric or string account id.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserIdValue {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for UserIdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserIdValue::Number(n) => write!(f, "{}", n),
            UserIdValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Granted scopes, as a list or a comma-separated string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum Permissions {
    #[default]
    None,
    List(Vec<String>),
    Csv(String),
}

impl Permissions {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Permissions::None => Vec::new(),
            Permissions::List(list) => list,
            Permissions::Csv(csv) => csv
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

/// Body of `GET /me?fields=id,username`.
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: UserIdValue,
    pub username: String,
}

/// Pulls a human-readable message out of a provider error body.
///
/// Checks `error_message`, then `error.message`, then `error_description`.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    let candidates = [
        value.get("error_message"),
        value.get("error").and_then(|e| e.get("message")),
        value.get("error_description"),
    ];

    let message = candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .map(String::from);
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_response_with_numeric_user_id() {
        let body = r#"{"access_token":"IGQVJ","user_id":17841400000000000,"permissions":["user_profile"]}"#;

        let payload = serde_json::from_str::<TokenResponse>(body)
            .unwrap()
            .into_payload()
            .unwrap();

        assert_eq!(payload.access_token, "IGQVJ");
        assert_eq!(payload.user_id.to_string(), "17841400000000000");
        assert_eq!(payload.permissions.into_vec(), vec!["user_profile"]);
    }

    #[test]
    fn parses_wrapped_response_with_csv_permissions() {
        let body = r#"{"data":[{"access_token":"IGQVJ","user_id":"42","permissions":"instagram_business_basic, instagram_business_manage_messages"}]}"#;

        let payload = serde_json::from_str::<TokenResponse>(body)
            .unwrap()
            .into_payload()
            .unwrap();

        assert_eq!(payload.user_id.to_string(), "42");
        assert_eq!(
            payload.permissions.into_vec(),
            vec![
                "instagram_business_basic",
                "instagram_business_manage_messages"
            ]
        );
    }

    #[test]
    fn empty_wrapped_response_has_no_payload() {
        let response: TokenResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(response.into_payload().is_none());
    }

    #[test]
    fn missing_token_does_not_parse() {
        assert!(serde_json::from_str::<TokenResponse>(r#"{"user_id":1}"#).is_err());
    }

    #[test]
    fn extracts_error_message_field() {
        let body = r#"{"error_type":"OAuthException","code":400,"error_message":"Invalid authorization code"}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("Invalid authorization code")
        );
    }

    #[test]
    fn extracts_nested_graph_error() {
        let body = r#"{"error":{"message":"Invalid OAuth access token","type":"OAuthException","code":190}}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("Invalid OAuth access token")
        );
    }

    #[test]
    fn extracts_error_description() {
        let body = r#"{"error":"invalid_request","error_description":"redirect_uri mismatch"}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("redirect_uri mismatch")
        );
    }

    #[test]
    fn non_json_body_has_no_message() {
        assert!(extract_error_message("<html>Bad Gateway</html>").is_none());
        assert!(extract_error_message(r#"{"error":{}}"#).is_none());
    }
}
