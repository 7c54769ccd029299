//! Shared fixtures for HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use secrecy::SecretString;
use tower::ServiceExt;

use meta_webhooks::adapters::http::{app_router, AppState};
use meta_webhooks::adapters::InMemoryUpdateLog;
use meta_webhooks::domain::oauth::{OAuthError, TokenGrant, UserProfile};
use meta_webhooks::domain::webhook::{SignatureAlgorithm, XHubSignatureVerifier};
use meta_webhooks::ports::OAuthProvider;

pub const APP_SECRET: &str = "test-app-secret";
pub const VERIFY_TOKEN: &str = "token";

/// Provider for tests that never reach the OAuth route.
pub struct UnreachableOAuthProvider;

#[async_trait]
impl OAuthProvider for UnreachableOAuthProvider {
    async fn exchange_code(&self, _code: &str) -> Result<TokenGrant, OAuthError> {
        Err(OAuthError::Network("not wired in this test".to_string()))
    }

    async fn fetch_profile(&self, _token: &SecretString) -> Result<UserProfile, OAuthError> {
        Err(OAuthError::Network("not wired in this test".to_string()))
    }
}

/// State with a signing secret, default policy and an empty log.
pub fn signed_state(update_log: Arc<InMemoryUpdateLog>) -> AppState {
    AppState::new(
        update_log,
        Arc::new(UnreachableOAuthProvider),
        SecretString::new(VERIFY_TOKEN.to_string()),
    )
    .with_app_secret(
        SecretString::new(APP_SECRET.to_string()),
        SignatureAlgorithm::Sha1,
    )
}

pub fn router(state: AppState) -> Router {
    app_router(state, Duration::from_secs(30))
}

/// Header value a correctly configured sender would attach.
pub fn sign(body: &[u8]) -> String {
    XHubSignatureVerifier::new(
        SecretString::new(APP_SECRET.to_string()),
        SignatureAlgorithm::Sha1,
    )
    .sign(body)
    .unwrap()
}

/// Sends one request and returns the status and body text.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post(uri: &str, body: &'static str, signature: Option<String>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(signature) = signature {
        builder = builder.header("X-Hub-Signature", signature);
    }
    builder.body(Body::from(body)).unwrap()
}
