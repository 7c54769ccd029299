//! Shared application state for the HTTP layer.

use std::sync::Arc;

use secrecy::SecretString;

use crate::application::handlers::oauth::ExchangeAuthorizationCodeHandler;
use crate::application::handlers::webhook::{
    ListUpdatesHandler, ReceiveUpdateHandler, VerifySubscriptionHandler,
};
use crate::domain::webhook::{SignatureAlgorithm, SignaturePolicy, XHubSignatureVerifier};
use crate::ports::{OAuthProvider, UpdateLog};

/// Shared application state containing all dependencies.
///
/// Cloned for each request; every dependency is Arc-wrapped or cheap to copy.
#[derive(Clone)]
pub struct AppState {
    pub update_log: Arc<dyn UpdateLog>,
    pub oauth_provider: Arc<dyn OAuthProvider>,
    pub verify_token: SecretString,
    /// `None` when no app secret is configured.
    pub signature_verifier: Option<Arc<XHubSignatureVerifier>>,
    pub signature_policy: SignaturePolicy,
    pub fetch_profile: bool,
}

impl AppState {
    pub fn new(
        update_log: Arc<dyn UpdateLog>,
        oauth_provider: Arc<dyn OAuthProvider>,
        verify_token: SecretString,
    ) -> Self {
        Self {
            update_log,
            oauth_provider,
            verify_token,
            signature_verifier: None,
            signature_policy: SignaturePolicy::default(),
            fetch_profile: true,
        }
    }

    /// Enables signature checks with the given app secret.
    pub fn with_app_secret(mut self, secret: SecretString, algorithm: SignatureAlgorithm) -> Self {
        self.signature_verifier = Some(Arc::new(XHubSignatureVerifier::new(secret, algorithm)));
        self
    }

    pub fn with_signature_policy(mut self, policy: SignaturePolicy) -> Self {
        self.signature_policy = policy;
        self
    }

    pub fn with_fetch_profile(mut self, fetch_profile: bool) -> Self {
        self.fetch_profile = fetch_profile;
        self
    }

    /// Header carrying delivery signatures for the configured algorithm.
    pub fn signature_header(&self) -> &'static str {
        self.signature_verifier
            .as_ref()
            .map(|v| v.algorithm())
            .unwrap_or_default()
            .header_name()
    }

    // === Handler factories ===

    pub fn verify_subscription_handler(&self) -> VerifySubscriptionHandler {
        VerifySubscriptionHandler::new(self.verify_token.clone())
    }

    pub fn receive_update_handler(&self) -> ReceiveUpdateHandler {
        ReceiveUpdateHandler::new(
            self.update_log.clone(),
            self.signature_verifier.clone(),
            self.signature_policy,
        )
    }

    pub fn list_updates_handler(&self) -> ListUpdatesHandler {
        ListUpdatesHandler::new(self.update_log.clone())
    }

    pub fn exchange_code_handler(&self) -> ExchangeAuthorizationCodeHandler {
        ExchangeAuthorizationCodeHandler::new(self.oauth_provider.clone(), self.fetch_profile)
    }
}
