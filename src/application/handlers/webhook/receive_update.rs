//! ReceiveUpdateHandler - Command handler for webhook deliveries.

use std::sync::Arc;

use crate::domain::updates::UpdateRecord;
use crate::domain::webhook::{Platform, SignaturePolicy, WebhookError, XHubSignatureVerifier};
use crate::ports::UpdateLog;

/// Command carrying one delivery, body untouched.
#[derive(Debug, Clone)]
pub struct ReceiveUpdateCommand {
    pub platform: Platform,
    /// Raw request body; signatures are computed over these exact bytes.
    pub payload: Vec<u8>,
    /// Value of the signature header, if any.
    pub signature: Option<String>,
}

/// Result of an accepted delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiveUpdateResult {
    /// Whether the signature was checked for this delivery.
    pub signature_checked: bool,
}

/// Handler that authenticates a delivery and records it.
///
/// Either the payload is fully stored or nothing is: signature and JSON
/// checks both run before the log is touched.
pub struct ReceiveUpdateHandler {
    update_log: Arc<dyn UpdateLog>,
    verifier: Option<Arc<XHubSignatureVerifier>>,
    policy: SignaturePolicy,
}

impl ReceiveUpdateHandler {
    pub fn new(
        update_log: Arc<dyn UpdateLog>,
        verifier: Option<Arc<XHubSignatureVerifier>>,
        policy: SignaturePolicy,
    ) -> Self {
        Self {
            update_log,
            verifier,
            policy,
        }
    }

    pub async fn handle(
        &self,
        cmd: ReceiveUpdateCommand,
    ) -> Result<ReceiveUpdateResult, WebhookError> {
        let platform = cmd.platform;

        // 1. Authenticate over the raw bytes
        let signature_checked = self.policy.requires_signature(platform);
        if signature_checked {
            let verifier = self.verifier.as_ref().ok_or_else(|| {
                tracing::warn!(%platform, "Delivery rejected - no app secret configured");
                WebhookError::SecretNotConfigured
            })?;

            if let Err(err) = verifier.verify(&cmd.payload, cmd.signature.as_deref()) {
                tracing::warn!(
                    %platform,
                    header = verifier.algorithm().header_name(),
                    error = %err,
                    "Delivery rejected - signature not present or invalid"
                );
                return Err(err);
            }

            tracing::debug!(%platform, "Signature validated");
        }

        // 2. Parse
        let record = UpdateRecord::from_body(platform, &cmd.payload).map_err(|err| {
            tracing::warn!(%platform, error = %err, "Delivery rejected - body is not JSON");
            err
        })?;

        tracing::info!(
            %platform,
            payload = %record.payload,
            "{} update received",
            platform.display_name()
        );

        // 3. Record
        self.update_log.record(record).await?;

        Ok(ReceiveUpdateResult { signature_checked })
    }
}
