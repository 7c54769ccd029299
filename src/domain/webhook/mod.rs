//! Webhook domain - subscription handshake and delivery authentication.

mod errors;
mod platform;
mod policy;
mod signature;
mod subscription;

pub use errors::WebhookError;
pub use platform::Platform;
pub use policy::SignaturePolicy;
pub use signature::{
    SignatureAlgorithm, SignatureHeader, XHubSignatureVerifier, SIGNATURE_256_HEADER,
    SIGNATURE_HEADER,
};
pub use subscription::{SubscriptionChallenge, SUBSCRIBE_MODE};
