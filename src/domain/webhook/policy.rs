//! Which delivery routes must carry a valid signature.

use serde::Deserialize;

use super::platform::Platform;

/// Signature requirement across delivery routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignaturePolicy {
    /// Every delivery route requires a valid signature.
    #[default]
    Uniform,

    /// Only the Facebook route is signed; Instagram and Threads deliveries
    /// are accepted as-is.
    PerRoute,
}

impl SignaturePolicy {
    pub fn requires_signature(&self, platform: Platform) -> bool {
        match self {
            SignaturePolicy::Uniform => true,
            SignaturePolicy::PerRoute => platform == Platform::Facebook,
        }
    }
}
