//! `X-Hub-Signature` verification.
//!
//! Meta signs every webhook delivery with an HMAC of the raw request body,
//! keyed with the app secret, and sends it as `X-Hub-Signature: sha1=<hex>`
//! (and `X-Hub-Signature-256: sha256=<hex>`). The digest must be computed over
//! the exact bytes received, before any JSON parsing.

use std::fmt;

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha1::Sha1;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::WebhookError;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// Header carrying the SHA1 signature.
pub const SIGNATURE_HEADER: &str = "X-Hub-Signature";

/// Header carrying the SHA256 signature.
pub const SIGNATURE_256_HEADER: &str = "X-Hub-Signature-256";

/// HMAC algorithm used to sign deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl SignatureAlgorithm {
    /// Prefix used in the header value (`sha1=...`).
    pub fn prefix(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha1 => "sha1",
            SignatureAlgorithm::Sha256 => "sha256",
        }
    }

    /// Name of the request header carrying signatures for this algorithm.
    pub fn header_name(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha1 => SIGNATURE_HEADER,
            SignatureAlgorithm::Sha256 => SIGNATURE_256_HEADER,
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "sha1" => Some(SignatureAlgorithm::Sha1),
            "sha256" => Some(SignatureAlgorithm::Sha256),
            _ => None,
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Parsed `X-Hub-Signature` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    pub algorithm: SignatureAlgorithm,
    pub digest: Vec<u8>,
}

impl SignatureHeader {
    /// Parses a header value of the form `<algorithm>=<hex digest>`.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::MalformedSignature` if the separator is missing,
    /// the algorithm is unknown, or the digest is not valid hex.
    pub fn parse(header: &str) -> Result<Self, WebhookError> {
        let (prefix, hex_digest) = header
            .trim()
            .split_once('=')
            .ok_or_else(|| WebhookError::MalformedSignature("missing '='".to_string()))?;

        let algorithm = SignatureAlgorithm::from_prefix(prefix).ok_or_else(|| {
            WebhookError::MalformedSignature(format!("unsupported algorithm '{}'", prefix))
        })?;

        let digest = hex::decode(hex_digest)
            .map_err(|_| WebhookError::MalformedSignature("invalid hex digest".to_string()))?;

        Ok(SignatureHeader { algorithm, digest })
    }
}

/// Verifier for Meta webhook signatures.
pub struct XHubSignatureVerifier {
    secret: SecretString,
    algorithm: SignatureAlgorithm,
}

impl XHubSignatureVerifier {
    /// Creates a verifier keyed with the app secret.
    pub fn new(secret: SecretString, algorithm: SignatureAlgorithm) -> Self {
        Self { secret, algorithm }
    }

    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }

    /// Verifies the signature header against the raw body.
    ///
    /// # Errors
    ///
    /// - `MissingSignature` - no header value was supplied
    /// - `MalformedSignature` - the header could not be parsed
    /// - `AlgorithmMismatch` - the header uses a different algorithm
    /// - `InvalidSignature` - the digest does not match the body
    pub fn verify(&self, payload: &[u8], signature_header: Option<&str>) -> Result<(), WebhookError> {
        let header = signature_header.ok_or(WebhookError::MissingSignature)?;
        let header = SignatureHeader::parse(header)?;

        if header.algorithm != self.algorithm {
            return Err(WebhookError::AlgorithmMismatch {
                expected: self.algorithm,
                actual: header.algorithm,
            });
        }

        let expected = self.compute_digest(payload)?;
        if !constant_time_compare(&expected, &header.digest) {
            return Err(WebhookError::InvalidSignature);
        }

        Ok(())
    }

    /// Produces the header value a sender would attach to `payload`.
    pub fn sign(&self, payload: &[u8]) -> Result<String, WebhookError> {
        let digest = self.compute_digest(payload)?;
        Ok(format!("{}={}", self.algorithm.prefix(), hex::encode(digest)))
    }

    fn compute_digest(&self, payload: &[u8]) -> Result<Vec<u8>, WebhookError> {
        let key = self.secret.expose_secret().as_bytes();
        let digest = match self.algorithm {
            SignatureAlgorithm::Sha1 => {
                let mut mac = HmacSha1::new_from_slice(key)
                    .map_err(|_| WebhookError::SecretNotConfigured)?;
                mac.update(payload);
                mac.finalize().into_bytes().to_vec()
            }
            SignatureAlgorithm::Sha256 => {
                let mut mac = HmacSha256::new_from_slice(key)
                    .map_err(|_| WebhookError::SecretNotConfigured)?;
                mac.update(payload);
                mac.finalize().into_bytes().to_vec()
            }
        };
        Ok(digest)
    }
}

/// Constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
