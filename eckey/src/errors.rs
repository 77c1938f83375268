//! Error types for key handling and ECDSA.

use curve::ParseU256Error;
use thiserror::Error;

/// Errors returned by key construction, encoding and signing.
///
/// Verification never returns an error: a well-formed but invalid signature
/// simply fails to verify.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EcdsaError {
    /// Malformed hex or decimal input.
    #[error("parse error: {0}")]
    Parse(#[from] ParseU256Error),

    /// Input of the wrong length or with unexpected structural bytes.
    #[error("format error: {reason}")]
    Format { reason: String },

    /// An affine point was required but the point at infinity was given,
    /// e.g. when encoding a public key.
    #[error("point at infinity has no affine encoding")]
    InvalidPoint,

    /// A signature component lies outside `(0, n)`.
    #[error("signature component out of range")]
    OutOfRange,

    /// The secure random source failed while drawing a key or nonce.
    #[error("random source failed: {reason}")]
    EntropyExhausted { reason: String },

    /// Signing was requested on a verification-only key.
    #[error("key pair has no private key")]
    MissingPrivateKey,
}

impl EcdsaError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }
}
