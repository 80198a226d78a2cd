//! Errors for signed-instance

use std::fmt;
use thiserror::Error;

/// Token segment a decoding failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// The token as a whole (length, delimiter)
    Token,
    /// The signature segment before the first `.`
    Signature,
    /// The payload segment after the first `.`
    Payload,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Segment::Token => "token",
            Segment::Signature => "signature",
            Segment::Payload => "payload",
        })
    }
}

/// Coarse failure category, for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Initialization,
    MalformedToken,
    InvalidSignature,
    PayloadDecode,
}

/// Signed instance errors
///
/// Messages never carry the secret, the signature bytes or the payload text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Verifier initialization failed: {0}")]
    Initialization(String),

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Malformed signed instance ({segment}): {reason}")]
    MalformedToken { segment: Segment, reason: String },

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signed instance signature invalid: wrong secret or tampered payload")]
    InvalidSignature,

    // ============================================================================
    // Payload Errors
    // ============================================================================
    #[error("Signed instance payload could not be decoded: {0}")]
    PayloadDecode(String),
}

impl Error {
    pub(crate) fn malformed(segment: Segment, reason: impl Into<String>) -> Self {
        Error::MalformedToken {
            segment,
            reason: reason.into(),
        }
    }

    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Initialization(_) => ErrorKind::Initialization,
            Error::MalformedToken { .. } => ErrorKind::MalformedToken,
            Error::InvalidSignature => ErrorKind::InvalidSignature,
            Error::PayloadDecode(_) => ErrorKind::PayloadDecode,
        }
    }
}

/// Result type alias for signed-instance operations
pub type Result<T> = std::result::Result<T, Error>;
