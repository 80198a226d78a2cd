//! Signing algorithm support for signed instance verification
use crate::error::{Error, Result};

use constant_time_eq::constant_time_eq_32;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::str::FromStr;

pub(crate) type HmacSha256 = Hmac<Sha256>;

/// Output length of HMAC-SHA256 in bytes
pub(crate) const HS256_SIGNATURE_LEN: usize = 32;

/// Algorithm the platform signs instances with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignAlgorithm {
    /// HMAC with SHA-256
    #[default]
    HS256,
}

impl SignAlgorithm {
    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            SignAlgorithm::HS256 => "HS256",
        }
    }

    /// Bind the secret to a keyed hash context
    ///
    /// The returned context is a prototype: verification clones it per call
    /// and never updates it in place.
    pub(crate) fn keyed_context(&self, secret: &[u8]) -> Result<HmacSha256> {
        if secret.is_empty() {
            return Err(Error::Initialization("secret must not be empty".into()));
        }

        match self {
            SignAlgorithm::HS256 => HmacSha256::new_from_slice(secret)
                .map_err(|e| Error::Initialization(format!("failed to key HMAC-SHA256: {e}"))),
        }
    }
}

impl FromStr for SignAlgorithm {
    type Err = Error;

    /// Accepts the JOSE name as well as the JCA-style names used by the platform's SDKs
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("HS256") || s.eq_ignore_ascii_case("HMACSHA256") {
            Ok(SignAlgorithm::HS256)
        } else {
            Err(Error::Initialization(format!("unsupported algorithm '{s}'")))
        }
    }
}

impl std::fmt::Display for SignAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for SignAlgorithm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Compute the signature of `signed_data` from a fresh copy of `prototype`
pub(crate) fn sign(prototype: &HmacSha256, signed_data: &[u8]) -> [u8; HS256_SIGNATURE_LEN] {
    let mut mac = prototype.clone();
    mac.update(signed_data);

    let mut signature = [0u8; HS256_SIGNATURE_LEN];
    signature.copy_from_slice(&mac.finalize().into_bytes());
    signature
}

/// Constant-time comparison of a provided signature against the expected one
///
/// The provided bytes are copied into a fixed-size buffer so the byte
/// comparison always runs over the full 32 bytes. The length check is
/// folded in with a non-short-circuiting `&`.
pub(crate) fn signatures_match(provided: &[u8], expected: &[u8; HS256_SIGNATURE_LEN]) -> bool {
    let mut candidate = [0u8; HS256_SIGNATURE_LEN];
    let copied = provided.len().min(HS256_SIGNATURE_LEN);
    candidate[..copied].copy_from_slice(&provided[..copied]);

    let length_matches = provided.len() == HS256_SIGNATURE_LEN;
    let bytes_match = constant_time_eq_32(&candidate, expected);

    length_matches & bytes_match
}
