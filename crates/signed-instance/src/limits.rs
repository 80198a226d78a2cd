//! Size limit constants for input validation

/// Maximum length for a signed instance string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum size for Base64URL-encoded signature string (1.5KB)
/// An HMAC-SHA256 signature encodes to 43 characters; anything near this
/// bound is already garbage, but decoding it stays cheap
pub(crate) const MAX_SIGNATURE_B64_SIZE: usize = 1536;

/// Maximum size for decoded signature bytes (1KB)
pub(crate) const MAX_DECODED_SIGNATURE_SIZE: usize = 1024;

/// Maximum size for decoded payload JSON (64KB)
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 64 * 1024;
