//! Base64URL decoding per RFC 4648 (URL-safe alphabet, no padding)
//!
//! Thin wrapper around the `base64` crate with size limit validation.

use crate::error::{Error, Result, Segment};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Decode a Base64URL segment to bytes with maximum size limit
pub(crate) fn decode_segment(input: &str, segment: Segment, max_size: usize) -> Result<Vec<u8>> {
    let result = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::malformed(segment, format!("Base64URL decode failed: {e}")))?;

    if result.len() > max_size {
        return Err(Error::malformed(
            segment,
            format!(
                "Decoded size exceeds limit: {} bytes (max: {max_size})",
                result.len()
            ),
        ));
    }

    Ok(result)
}
