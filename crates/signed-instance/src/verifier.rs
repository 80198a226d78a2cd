use crate::algorithm::{self, HmacSha256, SignAlgorithm};
use crate::config::Credentials;
use crate::error::{Error, Result, Segment};
use crate::instance::AppInstance;
use crate::limits::{
    MAX_DECODED_PAYLOAD_SIZE, MAX_DECODED_SIGNATURE_SIZE, MAX_SIGNATURE_B64_SIZE, MAX_TOKEN_LENGTH,
};
use crate::utils::base64url;
use std::fmt;
use std::sync::Arc;

/// Delimiter between the signature and payload segments
const DELIMITER: char = '.';

struct VerifierConfig {
    algorithm: SignAlgorithm,
    app_key: Option<String>,
    mac: HmacSha256,
}

/// Signed instance verifier
///
/// The verifier is configured once and can be reused for any number of
/// verifications, from any number of threads. Clones share the same keyed
/// context. Each call works on its own copy of it.
#[derive(Clone)]
pub struct Verifier {
    config: Arc<VerifierConfig>,
}

impl Verifier {
    /// Create a verifier bound to `secret`
    ///
    /// Fails with [`Error::Initialization`] if the secret is empty.
    pub fn new(secret: &[u8], algorithm: SignAlgorithm) -> Result<Self> {
        let mac = algorithm.keyed_context(secret)?;

        Ok(Self {
            config: Arc::new(VerifierConfig {
                algorithm,
                app_key: None,
                mac,
            }),
        })
    }

    /// Create an HS256 verifier from application credentials
    pub fn from_credentials(credentials: &Credentials) -> Result<Self> {
        let mac = SignAlgorithm::HS256.keyed_context(credentials.app_secret())?;

        Ok(Self {
            config: Arc::new(VerifierConfig {
                algorithm: SignAlgorithm::HS256,
                app_key: Some(credentials.app_key().to_string()),
                mac,
            }),
        })
    }

    pub fn algorithm(&self) -> SignAlgorithm {
        self.config.algorithm
    }

    /// Application key, when built from [`Credentials`]
    pub fn app_key(&self) -> Option<&str> {
        self.config.app_key.as_deref()
    }
}

impl Verifier {
    /// Verify a signed instance and decode it into an [`AppInstance`]
    pub fn verify_and_decode(&self, token: &str) -> Result<AppInstance> {
        self.verify_and_decode_as::<AppInstance>(token)
    }

    /// Verify a signed instance and decode it into a custom claims type
    ///
    /// The payload is only parsed after the signature has been verified.
    pub fn verify_and_decode_as<C>(&self, token: &str) -> Result<C>
    where
        C: miniserde::Deserialize,
    {
        let result = self.verify(token).and_then(|payload| decode_payload(&payload));

        match &result {
            Ok(_) => tracing::debug!(algorithm = %self.config.algorithm, "signed instance verified"),
            Err(e) => tracing::debug!(kind = ?e.kind(), error = %e, "signed instance rejected"),
        }

        result
    }

    /// Verify the signature and return the raw decoded payload bytes
    ///
    /// Useful when the caller parses the payload with its own decoder.
    pub fn verify(&self, token: &str) -> Result<Vec<u8>> {
        // 1. Validate token string length
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::malformed(
                Segment::Token,
                format!(
                    "token too large: {} bytes (maximum: {MAX_TOKEN_LENGTH} bytes)",
                    token.len()
                ),
            ));
        }

        // 2. Split at the first delimiter; the payload segment may be empty
        let (signature_b64, payload_b64) = token
            .split_once(DELIMITER)
            .ok_or_else(|| Error::malformed(Segment::Token, "missing delimiter"))?;

        // Validate signature Base64URL size before decoding
        if signature_b64.len() > MAX_SIGNATURE_B64_SIZE {
            return Err(Error::malformed(
                Segment::Signature,
                format!(
                    "signature too large: {} bytes (maximum: {MAX_SIGNATURE_B64_SIZE} bytes)",
                    signature_b64.len()
                ),
            ));
        }

        // 3-4. Decode both segments
        let signature =
            base64url::decode_segment(signature_b64, Segment::Signature, MAX_DECODED_SIGNATURE_SIZE)?;
        let payload =
            base64url::decode_segment(payload_b64, Segment::Payload, MAX_DECODED_PAYLOAD_SIZE)?;

        tracing::trace!(
            signature_len = signature.len(),
            payload_len = payload.len(),
            "decoded signed instance segments"
        );

        // 5. The platform signs the encoded payload segment, not the decoded bytes
        let expected = algorithm::sign(&self.config.mac, payload_b64.as_bytes());

        // 6-7. Compare in constant time
        if !algorithm::signatures_match(&signature, &expected) {
            return Err(Error::InvalidSignature);
        }

        Ok(payload)
    }
}

/// Parse verified payload bytes as UTF-8 JSON into `C`
fn decode_payload<C>(payload: &[u8]) -> Result<C>
where
    C: miniserde::Deserialize,
{
    let json = std::str::from_utf8(payload)
        .map_err(|e| Error::PayloadDecode(format!("invalid UTF-8: {e}")))?;

    miniserde::json::from_str(json)
        .map_err(|e| Error::PayloadDecode(format!("failed to parse payload: {e}")))
}

impl fmt::Debug for Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier")
            .field("algorithm", &self.config.algorithm)
            .field("app_key", &self.config.app_key)
            .finish_non_exhaustive()
    }
}
