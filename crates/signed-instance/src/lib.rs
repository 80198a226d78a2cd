//! Verification and decoding of signed app instances.
//!
//! A hosting platform hands each embedded application a signed instance of
//! the form `<signature>.<payload>`. Both segments are Base64URL without
//! padding. The signature is HMAC-SHA256 over the *encoded* payload
//! segment, keyed with the application secret. The payload is only parsed
//! after the signature checks out.
//!
//! ```ignore
//! use signed_instance::{SignAlgorithm, Verifier};
//!
//! let verifier = Verifier::new(b"app-secret", SignAlgorithm::HS256)?;
//! let instance = verifier.verify_and_decode(signed_instance)?;
//!
//! println!("Instance: {}", instance.instance_id);
//! ```
//!
//! There is no expiry or replay protection: `signDate` is exposed as issued
//! and callers decide what to do with it.

mod config;
mod error;
mod instance;

// Internal modules
pub(crate) mod algorithm;
pub(crate) mod limits;
pub(crate) mod utils;
pub(crate) mod verifier;

// Public Interface
pub use algorithm::SignAlgorithm;
pub use config::{APP_KEY_ENV, APP_SECRET_ENV, Credentials};
pub use error::{Error, ErrorKind, Result, Segment};
pub use instance::{AppInstance, OWNER_PERMISSION};
pub use verifier::Verifier;
