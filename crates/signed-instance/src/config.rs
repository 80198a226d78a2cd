//! Application credentials
//!
//! The app key and secret come from the platform's developer registration.
//! They are supplied by the embedding application; nothing here is
//! compiled in or global.

use crate::error::{Error, Result};
use std::fmt;

/// Environment variable holding the application key
pub const APP_KEY_ENV: &str = "SIGNED_INSTANCE_APP_KEY";

/// Environment variable holding the application secret
pub const APP_SECRET_ENV: &str = "SIGNED_INSTANCE_APP_SECRET";

/// Application key and shared secret
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    app_key: String,
    app_secret: Vec<u8>,
}

impl Credentials {
    /// Create credentials from explicit values
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
        }
    }

    /// Read credentials from `SIGNED_INSTANCE_APP_KEY` and `SIGNED_INSTANCE_APP_SECRET`
    pub fn from_env() -> Result<Self> {
        Self::from_env_vars(APP_KEY_ENV, APP_SECRET_ENV)
    }

    /// Read credentials from custom environment variable names
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self> {
        let app_key = read_var(key_var)?;
        let app_secret = read_var(secret_var)?;
        Ok(Self::new(app_key, app_secret))
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub fn app_secret(&self) -> &[u8] {
        &self.app_secret
    }
}

fn read_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) => Err(Error::Initialization(format!(
            "environment variable {name} is empty"
        ))),
        Err(e) => Err(Error::Initialization(format!(
            "environment variable {name}: {e}"
        ))),
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_key", &self.app_key)
            .field("app_secret", &"<redacted>")
            .finish()
    }
}
