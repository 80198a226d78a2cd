//! Verify a signed instance passed on the command line
//!
//! ```not_rust
//! SIGNED_INSTANCE_APP_KEY=... SIGNED_INSTANCE_APP_SECRET=... \
//!     RUST_LOG=signed_instance=debug cargo run --example verify -- <signed-instance>
//! ```

use signed_instance::{Credentials, Verifier};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signed_instance=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(token) = std::env::args().nth(1) else {
        eprintln!("usage: verify <signed-instance>");
        return ExitCode::from(2);
    };

    let verifier = match Credentials::from_env().and_then(|c| Verifier::from_credentials(&c)) {
        Ok(verifier) => verifier,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };

    match verifier.verify_and_decode(&token) {
        Ok(instance) => {
            println!("instance:    {}", instance.instance_id);
            println!("user:        {:?}", instance.uid);
            println!("permissions: {:?}", instance.permissions);
            println!("signed at:   {:?}", instance.sign_date);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::warn!(kind = ?e.kind(), "rejected signed instance: {e}");
            ExitCode::FAILURE
        }
    }
}
