//! A single verifier shared across threads

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use signed_instance::{Error, SignAlgorithm, Verifier};
use std::sync::Arc;
use std::thread;

fn sign(payload_json: &str, secret: &[u8]) -> String {
    let payload_b64 = URL_SAFE_NO_PAD.encode(payload_json);
    let mut mac = Hmac::<Sha256>::new_from_slice(secret).unwrap();
    mac.update(payload_b64.as_bytes());
    let signature_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
    format!("{signature_b64}.{payload_b64}")
}

#[test]
fn test_verifier_is_send_sync() {
    fn assert_send_sync<T: Send + Sync + Clone + 'static>() {}
    assert_send_sync::<Verifier>();
}

#[test]
fn test_concurrent_verification() {
    let verifier = Verifier::new(b"s3cr3t", SignAlgorithm::HS256).unwrap();

    thread::scope(|scope| {
        for worker in 0..8 {
            let verifier = &verifier;
            scope.spawn(move || {
                for i in 0..200 {
                    let instance_id = format!("instance-{worker}-{i}");
                    let valid = sign(&format!(r#"{{"instanceId":"{instance_id}"}}"#), b"s3cr3t");
                    let forged = sign(&format!(r#"{{"instanceId":"{instance_id}"}}"#), b"forged");

                    // Interleave accepted and rejected calls on the shared verifier
                    let instance = verifier.verify_and_decode(&valid).unwrap();
                    assert_eq!(instance.instance_id, instance_id);
                    assert!(matches!(
                        verifier.verify_and_decode(&forged),
                        Err(Error::InvalidSignature)
                    ));
                }
            });
        }
    });
}

#[test]
fn test_cloned_verifiers_across_threads() {
    let verifier = Verifier::new(b"s3cr3t", SignAlgorithm::HS256).unwrap();
    let token = Arc::new(sign(r#"{"instanceId":"shared"}"#, b"s3cr3t"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let verifier = verifier.clone();
            let token = Arc::clone(&token);
            thread::spawn(move || verifier.verify_and_decode(&token).map(|i| i.instance_id))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), "shared");
    }
}
