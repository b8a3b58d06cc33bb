use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bhub_secrets::{SECRET_LEN, generate_signing_secret};

#[test]
fn secret_decodes_to_exactly_32_bytes() {
    let secret = generate_signing_secret().expect("OS RNG should be available");
    let raw = STANDARD.decode(&secret).expect("output must be valid base64");
    assert_eq!(raw.len(), SECRET_LEN);
}

#[test]
fn successive_secrets_differ() {
    let first = generate_signing_secret().expect("first draw");
    let second = generate_signing_secret().expect("second draw");
    // Probabilistic, but a collision of two 256-bit draws would indicate
    // a broken entropy source.
    assert_ne!(first, second);
}
