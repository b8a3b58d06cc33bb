//! # Secrets
//!
//! Generation of signing secrets for server-side configuration.
//!
//! The output is meant to land in operator-managed configuration (for example
//! the `BHUB__SECURITY__...` environment overrides consumed by the identity
//! slice); this crate never stores anything.
//!
//! Server-only enforcement is structural: this crate is a dependency of
//! server-side crates only, and the wasm guard below keeps it out of any
//! client-reachable build graph. There is no runtime environment check.

#[cfg(target_arch = "wasm32")]
compile_error!(
    "bhub-secrets generates signing secrets and must not be compiled for client-side targets"
);

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Raw entropy per generated secret, in bytes.
pub const SECRET_LEN: usize = 32;

/// Errors surfaced while generating a secret.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    /// The operating system RNG refused to provide entropy.
    #[error("Entropy source failure: {source}")]
    Entropy {
        #[from]
        source: getrandom::Error,
    },
}

/// Produces a base64-encoded signing secret backed by [`SECRET_LEN`] bytes of
/// OS randomness.
///
/// The caller is responsible for storing the value; successive calls are
/// independent draws from the system RNG.
///
/// # Errors
/// Returns [`SecretError::Entropy`] if the OS RNG is unavailable.
pub fn generate_signing_secret() -> Result<String, SecretError> {
    let mut bytes = [0u8; SECRET_LEN];
    getrandom::fill(&mut bytes)?;
    Ok(STANDARD.encode(bytes))
}
