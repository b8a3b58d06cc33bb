//! Convenience re-exports for downstream crates.

pub use crate::safe_nanoid;

#[cfg(not(target_arch = "wasm32"))]
pub use crate::config::{ConfigError, load_config};

#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};
