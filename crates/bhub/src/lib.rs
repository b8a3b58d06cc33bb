//! Facade crate for `BudgetHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `bhub` with the desired feature flags (`server`/`client`).
//! - Call `bhub::init` (server) to register feature slices; extend as new slices appear.

pub use bhub_domain as domain;
#[cfg(feature = "server")]
use bhub_domain::config::ApiConfig;
pub use bhub_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use bhub_identity::auth_router;
        pub use bhub_kernel::server::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "client")]
    pub use bhub_dashboard as dashboard;
    pub use bhub_identity as identity;
    #[cfg(feature = "client")]
    pub use bhub_notify as notify;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "client")]
        "client",
        "identity",
        #[cfg(feature = "client")]
        "dashboard",
        #[cfg(feature = "client")]
        "notify",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[cfg(feature = "server")]
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Identity (sessions, sign-out)
    slices.push(features::identity::init(&config.security.session)?);

    Ok(slices)
}
