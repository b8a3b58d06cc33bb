//! Identity feature slice: server-side session store and the client sign-out flow.

mod error;
mod logout;
#[cfg(feature = "server")]
mod routes;
mod session;

pub use error::IdentityError;
pub use logout::{LocalSessionTerminator, Navigator, SessionTerminator, sign_out};
#[cfg(feature = "server")]
pub use routes::auth_router;
pub use session::{Session, SessionStore};

use bhub_domain::config::SessionConfig;
use bhub_domain::registry::{FeatureSlice, InitializedSlice};
use std::ops::Deref;
use std::sync::Arc;

/// Identity feature state.
#[derive(Debug, Clone)]
pub struct IdentityInner {
    pub sessions: SessionStore,
}

/// Thread-safe handle to the identity feature state.
#[derive(Debug, Clone)]
pub struct Identity {
    inner: Arc<IdentityInner>,
}

impl Identity {
    pub fn new(inner: IdentityInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Identity {
    type Target = IdentityInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Identity {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the identity feature.
///
/// # Errors
/// Currently infallible; kept fallible so wiring richer session backends does
/// not change the init signature.
pub fn init(config: &SessionConfig) -> Result<InitializedSlice, IdentityError> {
    let sessions = SessionStore::new(config);
    let slice = Identity::new(IdentityInner { sessions });

    tracing::info!("Identity slice initialized");
    Ok(InitializedSlice::new(slice))
}
