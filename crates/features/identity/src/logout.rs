use crate::error::IdentityError;
use crate::session::SessionStore;
use bhub_domain::constants::LOGIN_PATH;
use tracing::{info, warn};

/// Ends the caller's session with the identity provider. No redirect is issued
/// by the provider itself; navigation is the caller's job.
pub trait SessionTerminator {
    fn terminate(&self) -> impl Future<Output = Result<(), IdentityError>> + Send;
}

/// Client-side navigation seam.
pub trait Navigator {
    /// Replaces the current location.
    fn navigate(&self, path: &str);
    /// Forces the current view to re-fetch its data.
    fn refresh(&self);
}

/// Signs the user out.
///
/// Ordering is the contract: the termination request completes (or fails)
/// **before** any navigation happens, so the login screen never renders over
/// stale authenticated state. A failed termination is logged and the user is
/// still taken to the login screen; there is no retry.
pub async fn sign_out<T, N>(terminator: &T, navigator: &N)
where
    T: SessionTerminator,
    N: Navigator,
{
    if let Err(e) = terminator.terminate().await {
        warn!("Session termination failed, continuing to login: {e}");
    } else {
        info!("Session terminated");
    }

    navigator.navigate(LOGIN_PATH);
    navigator.refresh();
}

/// Terminates against an in-process [`SessionStore`] (desktop deployments run
/// the identity provider in the same process).
#[derive(Debug, Clone)]
pub struct LocalSessionTerminator {
    sessions: SessionStore,
    session_id: String,
}

impl LocalSessionTerminator {
    #[must_use]
    pub const fn new(sessions: SessionStore, session_id: String) -> Self {
        Self { sessions, session_id }
    }
}

impl SessionTerminator for LocalSessionTerminator {
    async fn terminate(&self) -> Result<(), IdentityError> {
        if self.sessions.terminate(&self.session_id) {
            Ok(())
        } else {
            Err(IdentityError::Auth { message: "Session was not active".into() })
        }
    }
}
