use bhub_domain::config::SessionConfig;
use bhub_kernel::safe_nanoid;
use moka::sync::Cache;
use std::fmt;
use std::time::Duration;

/// An authenticated session as the provider sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
}

/// Bounded, TTL-evicting store of active sessions.
///
/// Termination is explicit; expiry is handled by the cache's time-to-live so
/// abandoned sessions age out on their own.
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<String, Session>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(Duration::from_secs(config.ttl_seconds))
            .build();
        Self { cache }
    }

    /// Creates a session for a user and returns its id.
    pub fn issue(&self, user_id: impl Into<String>) -> String {
        let session_id = safe_nanoid!(24);
        self.cache.insert(session_id.clone(), Session { user_id: user_id.into() });
        session_id
    }

    /// Invalidates a session. Returns whether it was active.
    pub fn terminate(&self, session_id: &str) -> bool {
        if self.cache.get(session_id).is_some() {
            self.cache.invalidate(session_id);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_active(&self, session_id: &str) -> bool {
        self.cache.get(session_id).is_some()
    }

    #[must_use]
    pub fn get(&self, session_id: &str) -> Option<Session> {
        self.cache.get(session_id)
    }
}
