//! Toast notification feature slice.
//!
//! One queue, one contract: pending toasts live in an insertion-ordered queue
//! where every entry carries a unique id and an explicit expiry, and removal
//! is always id-addressed. Presentation (inline banner stack vs. modal
//! overlay) is selected by [`NotifyConfig`], not by which module the caller
//! imports.
//!
//! Non-rendering code raises toasts through a cloned [`Toasts`] handle; the
//! handle is created at the application root and handed down via context,
//! never through a module-level global.
//!
//! [`NotifyConfig`]: bhub_domain::config::NotifyConfig

mod queue;
#[cfg(feature = "client")]
mod ui;

pub use queue::{ToastEntry, ToastQueue};
#[cfg(feature = "client")]
pub use ui::ToastHost;

use bhub_domain::config::NotifyConfig;
use bhub_domain::toast::{Toast, ToastPresentation};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Cheaply clonable handle to the toast queue.
#[derive(Debug, Clone)]
pub struct Toasts {
    queue: Arc<Mutex<ToastQueue>>,
    presentation: ToastPresentation,
}

impl Toasts {
    #[must_use]
    pub fn new(config: &NotifyConfig) -> Self {
        Self {
            queue: Arc::new(Mutex::new(ToastQueue::new(Duration::from_millis(
                config.ttl_millis,
            )))),
            presentation: config.presentation,
        }
    }

    /// Enqueues a toast with the configured time-to-live; returns its id.
    pub fn push(&self, toast: Toast) -> String {
        let id = self.queue.lock().push_at(toast, Instant::now());
        debug!(%id, "Toast enqueued");
        id
    }

    /// Enqueues a toast with a per-message time-to-live; returns its id.
    pub fn push_with_ttl(&self, toast: Toast, ttl: Duration) -> String {
        self.queue.lock().push_with_ttl_at(toast, ttl, Instant::now())
    }

    /// Removes a toast by id (user dismissal). Returns whether it was pending.
    pub fn dismiss(&self, id: &str) -> bool {
        self.queue.lock().dismiss(id)
    }

    /// Drops every entry whose expiry has elapsed; returns the removed ids.
    pub fn purge_expired(&self) -> Vec<String> {
        self.queue.lock().purge_expired(Instant::now())
    }

    /// A point-in-time copy of the pending entries, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ToastEntry> {
        self.queue.lock().entries().to_vec()
    }

    #[must_use]
    pub const fn presentation(&self) -> ToastPresentation {
        self.presentation
    }
}
