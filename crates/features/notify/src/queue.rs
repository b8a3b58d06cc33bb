use bhub_domain::toast::Toast;
use bhub_kernel::safe_nanoid;
use std::time::{Duration, Instant};

/// A pending toast: the message plus its queue identity and expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: String,
    pub toast: Toast,
    pub expires_at: Instant,
}

/// Insertion-ordered queue of pending toasts.
///
/// Entries are removed by id, never by position: expiring one toast while
/// others are pending must not disturb the rest of the queue. All time-aware
/// operations take an explicit `now` so the queue stays deterministic under
/// test; the [`Toasts`](crate::Toasts) handle supplies `Instant::now()`.
#[derive(Debug)]
pub struct ToastQueue {
    entries: Vec<ToastEntry>,
    ttl: Duration,
}

impl ToastQueue {
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self { entries: Vec::new(), ttl }
    }

    /// Appends a toast expiring after the queue-wide time-to-live.
    pub fn push_at(&mut self, toast: Toast, now: Instant) -> String {
        self.push_with_ttl_at(toast, self.ttl, now)
    }

    /// Appends a toast with an explicit time-to-live.
    pub fn push_with_ttl_at(&mut self, toast: Toast, ttl: Duration, now: Instant) -> String {
        let id = safe_nanoid!();
        self.entries.push(ToastEntry { id: id.clone(), toast, expires_at: now + ttl });
        id
    }

    /// Removes the entry with the given id. Returns whether it was pending.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Removes every entry whose expiry is at or before `now`.
    ///
    /// Returns the removed ids in insertion order. Entries that are still
    /// pending keep their relative order.
    pub fn purge_expired(&mut self, now: Instant) -> Vec<String> {
        let mut removed = Vec::new();
        self.entries.retain(|entry| {
            if entry.expires_at <= now {
                removed.push(entry.id.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Pending entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    /// The earliest pending expiry, if any.
    #[must_use]
    pub fn next_expiry(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.expires_at).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
