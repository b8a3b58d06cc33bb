use bhub_domain::config::NotifyConfig;
use bhub_domain::toast::{Toast, ToastVariant};
use bhub_notify::{ToastQueue, Toasts};
use std::collections::HashSet;
use std::time::{Duration, Instant};

fn queue() -> ToastQueue {
    ToastQueue::new(Duration::from_secs(3))
}

#[test]
fn push_preserves_insertion_order_and_assigns_unique_ids() {
    let mut q = queue();
    let now = Instant::now();

    let ids: Vec<String> =
        (0..5).map(|i| q.push_at(Toast::new(format!("toast {i}")), now)).collect();

    assert_eq!(q.len(), 5);
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), 5, "every toast gets its own id");

    let queued: Vec<&str> = q.entries().iter().map(|e| e.id.as_str()).collect();
    let pushed: Vec<&str> = ids.iter().map(String::as_str).collect();
    assert_eq!(queued, pushed, "entries stay in insertion order");
}

#[test]
fn expiry_removes_the_expired_toast_not_the_front() {
    let mut q = queue();
    let now = Instant::now();

    // Older toast gets the longer TTL: the one expiring first is NOT the
    // front of the queue, so removal must go by id, not position.
    let long_lived = q.push_with_ttl_at(Toast::new("first in"), Duration::from_secs(10), now);
    let short_lived = q.push_with_ttl_at(Toast::new("second in"), Duration::from_secs(1), now);

    let removed = q.purge_expired(now + Duration::from_secs(2));
    assert_eq!(removed, vec![short_lived]);

    let remaining: Vec<&str> = q.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(remaining, vec![long_lived.as_str()]);
}

#[test]
fn each_toast_expires_individually() {
    let mut q = queue();
    let now = Instant::now();

    let a = q.push_with_ttl_at(Toast::new("a"), Duration::from_secs(1), now);
    let b = q.push_with_ttl_at(Toast::new("b"), Duration::from_secs(2), now);
    let c = q.push_with_ttl_at(Toast::new("c"), Duration::from_secs(3), now);

    assert!(q.purge_expired(now).is_empty(), "nothing expires at t=0");
    assert_eq!(q.purge_expired(now + Duration::from_millis(1500)), vec![a]);
    assert_eq!(q.purge_expired(now + Duration::from_millis(2500)), vec![b]);
    assert_eq!(q.purge_expired(now + Duration::from_millis(3500)), vec![c]);
    assert_eq!(q.len(), 0);
}

#[test]
fn dismiss_is_id_addressed() {
    let mut q = queue();
    let now = Instant::now();

    let first = q.push_at(Toast::new("keep me"), now);
    let second = q.push_at(Toast::new("dismiss me"), now);

    assert!(q.dismiss(&second));
    assert!(!q.dismiss(&second), "second dismissal is a no-op");
    assert!(!q.dismiss("not-an-id"));

    assert_eq!(q.len(), 1);
    assert_eq!(q.entries()[0].id, first);
}

#[test]
fn next_expiry_is_the_earliest_pending_one() {
    let mut q = queue();
    let now = Instant::now();
    assert!(q.next_expiry().is_none());

    q.push_with_ttl_at(Toast::new("slow"), Duration::from_secs(9), now);
    q.push_with_ttl_at(Toast::new("fast"), Duration::from_secs(1), now);

    assert_eq!(q.next_expiry(), Some(now + Duration::from_secs(1)));
}

#[test]
fn handle_shares_one_queue_across_clones() {
    let toasts = Toasts::new(&NotifyConfig::default());
    let clone = toasts.clone();

    let id = toasts.push(Toast::new("shared").variant(ToastVariant::Destructive));
    assert_eq!(clone.snapshot().len(), 1);

    assert!(clone.dismiss(&id));
    assert!(toasts.snapshot().is_empty());
}

#[test]
fn handle_purge_respects_per_toast_ttl() {
    let toasts = Toasts::new(&NotifyConfig::default());

    let expired = toasts.push_with_ttl(Toast::new("gone"), Duration::ZERO);
    let pending = toasts.push(Toast::new("still here"));

    let removed = toasts.purge_expired();
    assert_eq!(removed, vec![expired]);

    let snapshot = toasts.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, pending);
}
