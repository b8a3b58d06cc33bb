use bhub_domain::config::SessionConfig;
use bhub_identity::{
    IdentityError, LocalSessionTerminator, Navigator, SessionStore, SessionTerminator, sign_out,
};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

struct RecordingTerminator {
    log: CallLog,
    fail: bool,
}

impl SessionTerminator for RecordingTerminator {
    async fn terminate(&self) -> Result<(), IdentityError> {
        self.log.record("terminate");
        if self.fail {
            Err(IdentityError::Auth { message: "provider unreachable".into() })
        } else {
            Ok(())
        }
    }
}

struct RecordingNavigator {
    log: CallLog,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.log.record(format!("navigate:{path}"));
    }

    fn refresh(&self) {
        self.log.record("refresh");
    }
}

#[tokio::test]
async fn termination_always_precedes_navigation() {
    let log = CallLog::default();
    let terminator = RecordingTerminator { log: log.clone(), fail: false };
    let navigator = RecordingNavigator { log: log.clone() };

    sign_out(&terminator, &navigator).await;

    assert_eq!(log.calls(), vec!["terminate", "navigate:/login", "refresh"]);
}

#[tokio::test]
async fn failed_termination_still_reaches_login() {
    let log = CallLog::default();
    let terminator = RecordingTerminator { log: log.clone(), fail: true };
    let navigator = RecordingNavigator { log: log.clone() };

    sign_out(&terminator, &navigator).await;

    // Silent failure mode: no retry, but the user still lands on /login
    // and the view is refreshed.
    assert_eq!(log.calls(), vec!["terminate", "navigate:/login", "refresh"]);
}

#[tokio::test]
async fn local_terminator_invalidates_the_session() {
    let store = SessionStore::new(&SessionConfig::default());
    let session_id = store.issue("user-42");
    assert!(store.is_active(&session_id));

    let terminator = LocalSessionTerminator::new(store.clone(), session_id.clone());
    terminator.terminate().await.expect("first termination succeeds");
    assert!(!store.is_active(&session_id));

    let err = terminator.terminate().await.expect_err("second termination fails");
    assert!(matches!(err, IdentityError::Auth { .. }));
}

#[test]
fn session_store_issue_and_terminate() {
    let store = SessionStore::new(&SessionConfig::default());

    let a = store.issue("alice");
    let b = store.issue("bob");
    assert_ne!(a, b);

    assert_eq!(store.get(&a).map(|s| s.user_id), Some("alice".to_owned()));
    assert!(store.terminate(&a));
    assert!(!store.terminate(&a), "terminating twice is a no-op");
    assert!(store.is_active(&b), "other sessions are untouched");
}
