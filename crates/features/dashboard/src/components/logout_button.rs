use crate::app::{CurrentSession, DataEpoch};
use bhub_i18n::Bundle;
use bhub_identity::{LocalSessionTerminator, SessionStore, sign_out};
use dioxus::prelude::*;

/// Router-backed navigation sink for the sign-out flow.
#[derive(Clone)]
struct RouterNavigator {
    router: dioxus::prelude::dioxus_router::Navigator,
    epoch: Signal<DataEpoch>,
}

impl bhub_identity::Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        // Replace, not push: back must not return into an authenticated view.
        self.router.replace(path.to_owned());
    }

    fn refresh(&self) {
        let mut epoch = self.epoch;
        let next = DataEpoch(epoch.peek().0 + 1);
        epoch.set(next);
    }
}

/// Sign-out control for the dashboard header.
///
/// Runs the session-terminate / navigate / refresh sequence; navigation to
/// the login screen happens even if termination fails.
#[component]
pub fn LogoutButton() -> Element {
    let bundle = use_context::<Bundle>();
    let sessions = use_context::<SessionStore>();
    let session = use_context::<CurrentSession>();
    let epoch = use_context::<Signal<DataEpoch>>();
    let label = bundle.text("auth.logout").to_owned();

    rsx! {
        button {
            class: "logout-button",
            onclick: move |_| {
                let terminator =
                    LocalSessionTerminator::new(sessions.clone(), session.0.clone());
                let sink = RouterNavigator { router: navigator(), epoch };
                spawn(async move {
                    sign_out(&terminator, &sink).await;
                });
            },
            "{label}"
        }
    }
}
