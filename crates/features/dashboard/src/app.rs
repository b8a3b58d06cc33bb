use crate::Route;
use bhub_domain::config::ApiConfig;
use bhub_i18n::{Bundle, Locale, Localizer};
use bhub_identity::SessionStore;
use bhub_notify::Toasts;
use dioxus::prelude::*;

/// Monotonic counter bumped whenever the UI must re-fetch everything it shows.
///
/// Data hooks subscribe to the `Signal<DataEpoch>` in context and re-run when
/// it changes; sign-out bumps it after navigation so no stale personal data
/// survives on the login screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataEpoch(pub u64);

/// Id of the session the running shell signed in with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentSession(pub String);

/// Application root.
///
/// Reads an [`ApiConfig`] from launch context (falling back to defaults),
/// provides the shared handles every page expects, then loads the translation
/// bundle for the configured locale before mounting the router. A bundle that
/// fails to load fails the render; pages never show untranslated chrome.
#[component]
pub fn App() -> Element {
    let config = try_consume_context::<ApiConfig>().unwrap_or_default();
    use_context_provider(|| Toasts::new(&config.notify));
    let sessions = use_context_provider(|| SessionStore::new(&config.security.session));
    use_context_provider(|| Signal::new(DataEpoch::default()));
    // The shell runs a single local profile; issue its session up front so
    // sign-out has something to terminate.
    use_context_provider(|| CurrentSession(sessions.issue("local")));

    let locale = Locale::parse(&config.i18n.default_locale).unwrap_or_default();
    let localizer = match &config.i18n.bundle_dir {
        Some(dir) => Localizer::with_dir(dir.clone()),
        None => Localizer::new(),
    };

    let bundle = use_resource(move || {
        let localizer = localizer.clone();
        async move { localizer.load_default(locale).await }
    });

    match &*bundle.read() {
        None => rsx! {
            main { class: "boot", "..." }
        },
        Some(Err(error)) => {
            tracing::error!(%error, "Translation bundle failed to load");
            rsx! {
                main { class: "boot boot-error", "Localization unavailable: {error}" }
            }
        },
        Some(Ok(loaded)) => rsx! {
            Localized { bundle: loaded.clone() }
        },
    }
}

/// Mounts the router once the translation bundle is available in context.
#[component]
fn Localized(bundle: Bundle) -> Element {
    use_context_provider(|| bundle.clone());

    rsx! {
        Router::<Route> {}
    }
}
