//! # Localization
//!
//! Translation bundles for the supported locale set and helpers for
//! pre-generating localized routes.
//!
//! A [`Bundle`] is a key-to-translated-string map for one locale and a list of
//! namespaces (default: `common`). Catalogs are embedded into the binary; an
//! on-disk directory can override them for operator-supplied translations.
//!
//! A missing locale/namespace pair is a hard [`I18nError::MissingBundle`]:
//! rendering with silently absent translations is worse than failing loudly.
//!
//! ## Example
//!
//! ```rust
//! use bhub_i18n::{Locale, Localizer};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), bhub_i18n::I18nError> {
//! let localizer = Localizer::new();
//! let bundle = localizer.load_default(Locale::En).await?;
//! assert_eq!(bundle.text("dashboard.budgets.title"), "Budgets");
//! # Ok(())
//! # }
//! ```

mod locale;

pub use locale::{Locale, LocaleParam, LocaleParams, static_params};

use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Namespaces loaded when the caller does not ask for specific ones.
pub const DEFAULT_NAMESPACES: &[&str] = &["common"];

/// Errors surfaced while loading translation bundles.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// No catalog exists for the locale/namespace pair.
    #[error("Missing translation bundle for locale `{locale}`, namespace `{namespace}`")]
    MissingBundle { locale: Locale, namespace: String },
    /// The catalog exists but is not a valid flat JSON string map.
    #[error("Malformed catalog for namespace `{namespace}`: {source}")]
    Parse {
        namespace: String,
        #[source]
        source: serde_json::Error,
    },
    /// Filesystem failure while reading an on-disk catalog.
    #[error("Failed to read catalog `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A merged set of key-to-translated-string mappings for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    locale: Locale,
    entries: HashMap<String, String>,
}

impl Bundle {
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Looks up a key, falling back to the key itself when untranslated.
    ///
    /// Missing *bundles* fail at load time; a missing *key* degrades to its
    /// identifier so the UI stays legible during catalog churn.
    #[must_use]
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map_or(key, String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Loads translation bundles from embedded catalogs or an on-disk override.
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    bundle_dir: Option<PathBuf>,
}

impl Localizer {
    /// A localizer backed by the catalogs embedded at compile time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A localizer reading catalogs from `<dir>/<locale>/<namespace>.json`.
    #[must_use]
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { bundle_dir: Some(dir.into()) }
    }

    /// Loads and merges the requested namespaces for one locale.
    ///
    /// # Errors
    /// * [`I18nError::MissingBundle`] if any requested namespace has no catalog.
    /// * [`I18nError::Parse`] if a catalog is not a flat JSON string map.
    /// * [`I18nError::Io`] if an on-disk catalog cannot be read.
    pub async fn load(&self, locale: Locale, namespaces: &[&str]) -> Result<Bundle, I18nError> {
        let mut entries = HashMap::new();

        for namespace in namespaces {
            let raw = self.read_catalog(locale, namespace).await?;
            let parsed: HashMap<String, String> = serde_json::from_str(&raw)
                .map_err(|source| I18nError::Parse { namespace: (*namespace).to_owned(), source })?;
            entries.extend(parsed);
        }

        debug!(%locale, keys = entries.len(), "Loaded translation bundle");
        Ok(Bundle { locale, entries })
    }

    /// Loads the default namespace set ([`DEFAULT_NAMESPACES`]).
    ///
    /// # Errors
    /// Same as [`Localizer::load`].
    pub async fn load_default(&self, locale: Locale) -> Result<Bundle, I18nError> {
        self.load(locale, DEFAULT_NAMESPACES).await
    }

    async fn read_catalog(&self, locale: Locale, namespace: &str) -> Result<String, I18nError> {
        if let Some(dir) = &self.bundle_dir {
            let path = dir.join(locale.as_str()).join(format!("{namespace}.json"));
            return match tokio::fs::read_to_string(&path).await {
                Ok(raw) => Ok(raw),
                Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                    Err(I18nError::MissingBundle { locale, namespace: namespace.to_owned() })
                },
                Err(source) => Err(I18nError::Io { path, source }),
            };
        }

        embedded_catalog(locale, namespace)
            .map(str::to_owned)
            .ok_or_else(|| I18nError::MissingBundle { locale, namespace: namespace.to_owned() })
    }
}

fn embedded_catalog(locale: Locale, namespace: &str) -> Option<&'static str> {
    match (locale, namespace) {
        (Locale::En, "common") => Some(include_str!("../locales/en/common.json")),
        (Locale::Ms, "common") => Some(include_str!("../locales/ms/common.json")),
        (Locale::Zh, "common") => Some(include_str!("../locales/zh/common.json")),
        _ => None,
    }
}
