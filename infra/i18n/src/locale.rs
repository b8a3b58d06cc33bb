use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported locales.
///
/// [`Locale::En`] is the default; [`Locale::ALL`] is the complete set used for
/// route pre-generation.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// Malay.
    Ms,
    /// Chinese.
    Zh,
}

impl Locale {
    /// Every supported locale, in route-generation order.
    pub const ALL: [Self; 3] = [Self::En, Self::Ms, Self::Zh];

    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ms => "ms",
            Self::Zh => "zh",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let primary = normalized.split(['-', '_']).next()?;
        match primary {
            "en" => Some(Self::En),
            "ms" => Some(Self::Ms),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `{locale}` route parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleParam {
    pub locale: Locale,
}

/// One pre-generated route entry, shaped as `{"params": {"locale": ...}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleParams {
    pub params: LocaleParam,
}

/// Enumerates the static route parameters for every supported locale.
///
/// Pure: always returns exactly one entry per member of [`Locale::ALL`].
#[must_use]
pub fn static_params() -> [LocaleParams; 3] {
    Locale::ALL.map(|locale| LocaleParams { params: LocaleParam { locale } })
}
