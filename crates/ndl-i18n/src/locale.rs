#![forbid(unsafe_code)]

//! Supported interface languages and the page's current-language cell.

use std::fmt;
use std::str::FromStr;

/// An interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English.
    En,
    /// French, the default.
    #[default]
    Fr,
}

impl Locale {
    /// Every supported locale, in selector order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// BCP-47 language tag used as the catalog key.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Name of the language in that language.
    #[must_use]
    pub const fn native_label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Fran\u{e7}ais",
        }
    }

    /// The other supported language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Fr,
            Self::Fr => Self::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A tag that names no supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocaleError(String);

impl fmt::Display for ParseLocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale '{}' (expected en or fr)", self.0)
    }
}

impl std::error::Error for ParseLocaleError {}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    /// Accepts `en`, `fr`, and region-qualified forms such as `fr-FR` or
    /// `en_US`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let primary = trimmed.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            _ => Err(ParseLocaleError(trimmed.to_string())),
        }
    }
}

/// The page's current language.
///
/// Owned by the page and passed down explicitly. `changes` counts effective
/// switches so views can tell when re-rendering text is needed.
#[derive(Debug, Clone, Default)]
pub struct LocaleSetting {
    current: Locale,
    changes: u64,
}

impl LocaleSetting {
    /// Start in `locale`.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            current: locale,
            changes: 0,
        }
    }

    /// Current language.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Locale {
        self.current
    }

    /// Switch to `locale`. Returns `true` if the language changed.
    pub fn set(&mut self, locale: Locale) -> bool {
        if self.current == locale {
            return false;
        }
        self.current = locale;
        self.changes += 1;
        true
    }

    /// Switch to the other language and return it.
    pub fn toggle(&mut self) -> Locale {
        self.set(self.current.toggled());
        self.current
    }

    /// Number of effective switches so far.
    #[inline]
    #[must_use]
    pub fn changes(&self) -> u64 {
        self.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_french() {
        assert_eq!(Locale::default(), Locale::Fr);
        assert_eq!(LocaleSetting::default().get(), Locale::Fr);
    }

    #[test]
    fn parse_accepts_regions_and_case() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("FR".parse::<Locale>(), Ok(Locale::Fr));
        assert_eq!("fr-FR".parse::<Locale>(), Ok(Locale::Fr));
        assert_eq!(" en_US ".parse::<Locale>(), Ok(Locale::En));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "de".parse::<Locale>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported locale 'de' (expected en or fr)");
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn labels_and_tags() {
        assert_eq!(Locale::En.tag(), "en");
        assert_eq!(Locale::Fr.native_label(), "Fran\u{e7}ais");
        assert_eq!(Locale::En.to_string(), "en");
    }

    #[test]
    fn set_counts_only_effective_changes() {
        let mut s = LocaleSetting::new(Locale::Fr);
        assert!(!s.set(Locale::Fr));
        assert_eq!(s.changes(), 0);
        assert!(s.set(Locale::En));
        assert_eq!(s.get(), Locale::En);
        assert_eq!(s.changes(), 1);
    }

    #[test]
    fn toggle_alternates() {
        let mut s = LocaleSetting::default();
        assert_eq!(s.toggle(), Locale::En);
        assert_eq!(s.toggle(), Locale::Fr);
        assert_eq!(s.changes(), 2);
    }
}
