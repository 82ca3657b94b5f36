#![forbid(unsafe_code)]

//! Localization for the National Digital Library landing page.
//!
//! Provides externalized string storage with dotted-key lookup, locale
//! fallback chains, `{name}` interpolation, and the bundled English and
//! French dictionaries.
//!
//! # How it fits in the system
//! The page owns a [`LocaleSetting`] and a [`StringCatalog`]; each render
//! builds a [`Translator`] from both and passes it to the sections. The
//! current language is never read from global state.

pub mod bundled;
pub mod catalog;
pub mod locale;

pub use bundled::landing_catalog;
pub use catalog::{CoverageReport, I18nError, LocaleCoverage, LocaleStrings, StringCatalog};
pub use locale::{Locale, LocaleSetting, ParseLocaleError};

/// Lookup handle binding a catalog to one locale.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a StringCatalog,
    locale: Locale,
}

impl<'a> Translator<'a> {
    /// Bind `catalog` to `locale`.
    #[must_use]
    pub fn new(catalog: &'a StringCatalog, locale: Locale) -> Self {
        Self { catalog, locale }
    }

    /// Resolve `key`, returning the key itself when it is missing everywhere.
    #[must_use]
    pub fn t<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.catalog.get(self.locale.tag(), key).unwrap_or(key)
    }

    /// Resolve `key`, returning `default` when it is missing everywhere.
    #[must_use]
    pub fn t_or<'k>(&self, key: &str, default: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.catalog.get(self.locale.tag(), key).unwrap_or(default)
    }

    /// Resolve `key` and substitute `{name}` placeholders.
    #[must_use]
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.catalog
            .format(self.locale.tag(), key, args)
            .unwrap_or_else(|| key.to_string())
    }

    /// The bound locale.
    #[inline]
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StringCatalog {
        let mut catalog = StringCatalog::new();
        let mut en = LocaleStrings::new();
        en.insert("hero.title", "Discover our heritage");
        en.insert("footer.year", "Copyright {year}");
        catalog.add_locale("en", en);
        let mut fr = LocaleStrings::new();
        fr.insert("hero.title", "D\u{e9}couvrez notre patrimoine");
        fr.insert("hero.subtitle", "Archives nationales");
        catalog.add_locale("fr", fr);
        catalog.set_fallback_chain(vec!["fr".into()]);
        catalog
    }

    #[test]
    fn t_resolves_current_locale() {
        let c = catalog();
        assert_eq!(Translator::new(&c, Locale::En).t("hero.title"), "Discover our heritage");
        assert_eq!(
            Translator::new(&c, Locale::Fr).t("hero.title"),
            "D\u{e9}couvrez notre patrimoine"
        );
    }

    #[test]
    fn t_falls_back_through_chain() {
        let c = catalog();
        assert_eq!(Translator::new(&c, Locale::En).t("hero.subtitle"), "Archives nationales");
    }

    #[test]
    fn t_returns_key_when_missing() {
        let c = catalog();
        assert_eq!(Translator::new(&c, Locale::En).t("statistics.trust"), "statistics.trust");
    }

    #[test]
    fn t_or_returns_default_when_missing() {
        let c = catalog();
        let tr = Translator::new(&c, Locale::En);
        assert_eq!(tr.t_or("statistics.title", "Our Scale"), "Our Scale");
        assert_eq!(tr.t_or("hero.title", "unused"), "Discover our heritage");
    }

    #[test]
    fn format_interpolates() {
        let c = catalog();
        let tr = Translator::new(&c, Locale::En);
        assert_eq!(tr.format("footer.year", &[("year", "2026")]), "Copyright 2026");
        assert_eq!(tr.format("nope", &[]), "nope");
    }
}
