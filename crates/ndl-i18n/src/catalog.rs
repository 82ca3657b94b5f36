#![forbid(unsafe_code)]

//! String catalogs keyed by locale tag and dotted key.
//!
//! A [`StringCatalog`] maps locale tags (`"en"`, `"fr"`) to [`LocaleStrings`].
//! Lookups try the requested locale first, then each locale of the fallback
//! chain in order. Dictionaries can be built in code or loaded from nested
//! JSON documents whose object paths become dotted keys:
//!
//! ```
//! use ndl_i18n::catalog::LocaleStrings;
//!
//! let strings = LocaleStrings::from_json_str(r#"{ "hero": { "title": "Welcome" } }"#).unwrap();
//! assert_eq!(strings.get("hero.title"), Some("Welcome"));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use serde_json::Value;

/// Errors raised while loading catalog data.
#[derive(Debug)]
pub enum I18nError {
    /// The document is not valid JSON.
    Json(serde_json::Error),
    /// The document root is not a JSON object.
    NotAnObject,
    /// A leaf is neither a string nor a nested object.
    UnsupportedValue {
        /// Dotted path of the offending leaf.
        key: String,
    },
    /// The locale tag is not registered in the catalog.
    UnknownLocale(String),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "invalid locale JSON: {e}"),
            Self::NotAnObject => write!(f, "locale document root must be an object"),
            Self::UnsupportedValue { key } => {
                write!(f, "locale entry '{key}' must be a string or an object")
            }
            Self::UnknownLocale(tag) => write!(f, "unknown locale '{tag}'"),
        }
    }
}

impl std::error::Error for I18nError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for I18nError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// All strings for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStrings {
    entries: BTreeMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a nested JSON object, flattening object paths into dotted keys.
    pub fn from_json_str(json: &str) -> Result<Self, I18nError> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(map) = root else {
            return Err(I18nError::NotAnObject);
        };
        let mut strings = Self::new();
        for (key, value) in map {
            flatten_into(&mut strings, key, value)?;
        }
        Ok(strings)
    }

    /// Insert or replace a string.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a string.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn flatten_into(strings: &mut LocaleStrings, path: String, value: Value) -> Result<(), I18nError> {
    match value {
        Value::String(s) => {
            strings.insert(path, s);
            Ok(())
        }
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(strings, format!("{path}.{key}"), child)?;
            }
            Ok(())
        }
        _ => Err(I18nError::UnsupportedValue { key: path }),
    }
}

/// Locale-aware string store with a fallback chain.
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: HashMap<String, LocaleStrings>,
    fallback_chain: Vec<String>,
}

impl StringCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the strings for `tag`.
    pub fn add_locale(&mut self, tag: impl Into<String>, strings: LocaleStrings) {
        self.locales.insert(tag.into(), strings);
    }

    /// Load a nested JSON dictionary for `tag`.
    pub fn add_locale_json(&mut self, tag: impl Into<String>, json: &str) -> Result<(), I18nError> {
        let strings = LocaleStrings::from_json_str(json)?;
        self.add_locale(tag, strings);
        Ok(())
    }

    /// Locales consulted, in order, when the requested one lacks a key.
    pub fn set_fallback_chain(&mut self, chain: Vec<String>) {
        self.fallback_chain = chain;
    }

    /// The configured fallback chain.
    #[must_use]
    pub fn fallback_chain(&self) -> &[String] {
        &self.fallback_chain
    }

    /// Resolve `key` for `locale`, then along the fallback chain.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        std::iter::once(locale)
            .chain(self.fallback_chain.iter().map(String::as_str))
            .filter_map(|tag| self.locales.get(tag))
            .find_map(|strings| strings.get(key))
    }

    /// Resolve `key` and replace each `{name}` with its argument.
    ///
    /// Placeholders without a matching argument are left untouched.
    /// Substituted values are never re-scanned for placeholders.
    #[must_use]
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, key).map(|template| interpolate(template, args))
    }

    /// Strings for exactly `tag`, without fallback.
    pub fn locale(&self, tag: &str) -> Result<&LocaleStrings, I18nError> {
        self.locales
            .get(tag)
            .ok_or_else(|| I18nError::UnknownLocale(tag.to_string()))
    }

    /// Registered locale tags, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// How many of all known keys each locale defines on its own.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let all_keys: BTreeSet<&str> = self.locales.values().flat_map(LocaleStrings::keys).collect();
        let mut locales: Vec<LocaleCoverage> = self
            .locales
            .iter()
            .map(|(tag, strings)| {
                let missing: Vec<String> = all_keys
                    .iter()
                    .filter(|k| !strings.contains(k))
                    .map(|k| (*k).to_string())
                    .collect();
                let present = all_keys.len() - missing.len();
                let coverage_percent = if all_keys.is_empty() {
                    100.0
                } else {
                    present as f32 * 100.0 / all_keys.len() as f32
                };
                LocaleCoverage {
                    locale: tag.clone(),
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();
        locales.sort_by(|a, b| a.locale.cmp(&b.locale));
        CoverageReport {
            total_keys: all_keys.len(),
            locales,
        }
    }
}

/// Coverage of one locale against the union of keys.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCoverage {
    /// Locale tag.
    pub locale: String,
    /// Keys the locale defines.
    pub present: usize,
    /// Keys other locales define but this one does not, sorted.
    pub missing: Vec<String>,
    /// `present / total_keys` as a percentage in `[0, 100]`.
    pub coverage_percent: f32,
}

/// Per-locale coverage for a whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Size of the union of keys across locales.
    pub total_keys: usize,
    /// One entry per locale, sorted by tag.
    pub locales: Vec<LocaleCoverage>,
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StringCatalog {
        let mut catalog = StringCatalog::new();
        let mut en = LocaleStrings::new();
        en.insert("greeting", "Hello");
        en.insert("welcome", "Welcome, {name}!");
        en.insert("only.en", "English only");
        catalog.add_locale("en", en);
        let mut fr = LocaleStrings::new();
        fr.insert("greeting", "Bonjour");
        fr.insert("only.fr", "Seulement en fran\u{e7}ais");
        catalog.add_locale("fr", fr);
        catalog.set_fallback_chain(vec!["fr".into()]);
        catalog
    }

    #[test]
    fn direct_lookup() {
        let c = sample();
        assert_eq!(c.get("en", "greeting"), Some("Hello"));
        assert_eq!(c.get("fr", "greeting"), Some("Bonjour"));
    }

    #[test]
    fn fallback_lookup() {
        let c = sample();
        assert_eq!(c.get("en", "only.fr"), Some("Seulement en fran\u{e7}ais"));
        assert_eq!(c.get("fr", "only.en"), None);
        assert_eq!(c.get("de", "greeting"), Some("Bonjour"));
    }

    #[test]
    fn format_substitutes_named_args() {
        let c = sample();
        assert_eq!(
            c.format("en", "welcome", &[("name", "Amina")]).as_deref(),
            Some("Welcome, Amina!")
        );
    }

    #[test]
    fn interpolation_edge_cases() {
        assert_eq!(interpolate("{a}{b}", &[("a", "1"), ("b", "2")]), "12");
        assert_eq!(interpolate("{missing}", &[]), "{missing}");
        assert_eq!(interpolate("open { only", &[]), "open { only");
        assert_eq!(interpolate("{a}", &[("a", "{a}")]), "{a}");
        assert_eq!(interpolate("", &[("a", "x")]), "");
    }

    #[test]
    fn json_is_flattened() {
        let strings = LocaleStrings::from_json_str(
            r#"{ "hero": { "title": "T", "search": { "button": "Go" } }, "top": "x" }"#,
        )
        .unwrap();
        assert_eq!(strings.get("hero.title"), Some("T"));
        assert_eq!(strings.get("hero.search.button"), Some("Go"));
        assert_eq!(strings.get("top"), Some("x"));
        assert_eq!(strings.len(), 3);
    }

    #[test]
    fn json_rejects_non_object_root() {
        assert!(matches!(
            LocaleStrings::from_json_str("[1, 2]"),
            Err(I18nError::NotAnObject)
        ));
    }

    #[test]
    fn json_rejects_non_string_leaf() {
        let err = LocaleStrings::from_json_str(r#"{ "a": { "b": 3 } }"#).unwrap_err();
        assert!(matches!(err, I18nError::UnsupportedValue { ref key } if key == "a.b"));
        assert_eq!(err.to_string(), "locale entry 'a.b' must be a string or an object");
    }

    #[test]
    fn json_syntax_error_has_source() {
        let err = LocaleStrings::from_json_str("{").unwrap_err();
        assert!(matches!(err, I18nError::Json(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn unknown_locale_is_an_error() {
        let c = sample();
        assert!(c.locale("en").is_ok());
        assert!(matches!(c.locale("ja"), Err(I18nError::UnknownLocale(tag)) if tag == "ja"));
    }

    #[test]
    fn coverage_report_lists_missing_keys() {
        let report = sample().coverage_report();
        assert_eq!(report.total_keys, 4);
        let en = &report.locales[0];
        assert_eq!(en.locale, "en");
        assert_eq!(en.present, 3);
        assert_eq!(en.missing, vec!["only.fr".to_string()]);
        let fr = &report.locales[1];
        assert_eq!(fr.missing, vec!["only.en".to_string(), "welcome".to_string()]);
        assert!((fr.coverage_percent - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn locales_sorted() {
        assert_eq!(sample().locales(), vec!["en", "fr"]);
    }
}
