//! Property-based invariant tests for the localization catalog.
//!
//! 1. A key present in the requested locale always wins over the fallback
//! 2. A key missing everywhere resolves to `None` (and `t` echoes the key)
//! 3. Interpolation without placeholders is the identity
//! 4. Every `{name}` with an argument is replaced; values are not re-scanned
//! 5. Coverage percentages stay in `[0, 100]` and `present + missing == total`
//! 6. Flattened JSON keys round-trip through dotted lookup

use ndl_i18n::{Locale, LocaleStrings, StringCatalog, Translator};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(\\.[a-z]{1,6}){0,2}"
}

fn text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.!?]{0,24}"
}

fn catalog_from(en: &[(String, String)], fr: &[(String, String)]) -> StringCatalog {
    let mut catalog = StringCatalog::new();
    let mut en_strings = LocaleStrings::new();
    for (k, v) in en {
        en_strings.insert(k.clone(), v.clone());
    }
    let mut fr_strings = LocaleStrings::new();
    for (k, v) in fr {
        fr_strings.insert(k.clone(), v.clone());
    }
    catalog.add_locale("en", en_strings);
    catalog.add_locale("fr", fr_strings);
    catalog.set_fallback_chain(vec!["fr".into()]);
    catalog
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Resolution order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn requested_locale_wins(key in key_strategy(), en in text_strategy(), fr in text_strategy()) {
        let catalog = catalog_from(&[(key.clone(), en.clone())], &[(key.clone(), fr.clone())]);
        prop_assert_eq!(catalog.get("en", &key), Some(en.as_str()));
        prop_assert_eq!(catalog.get("fr", &key), Some(fr.as_str()));
    }

    #[test]
    fn missing_key_echoes(key in key_strategy()) {
        let catalog = catalog_from(&[], &[]);
        prop_assert_eq!(catalog.get("en", &key), None);
        let tr = Translator::new(&catalog, Locale::En);
        prop_assert_eq!(tr.t(&key), key.as_str());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Interpolation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn plain_text_is_unchanged(text in text_strategy(), value in text_strategy()) {
        let catalog = catalog_from(&[("k".into(), text.clone())], &[]);
        prop_assert_eq!(catalog.format("en", "k", &[("name", value.as_str())]), Some(text));
    }

    #[test]
    fn placeholders_are_replaced_once(
        before in text_strategy(),
        after in text_strategy(),
        value in "[a-z{}]{0,12}",
    ) {
        let template = format!("{before}{{name}}{after}");
        let catalog = catalog_from(&[("k".into(), template)], &[]);
        let out = catalog.format("en", "k", &[("name", value.as_str())]);
        prop_assert_eq!(out, Some(format!("{before}{value}{after}")));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Coverage bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn coverage_is_bounded(
        en in proptest::collection::vec((key_strategy(), text_strategy()), 0..12),
        fr in proptest::collection::vec((key_strategy(), text_strategy()), 0..12),
    ) {
        let report = catalog_from(&en, &fr).coverage_report();
        for locale in &report.locales {
            prop_assert!((0.0..=100.0).contains(&locale.coverage_percent));
            prop_assert_eq!(locale.present + locale.missing.len(), report.total_keys);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. JSON flattening
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nested_json_flattens_to_dotted_keys(
        section in "[a-z]{1,8}",
        leaf in "[a-z]{1,8}",
        text in text_strategy(),
    ) {
        let json = serde_json::json!({ section.clone(): { leaf.clone(): text.clone() } }).to_string();
        let strings = LocaleStrings::from_json_str(&json).unwrap();
        prop_assert_eq!(strings.get(&format!("{section}.{leaf}")), Some(text.as_str()));
        prop_assert_eq!(strings.len(), 1);
    }
}
