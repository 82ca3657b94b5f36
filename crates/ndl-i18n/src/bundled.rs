#![forbid(unsafe_code)]

//! English and French dictionaries compiled into the binary.

use crate::catalog::{I18nError, StringCatalog};
use crate::locale::Locale;

const EN_JSON: &str = include_str!("../locales/en.json");
const FR_JSON: &str = include_str!("../locales/fr.json");

/// Build the landing-page catalog: `en` and `fr`, falling back to `fr`.
pub fn landing_catalog() -> Result<StringCatalog, I18nError> {
    let mut catalog = StringCatalog::new();
    catalog.add_locale_json(Locale::En.tag(), EN_JSON)?;
    catalog.add_locale_json(Locale::Fr.tag(), FR_JSON)?;
    catalog.set_fallback_chain(vec![Locale::default().tag().to_string()]);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Translator;

    #[test]
    fn bundled_catalog_loads() {
        let catalog = landing_catalog().unwrap();
        assert_eq!(catalog.locales(), vec!["en", "fr"]);
        assert_eq!(catalog.fallback_chain(), &["fr".to_string()]);
    }

    #[test]
    fn both_locales_translate_navigation() {
        let catalog = landing_catalog().unwrap();
        let en = Translator::new(&catalog, Locale::En);
        let fr = Translator::new(&catalog, Locale::Fr);
        assert_eq!(en.t("header.about"), "About");
        assert_eq!(fr.t("header.about"), "\u{c0} propos");
        assert_eq!(en.t("hero.searchButton"), "Search");
    }

    #[test]
    fn statistics_title_is_not_shipped() {
        let catalog = landing_catalog().unwrap();
        for locale in Locale::ALL {
            let tr = Translator::new(&catalog, locale);
            assert_eq!(tr.t("statistics.title"), "statistics.title");
            assert_eq!(
                tr.t_or("statistics.title", "Trusted Institutional Authority"),
                "Trusted Institutional Authority"
            );
        }
    }

    #[test]
    fn unshipped_keys_use_literal_defaults() {
        let catalog = landing_catalog().unwrap();
        for locale in Locale::ALL {
            let tr = Translator::new(&catalog, locale);
            assert_eq!(tr.t_or("statistics.users", "Active Users"), "Active Users");
            assert_eq!(tr.t_or("statistics.trust", "fallback"), "fallback");
        }
    }

    #[test]
    fn copyright_interpolates_year() {
        let catalog = landing_catalog().unwrap();
        let en = Translator::new(&catalog, Locale::En);
        assert_eq!(
            en.format("footer.copyrightNotice", &[("year", "2026")]),
            "Copyright \u{a9} 2026"
        );
    }

    #[test]
    fn bundled_locales_share_every_key() {
        let report = landing_catalog().unwrap().coverage_report();
        assert_eq!(report.locales.len(), Locale::ALL.len());
        for locale in &report.locales {
            assert!(
                locale.missing.is_empty(),
                "{} is missing {:?}",
                locale.locale,
                locale.missing
            );
            assert_eq!(locale.present, report.total_keys);
        }
    }
}
