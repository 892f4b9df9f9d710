//! Integration tests for the bilingual content layer
//!
//! These tests drive the public API the way the site does: one manager per
//! session, a durable store underneath, pages rendered on top.

use awards_site::i18n::{
    Catalog, CatalogValidator, Direction, DocumentAttributes, FileStore, Language,
    LanguageManager, MemoryStore, Translation, LANGUAGE_STORAGE_KEY,
};
use awards_site::pages;
use proptest::prelude::*;
use tempfile::TempDir;

// ==================== Test Helpers ====================

fn session() -> LanguageManager<MemoryStore, DocumentAttributes> {
    LanguageManager::new(MemoryStore::new(), DocumentAttributes::default())
}

fn file_session(dir: &TempDir) -> LanguageManager<FileStore, DocumentAttributes> {
    LanguageManager::new(
        FileStore::new(dir.path().join("preferences.json")),
        DocumentAttributes::default(),
    )
}

// ==================== Scenario Tests ====================

#[test]
fn test_first_visit_with_empty_storage() {
    let i18n = session();

    assert_eq!(i18n.language().code(), "en");
    assert!(!i18n.is_rtl());
    assert_eq!(i18n.translate("nav.home"), "Home");
    assert_eq!(i18n.document().dir, Direction::Ltr);
}

#[test]
fn test_switch_to_arabic() {
    let mut i18n = session();
    i18n.set_language(Language::ARABIC);

    assert!(i18n.is_rtl());
    assert_eq!(i18n.translate("nav.home"), "الرئيسية");
    assert_eq!(i18n.document().dir.as_str(), "rtl");
    assert_eq!(i18n.document().lang, "ar");
}

#[test]
fn test_copyright_keeps_year_placeholder() {
    let i18n = session();
    assert_eq!(
        i18n.t("footer.copyright"),
        "© {year} ONE UAE International Business Awards"
    );
}

#[test]
fn test_unknown_key_is_returned_verbatim() {
    let i18n = session();
    let key = "this.key.does.not.exist";
    assert_eq!(i18n.translate(key), Translation::Missing(key));
    assert_eq!(i18n.t(key), "this.key.does.not.exist");
}

// ==================== Persistence Tests ====================

#[test]
fn test_language_survives_restart() {
    let dir = TempDir::new().unwrap();

    let mut first = file_session(&dir);
    first.set_language(Language::ARABIC);
    drop(first);

    let second = file_session(&dir);
    assert_eq!(second.language(), Language::ARABIC);
    assert!(second.is_rtl());
    assert_eq!(second.document().dir, Direction::Rtl);
}

#[test]
fn test_preference_file_holds_language_key() {
    let dir = TempDir::new().unwrap();
    let mut i18n = file_session(&dir);
    i18n.set_language(Language::ARABIC);

    let contents = std::fs::read_to_string(dir.path().join("preferences.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(stored[LANGUAGE_STORAGE_KEY], "ar");
}

#[test]
fn test_switching_back_persists_english() {
    let dir = TempDir::new().unwrap();

    let mut i18n = file_session(&dir);
    i18n.set_language(Language::ARABIC);
    i18n.set_language(Language::ENGLISH);
    drop(i18n);

    assert_eq!(file_session(&dir).language(), Language::ENGLISH);
}

#[test]
fn test_corrupt_preference_file_starts_in_english() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("preferences.json"), "not json").unwrap();

    let mut i18n = file_session(&dir);
    assert_eq!(i18n.language(), Language::ENGLISH);

    // The next switch repairs the file.
    i18n.set_language(Language::ARABIC);
    drop(i18n);
    assert_eq!(file_session(&dir).language(), Language::ARABIC);
}

// ==================== Catalog Completeness Tests ====================

#[test]
fn test_every_key_resolves_in_every_language() {
    let catalog = Catalog::get();
    let mut i18n = session();

    for source in Language::all() {
        for key in catalog.keys(source) {
            for target in Language::all() {
                i18n.set_language(target);
                assert!(
                    i18n.translate(key).is_found(),
                    "'{}' from '{}' is missing in '{}'",
                    key,
                    source,
                    target
                );
            }
        }
    }
}

#[test]
fn test_catalog_lint_is_clean() {
    let report = CatalogValidator::validate(Catalog::get());
    assert!(report.is_clean(), "{:#?}", report);
}

#[test]
fn test_languages_never_share_text_for_headings() {
    let catalog = Catalog::get();
    for key in ["nav.home", "hero.title", "forms.nomineeInfo", "footer.rights"] {
        assert_ne!(
            catalog.lookup(Language::ENGLISH, key),
            catalog.lookup(Language::ARABIC, key),
            "'{}' looks untranslated",
            key
        );
    }
}

// ==================== Rendering Tests ====================

#[test]
fn test_page_follows_language_switch() {
    let mut i18n = session();
    let english = pages::render_home(&i18n);
    i18n.toggle();
    let arabic = pages::render_home(&i18n);

    assert!(english.contains("dir=\"ltr\""));
    assert!(arabic.contains("dir=\"rtl\""));
    assert!(arabic.contains("معلومات المرشح"));
    assert!(!arabic.contains("Nominee Information"));
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_absent_keys_fall_back_to_themselves(key in "[a-zA-Z0-9_.]{0,40}", arabic in any::<bool>()) {
        let mut i18n = session();
        if arabic {
            i18n.set_language(Language::ARABIC);
        }
        prop_assume!(!i18n.catalog().contains(i18n.language(), &key));

        prop_assert_eq!(i18n.t(&key), key.clone());
        prop_assert_eq!(i18n.translate(&key), Translation::Missing(&key));
    }

    #[test]
    fn prop_rtl_matches_language_after_any_sequence(steps in proptest::collection::vec(any::<bool>(), 0..20)) {
        let mut i18n = session();
        for to_arabic in steps {
            let target = if to_arabic { Language::ARABIC } else { Language::ENGLISH };
            i18n.set_language(target);

            prop_assert_eq!(i18n.language(), target);
            prop_assert_eq!(i18n.is_rtl(), target == Language::ARABIC);
            prop_assert_eq!(i18n.document().dir, i18n.direction());
            prop_assert_eq!(i18n.document().lang.as_str(), target.code());
        }
    }

    #[test]
    fn prop_unsupported_codes_are_rejected(code in "[a-z]{0,5}") {
        prop_assume!(code != "en" && code != "ar");

        let mut i18n = session();
        i18n.set_language(Language::ARABIC);
        prop_assert!(i18n.set_language_code(&code).is_err());
        prop_assert_eq!(i18n.language(), Language::ARABIC);
    }
}
