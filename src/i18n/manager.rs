//! Active-language state.
//!
//! `LanguageManager` is an ordinary value: create one per session (or per
//! test) and hand it to whatever renders. It owns the preference store and
//! the document it reflects direction into.

use crate::i18n::{
    Catalog, Direction, DocumentContext, I18nError, Language, MetricsReport, PreferenceStore,
    Translation, TranslationMetrics, LANGUAGE_STORAGE_KEY,
};
use tracing::{debug, info, warn};

pub struct LanguageManager<S, D> {
    language: Language,
    store: S,
    document: D,
    catalog: &'static Catalog,
    metrics: TranslationMetrics,
}

impl<S: PreferenceStore, D: DocumentContext> LanguageManager<S, D> {
    /// Create a manager over the embedded catalog.
    ///
    /// The stored preference is read once here. Anything other than a
    /// supported code (absent, unreadable, unknown) starts in the canonical
    /// language. The document is synced before returning.
    pub fn new(store: S, document: D) -> Self {
        Self::with_catalog(store, document, Catalog::get())
    }

    pub fn with_catalog(store: S, document: D, catalog: &'static Catalog) -> Self {
        let language = restore_language(&store);
        let mut manager = Self {
            language,
            store,
            document,
            catalog,
            metrics: TranslationMetrics::new(),
        };
        manager.sync_document();
        manager
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the active language.
    ///
    /// Updates in-memory state, then persists, then updates the document.
    /// A failed write is logged and counted but does not stop the switch.
    pub fn set_language(&mut self, language: Language) {
        let previous = self.language;
        self.language = language;
        self.metrics.record_language_change();

        if let Err(e) = self.store.write(LANGUAGE_STORAGE_KEY, language.code()) {
            warn!(
                "Failed to persist language '{}', keeping it for this session only: {}",
                language.code(),
                e
            );
            self.metrics.record_persist_failure();
        }

        self.sync_document();

        if previous != language {
            info!("Language changed: {} -> {}", previous, language);
        }
    }

    /// Switch using an untyped code. Unsupported codes are rejected and
    /// leave every piece of state untouched.
    pub fn set_language_code(&mut self, code: &str) -> Result<Language, I18nError> {
        let language = Language::from_code(code)?;
        self.set_language(language);
        Ok(language)
    }

    /// Switch to the other supported language and return it.
    pub fn toggle(&mut self) -> Language {
        let next = self.language.other();
        self.set_language(next);
        next
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Resolve a dotted key in the active language.
    ///
    /// Never fails: an unknown key comes back as `Translation::Missing(key)`
    /// so it shows up verbatim in the rendered page. There is no fallback to
    /// the other language.
    pub fn translate<'a>(&'a self, key: &'a str) -> Translation<'a> {
        match self.catalog.lookup(self.language, key) {
            Some(message) => {
                self.metrics.record_lookup();
                Translation::from_message(message)
            }
            None => {
                self.metrics.record_missing_key();
                debug!("Missing translation for '{}' in '{}'", key, self.language);
                Translation::Missing(key)
            }
        }
    }

    /// `translate` rendered to an owned string. List leaves are comma-joined.
    pub fn t(&self, key: &str) -> String {
        self.translate(key).to_string()
    }

    /// Items of a list leaf. A text leaf or a missing key yields one item.
    pub fn translate_list(&self, key: &str) -> Vec<String> {
        self.translate(key).items()
    }

    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_parts(self) -> (S, D) {
        (self.store, self.document)
    }

    fn sync_document(&mut self) {
        self.document.set_direction(self.language.direction());
        self.document.set_locale(self.language.code());
    }
}

fn restore_language<S: PreferenceStore>(store: &S) -> Language {
    match store.read(LANGUAGE_STORAGE_KEY) {
        Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|e| {
            warn!("Ignoring stored language preference: {}", e);
            Language::canonical()
        }),
        Ok(None) => Language::canonical(),
        Err(e) => {
            warn!("Could not read stored language preference: {}", e);
            Language::canonical()
        }
    }
}
