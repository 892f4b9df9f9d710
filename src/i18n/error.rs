use thiserror::Error;

/// Errors raised by the i18n layer.
///
/// Missing translation keys are deliberately not represented here: lookups
/// fall back to the key itself.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("unsupported language code: '{0}'")]
    UnsupportedLanguage(String),

    #[error("failed to parse catalog for '{language}': {source}")]
    CatalogParse {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog for '{0}' must be a JSON object at the top level")]
    CatalogShape(String),

    #[error("catalog for '{language}' has key '{segment}' under '{parent}': key segments may not contain '.'")]
    DottedSegment {
        language: String,
        parent: String,
        segment: String,
    },
}

/// Errors from a [`PreferenceStore`](crate::i18n::PreferenceStore).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage contents are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("storage is unavailable")]
    Unavailable,
}
