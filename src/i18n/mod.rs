//! Internationalization (i18n) module: the bilingual content layer.
//!
//! # Architecture
//!
//! - `registry`: the supported languages and their metadata
//! - `language`: validated `Language` type
//! - `catalog`: embedded English/Arabic string catalog, flattened by key path
//! - `document`: `dir`/`lang` attributes of the rendered document
//! - `storage`: persistence of the language preference
//! - `manager`: the active-language state container consumers talk to
//! - `validator`: catalog completeness lint
//! - `metrics`: lookup and switch counters
//!
//! # Example
//!
//! ```
//! use awards_site::i18n::{DocumentAttributes, Language, LanguageManager, MemoryStore};
//!
//! let mut i18n = LanguageManager::new(MemoryStore::new(), DocumentAttributes::default());
//! assert_eq!(i18n.t("nav.home"), "Home");
//!
//! i18n.set_language(Language::ARABIC);
//! assert!(i18n.is_rtl());
//! assert_eq!(i18n.document().html_open_tag(), "<html lang=\"ar\" dir=\"rtl\">");
//! ```

mod catalog;
mod document;
mod error;
mod language;
mod manager;
mod metrics;
mod registry;
mod storage;
mod validator;

pub use catalog::{Catalog, Message, Translation};
pub use document::{Direction, DocumentAttributes, DocumentContext};
pub use error::{I18nError, StorageError};
pub use language::Language;
pub use manager::LanguageManager;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use storage::{FileStore, MemoryStore, PreferenceStore, LANGUAGE_STORAGE_KEY};
pub use validator::{CatalogValidator, ValidationReport};
