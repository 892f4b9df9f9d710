//! The bilingual string catalog.
//!
//! Sources are nested JSON trees under `locales/`, one per language. They are
//! flattened once into `"section.key" -> Message` maps so a lookup is a single
//! hash probe instead of a tree walk.

use crate::i18n::{I18nError, Language};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;
use tracing::{error, warn};

const EMBEDDED_SOURCES: &[(Language, &str)] = &[
    (Language::ENGLISH, include_str!("../../locales/en.json")),
    (Language::ARABIC, include_str!("../../locales/ar.json")),
];

/// A leaf of the catalog tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    List(Vec<String>),
}

impl Message {
    /// `"text"` or `"list"`, used in lint output.
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Text(_) => "text",
            Message::List(_) => "list",
        }
    }
}

/// Result of resolving a key against the active language.
///
/// `Missing` carries the requested key so it can be rendered verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation<'a> {
    Text(&'a str),
    List(&'a [String]),
    Missing(&'a str),
}

impl<'a> Translation<'a> {
    pub fn from_message(message: &'a Message) -> Self {
        match message {
            Message::Text(text) => Translation::Text(text),
            Message::List(items) => Translation::List(items),
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Translation::Missing(_))
    }

    /// The text leaf, or the key on a miss. `None` for list leaves.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Translation::Text(text) | Translation::Missing(text) => Some(text),
            Translation::List(_) => None,
        }
    }

    /// Items of a list leaf. Text and missing keys become a single item.
    pub fn items(&self) -> Vec<String> {
        match *self {
            Translation::List(items) => items.to_vec(),
            Translation::Text(text) | Translation::Missing(text) => vec![text.to_string()],
        }
    }
}

impl fmt::Display for Translation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translation::Text(text) | Translation::Missing(text) => f.write_str(text),
            Translation::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl PartialEq<&str> for Translation<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

/// Flattened message maps for every supported language.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    languages: HashMap<Language, HashMap<String, Message>>,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// The catalog compiled into the binary.
    ///
    /// If the embedded JSON fails to parse, the error is logged and an empty
    /// catalog is used; every lookup then renders its key.
    pub fn get() -> &'static Catalog {
        CATALOG.get_or_init(|| {
            Catalog::from_sources(EMBEDDED_SOURCES).unwrap_or_else(|e| {
                error!("Embedded catalog is invalid: {}", e);
                Catalog::default()
            })
        })
    }

    /// Parse and flatten one JSON source per language.
    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Catalog, I18nError> {
        let mut languages = HashMap::new();

        for (language, raw) in sources {
            let tree: Value =
                serde_json::from_str(raw).map_err(|source| I18nError::CatalogParse {
                    language: language.code().to_string(),
                    source,
                })?;

            if !tree.is_object() {
                return Err(I18nError::CatalogShape(language.code().to_string()));
            }

            let mut messages = HashMap::new();
            flatten(&tree, "", *language, &mut messages)?;
            languages.insert(*language, messages);
        }

        Ok(Catalog { languages })
    }

    /// Resolve a full dotted key. Interior nodes are not addressable.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&Message> {
        self.languages.get(&language)?.get(key)
    }

    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.lookup(language, key).is_some()
    }

    /// Languages that have a source loaded.
    pub fn languages(&self) -> Vec<Language> {
        Language::all()
            .into_iter()
            .filter(|lang| self.languages.contains_key(lang))
            .collect()
    }

    /// All leaf keys of a language, sorted.
    pub fn keys(&self, language: Language) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .languages
            .get(&language)
            .map(|messages| messages.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self, language: Language) -> usize {
        self.languages.get(&language).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self, language: Language) -> bool {
        self.len(language) == 0
    }

    /// Leaves at or below `prefix`, sorted by key. An empty prefix selects all.
    pub fn subtree(&self, language: Language, prefix: &str) -> Vec<(&str, &Message)> {
        let Some(messages) = self.languages.get(&language) else {
            return Vec::new();
        };

        let mut entries: Vec<(&str, &Message)> = messages
            .iter()
            .filter(|(key, _)| {
                prefix.is_empty()
                    || key.as_str() == prefix
                    || key
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('.'))
            })
            .map(|(key, message)| (key.as_str(), message))
            .collect();
        entries.sort_unstable_by_key(|(key, _)| *key);
        entries
    }
}

/// Lookups walk the tree one `.`-separated segment at a time, so a member
/// name containing `.` could never be reached that way and would collide with
/// a nested path once flattened. Such sources are rejected.
fn flatten(
    node: &Value,
    prefix: &str,
    language: Language,
    out: &mut HashMap<String, Message>,
) -> Result<(), I18nError> {
    let Value::Object(map) = node else {
        return Ok(());
    };

    for (segment, child) in map {
        if segment.contains('.') {
            return Err(I18nError::DottedSegment {
                language: language.code().to_string(),
                parent: prefix.to_string(),
                segment: segment.clone(),
            });
        }

        let path = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{}.{}", prefix, segment)
        };

        match child {
            Value::Object(_) => flatten(child, &path, language, out)?,
            Value::String(text) => {
                out.insert(path, Message::Text(text.clone()));
            }
            Value::Array(values) => {
                let items: Option<Vec<String>> = values
                    .iter()
                    .map(|value| value.as_str().map(ToString::to_string))
                    .collect();
                match items {
                    Some(items) => {
                        out.insert(path, Message::List(items));
                    }
                    None => warn!(
                        "Skipping '{}' in '{}': arrays may only contain strings",
                        path,
                        language.code()
                    ),
                }
            }
            _ => warn!(
                "Skipping '{}' in '{}': not a string or list of strings",
                path,
                language.code()
            ),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_sources(&[
            (
                Language::ENGLISH,
                r#"{"nav": {"home": "Home", "menu": {"open": "Open"}},
                    "list": ["a", "b"], "count": 3, "mixed": ["a", 1]}"#,
            ),
            (Language::ARABIC, r#"{"nav": {"home": "الرئيسية"}}"#),
        ])
        .expect("Should parse")
    }

    // ==================== Flattening Tests ====================

    #[test]
    fn test_flatten_nested_paths() {
        let catalog = sample();
        assert_eq!(
            catalog.lookup(Language::ENGLISH, "nav.home"),
            Some(&Message::Text("Home".to_string()))
        );
        assert_eq!(
            catalog.lookup(Language::ENGLISH, "nav.menu.open"),
            Some(&Message::Text("Open".to_string()))
        );
    }

    #[test]
    fn test_flatten_string_arrays() {
        let catalog = sample();
        assert_eq!(
            catalog.lookup(Language::ENGLISH, "list"),
            Some(&Message::List(vec!["a".to_string(), "b".to_string()]))
        );
    }

    #[test]
    fn test_non_leaf_values_are_not_addressable() {
        let catalog = sample();
        assert!(catalog.lookup(Language::ENGLISH, "nav").is_none());
        assert!(catalog.lookup(Language::ENGLISH, "nav.menu").is_none());
        assert!(catalog.lookup(Language::ENGLISH, "count").is_none());
        assert!(catalog.lookup(Language::ENGLISH, "mixed").is_none());
    }

    #[test]
    fn test_lookup_is_per_language() {
        let catalog = sample();
        assert!(catalog.contains(Language::ENGLISH, "nav.menu.open"));
        assert!(!catalog.contains(Language::ARABIC, "nav.menu.open"));
    }

    #[test]
    fn test_keys_sorted() {
        let catalog = sample();
        assert_eq!(
            catalog.keys(Language::ENGLISH),
            vec!["list", "nav.home", "nav.menu.open"]
        );
        assert_eq!(catalog.len(Language::ARABIC), 1);
    }

    #[test]
    fn test_subtree_respects_segment_boundaries() {
        let catalog = Catalog::from_sources(&[(
            Language::ENGLISH,
            r#"{"nav": {"home": "Home"}, "navigation": {"x": "X"}}"#,
        )])
        .unwrap();

        let keys: Vec<&str> = catalog
            .subtree(Language::ENGLISH, "nav")
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["nav.home"]);
        assert_eq!(catalog.subtree(Language::ENGLISH, "").len(), 2);
        assert!(catalog.subtree(Language::ARABIC, "").is_empty());
    }

    // ==================== Error Tests ====================

    #[test]
    fn test_invalid_json() {
        let err = Catalog::from_sources(&[(Language::ARABIC, "{")]).unwrap_err();
        assert!(matches!(err, I18nError::CatalogParse { ref language, .. } if language == "ar"));
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = Catalog::from_sources(&[(Language::ENGLISH, "[]")]).unwrap_err();
        assert!(matches!(err, I18nError::CatalogShape(_)));
    }

    #[test]
    fn test_dotted_member_cannot_shadow_nested_key() {
        let err = Catalog::from_sources(&[(
            Language::ENGLISH,
            r#"{"a": {"b": "nested"}, "a.b": "flat"}"#,
        )])
        .unwrap_err();
        assert!(matches!(
            err,
            I18nError::DottedSegment { ref parent, ref segment, .. }
                if parent.is_empty() && segment == "a.b"
        ));
    }

    #[test]
    fn test_dotted_member_is_rejected() {
        let err = Catalog::from_sources(&[
            (Language::ENGLISH, r#"{"nav": {"home": "Home"}}"#),
            (Language::ARABIC, r#"{"nav": {"x.y": "literal"}}"#),
        ])
        .unwrap_err();
        match err {
            I18nError::DottedSegment {
                language,
                parent,
                segment,
            } => {
                assert_eq!(language, "ar");
                assert_eq!(parent, "nav");
                assert_eq!(segment, "x.y");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    // ==================== Translation Tests ====================

    #[test]
    fn test_translation_display_and_items() {
        let list = vec!["a".to_string(), "b".to_string()];
        assert_eq!(Translation::List(&list).to_string(), "a, b");
        assert_eq!(Translation::List(&list).items(), list);
        assert_eq!(Translation::Text("x").items(), vec!["x".to_string()]);
        assert_eq!(Translation::Missing("k.k").to_string(), "k.k");
        assert!(!Translation::Missing("k.k").is_found());
        assert!(Translation::List(&list).as_text().is_none());
    }

    // ==================== Embedded Catalog Tests ====================

    #[test]
    fn test_embedded_catalog_loads_both_languages() {
        let catalog = Catalog::get();
        assert_eq!(catalog.languages(), vec![Language::ENGLISH, Language::ARABIC]);
        assert!(!catalog.is_empty(Language::ENGLISH));
        assert!(!catalog.is_empty(Language::ARABIC));
    }

    #[test]
    fn test_embedded_catalog_known_entries() {
        let catalog = Catalog::get();
        assert_eq!(
            catalog.lookup(Language::ENGLISH, "nav.home"),
            Some(&Message::Text("Home".to_string()))
        );
        assert_eq!(
            catalog.lookup(Language::ARABIC, "nav.home"),
            Some(&Message::Text("الرئيسية".to_string()))
        );
        assert!(matches!(
            catalog.lookup(Language::ENGLISH, "categories.items"),
            Some(Message::List(items)) if items.len() == 5
        ));
    }
}
