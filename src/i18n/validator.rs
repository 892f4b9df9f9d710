//! Catalog completeness lint.
//!
//! Every key must exist in every language with the same leaf kind. This is
//! checked here and in the test suite, never at lookup time: a missing key at
//! runtime still renders as the key itself.

use crate::i18n::{Catalog, Language, Message};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Structural problems: keys not mirrored, leaf kinds that differ
    pub errors: Vec<String>,

    /// Content that probably needs a translator's attention
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog structure and content.
pub struct CatalogValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Compare every language against the canonical one.
    ///
    /// Errors:
    /// - key present in one language only
    /// - text leaf in one language, list leaf in the other
    ///
    /// Warnings:
    /// - `{placeholder}` names differ
    /// - list lengths differ
    /// - empty strings
    pub fn validate(catalog: &Catalog) -> ValidationReport {
        let mut report = ValidationReport::new();
        let canonical = Language::canonical();

        for language in Language::all() {
            if catalog.is_empty(language) {
                report
                    .errors
                    .push(format!("No messages loaded for '{}'", language));
            }

            for key in catalog.keys(language) {
                if let Some(Message::Text(text)) = catalog.lookup(language, key) {
                    if text.trim().is_empty() {
                        report
                            .warnings
                            .push(format!("Empty string for '{}' in '{}'", key, language));
                    }
                }
            }
        }

        for language in Language::all().into_iter().filter(|l| *l != canonical) {
            Self::compare(catalog, canonical, language, &mut report);
        }

        report
    }

    fn compare(catalog: &Catalog, base: Language, other: Language, report: &mut ValidationReport) {
        let base_keys: BTreeSet<&str> = catalog.keys(base).into_iter().collect();
        let other_keys: BTreeSet<&str> = catalog.keys(other).into_iter().collect();

        for key in base_keys.difference(&other_keys) {
            report.errors.push(format!(
                "Key '{}' exists in '{}' but is missing in '{}'",
                key, base, other
            ));
        }
        for key in other_keys.difference(&base_keys) {
            report.errors.push(format!(
                "Key '{}' exists in '{}' but is missing in '{}'",
                key, other, base
            ));
        }

        for key in base_keys.intersection(&other_keys) {
            let (Some(left), Some(right)) = (catalog.lookup(base, key), catalog.lookup(other, key))
            else {
                continue;
            };

            match (left, right) {
                (Message::Text(a), Message::Text(b)) => {
                    let a_names = Self::extract_placeholders(a);
                    let b_names = Self::extract_placeholders(b);
                    if a_names != b_names {
                        report.warnings.push(format!(
                            "Placeholder mismatch for '{}': '{}' has {:?}, '{}' has {:?}",
                            key, base, a_names, other, b_names
                        ));
                    }
                }
                (Message::List(a), Message::List(b)) => {
                    if a.len() != b.len() {
                        report.warnings.push(format!(
                            "List length mismatch for '{}': '{}' has {}, '{}' has {}",
                            key,
                            base,
                            a.len(),
                            other,
                            b.len()
                        ));
                    }
                }
                _ => report.errors.push(format!(
                    "Kind mismatch for '{}': {} in '{}', {} in '{}'",
                    key,
                    left.kind(),
                    base,
                    right.kind(),
                    other
                )),
            }
        }
    }

    /// Placeholder names (`{year}` -> `year`), sorted and deduplicated.
    pub fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
