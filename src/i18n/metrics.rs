//! Lookup and language-switch counters.
//!
//! Each [`LanguageManager`](crate::i18n::LanguageManager) owns one
//! `TranslationMetrics`, so independent managers never share counts.
//! Counters are atomic because lookups only borrow the manager immutably.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Keys resolved to a catalog entry
    lookups: AtomicUsize,

    /// Keys that fell back to the raw key
    missing_keys: AtomicUsize,

    /// Calls to `set_language`, including no-op repeats
    language_changes: AtomicUsize,

    /// Preference writes the store rejected
    persist_failures: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing_key(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_change(&self) {
        self.language_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_persist_failure(&self) {
        self.persist_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    pub fn language_changes(&self) -> usize {
        self.language_changes.load(Ordering::Relaxed)
    }

    pub fn persist_failures(&self) -> usize {
        self.persist_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let found = self.lookups();
        let missing = self.missing_keys();
        let total = found + missing;
        let miss_rate = if total > 0 {
            (missing as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups: found,
            missing_keys: missing,
            miss_rate,
            language_changes: self.language_changes(),
            persist_failures: self.persist_failures(),
        }
    }
}

/// Snapshot of the counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Successful lookups
    pub lookups: usize,

    /// Lookups that rendered the raw key
    pub missing_keys: usize,

    /// Missing keys as a percentage of all lookups (0-100)
    pub miss_rate: f64,

    pub language_changes: usize,

    pub persist_failures: usize,
}
