//! Translation metrics for a single run.
//!
//! Counts how many fields were translated and how many fell back to the
//! source text.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-run translation counters.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Fields replaced with a translation
    translated: AtomicUsize,

    /// Fields left in the source language after a failed call
    fallbacks: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful translation.
    pub fn record_translated(&self) {
        self.translated.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed translation that kept the original text.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn translated(&self) -> usize {
        self.translated.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let translated = self.translated();
        let fallbacks = self.fallbacks();
        let total = translated + fallbacks;
        let success_rate = if total > 0 {
            (translated as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            translated,
            fallbacks,
            success_rate,
        }
    }
}

/// Snapshot of the translation counters.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    pub translated: usize,
    pub fallbacks: usize,

    /// Success rate as a percentage (0-100)
    pub success_rate: f64,
}

impl MetricsReport {
    pub fn total(&self) -> usize {
        self.translated + self.fallbacks
    }
}
