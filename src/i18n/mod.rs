//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `registry`: The locale table (source locale, targets, RTL key)
//! - `metrics`: Per-run translation counters
//!
//! # Example
//!
//! ```rust,ignore
//! use rules_translator::i18n::LocaleTable;
//!
//! let locales = LocaleTable::default();
//! for locale in locales.targets() {
//!     println!("{} -> {}", locale.key, locale.backend_code);
//! }
//! ```

mod metrics;
mod registry;

pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LocaleConfig, LocaleTable};
