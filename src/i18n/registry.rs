//! Locale table: the set of target languages for a run.
//!
//! The table is plain immutable data. It is built once at startup and passed
//! by reference to the translation stage, the renderer and the pipeline.

/// Configuration for a target locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Key used in the output JSON (e.g., "zh")
    pub key: &'static str,

    /// Language code understood by the translation backend (e.g., "zh-CN")
    pub backend_code: &'static str,

    /// English name of the language, for progress output
    pub name: &'static str,
}

/// Source locale plus the ordered list of target locales.
#[derive(Debug, Clone)]
pub struct LocaleTable {
    source: LocaleConfig,
    rtl_key: &'static str,
    targets: Vec<LocaleConfig>,
}

impl LocaleTable {
    /// Build a table from an explicit source locale, RTL key and targets.
    pub fn new(source: LocaleConfig, rtl_key: &'static str, targets: Vec<LocaleConfig>) -> Self {
        Self {
            source,
            rtl_key,
            targets,
        }
    }

    /// The locale the rule book is authored in.
    pub fn source(&self) -> &LocaleConfig {
        &self.source
    }

    /// Target locales in processing order.
    pub fn targets(&self) -> &[LocaleConfig] {
        &self.targets
    }

    /// Look up a target locale by its output key.
    pub fn get_by_key(&self, key: &str) -> Option<&LocaleConfig> {
        self.targets.iter().find(|locale| locale.key == key)
    }

    /// Key of the locale rendered right-to-left.
    pub fn rtl_key(&self) -> &'static str {
        self.rtl_key
    }

    pub fn is_rtl(&self, key: &str) -> bool {
        key == self.rtl_key
    }

    /// Every key that appears in the output, source first.
    pub fn output_keys(&self) -> Vec<&'static str> {
        std::iter::once(self.source.key)
            .chain(self.targets.iter().map(|locale| locale.key))
            .collect()
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::new(
            LocaleConfig {
                key: "en",
                backend_code: "en",
                name: "English",
            },
            "ar",
            default_targets(),
        )
    }
}

/// Default target locales.
///
/// `zh` is Simplified Chinese, which the backend calls `zh-CN`.
fn default_targets() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            key: "ko",
            backend_code: "ko",
            name: "Korean",
        },
        LocaleConfig {
            key: "zh",
            backend_code: "zh-CN",
            name: "Chinese (Simplified)",
        },
        LocaleConfig {
            key: "tr",
            backend_code: "tr",
            name: "Turkish",
        },
        LocaleConfig {
            key: "fr",
            backend_code: "fr",
            name: "French",
        },
        LocaleConfig {
            key: "es",
            backend_code: "es",
            name: "Spanish",
        },
        LocaleConfig {
            key: "ar",
            backend_code: "ar",
            name: "Arabic",
        },
    ]
}
