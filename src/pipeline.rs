//! End-to-end build of the localized rule book.
//!
//! Load the English source, render it, then translate and render every
//! target locale in table order. The output file is written once, after
//! every locale has been rendered.

use crate::config::Config;
use crate::document::{load_document, LoadError, RuleDocument};
use crate::i18n::{LocaleTable, TranslationMetrics};
use crate::render::render_html;
use crate::translation::{translate_document, Translator};
use anyhow::{Context, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Locale key → HTML fragment, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedOutput {
    entries: Vec<(String, String)>,
}

impl RenderedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the fragment for `key`.
    pub fn insert(&mut self, key: impl Into<String>, html: String) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = html,
            None => self.entries.push((key, html)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, html)| html.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RenderedOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, html) in &self.entries {
            map.serialize_entry(key, html)?;
        }
        map.end()
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The source file does not exist; nothing was written
    SourceMissing { path: PathBuf },
    /// The output file was written with these locale keys
    Written { path: PathBuf, locales: Vec<String> },
}

/// Render the source locale and every translated target locale.
pub async fn build_rendered_output(
    document: &RuleDocument,
    locales: &LocaleTable,
    translator: &dyn Translator,
    metrics: &TranslationMetrics,
) -> RenderedOutput {
    let mut output = RenderedOutput::new();
    let source = locales.source();

    info!("Processing: {} (Original)", source.key);
    output.insert(source.key, render_html(document, source.key, locales));

    for locale in locales.targets() {
        info!("Translating to: {} ({})...", locale.key, locale.backend_code);

        let translated =
            translate_document(translator, document, source.backend_code, locale, metrics).await;
        output.insert(locale.key, render_html(&translated, locale.key, locales));
    }

    output
}

/// Write the rendered map as indented JSON, keeping non-ASCII text literal.
pub fn write_output(path: impl AsRef<Path>, output: &RenderedOutput) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(output).context("Failed to serialize output")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write output to {}", path.display()))?;
    Ok(())
}

/// Run the whole build with the given translator.
///
/// A missing source file is reported and ends the run without output.
/// Any other load failure is returned as an error.
pub async fn run(
    config: &Config,
    locales: &LocaleTable,
    translator: &dyn Translator,
) -> Result<RunOutcome> {
    let source_path = PathBuf::from(&config.source_file);

    let document = match load_document(&source_path) {
        Ok(document) => document,
        Err(e @ LoadError::NotFound { .. }) => {
            error!("Error: {}", e);
            return Ok(RunOutcome::SourceMissing { path: source_path });
        }
        Err(e) => return Err(e.into()),
    };

    info!(
        "Loaded {} sections ({} rules) from {}",
        document.sections.len(),
        document.rule_count(),
        source_path.display()
    );

    let metrics = TranslationMetrics::new();
    let output = build_rendered_output(&document, locales, translator, &metrics).await;

    let output_path = PathBuf::from(&config.output_file);
    write_output(&output_path, &output)?;

    let report = metrics.report();
    info!(
        "Translated {}/{} fields ({:.1}%), {} kept in {}",
        report.translated,
        report.total(),
        report.success_rate,
        report.fallbacks,
        locales.source().name
    );
    info!("Success! Updated {}", output_path.display());

    Ok(RunOutcome::Written {
        path: output_path,
        locales: output.keys().map(str::to_string).collect(),
    })
}
