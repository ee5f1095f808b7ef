use crate::config::Config;
use crate::document::{RuleDocument, Section};
use crate::i18n::{LocaleConfig, TranslationMetrics};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fmt;
use tracing::{debug, warn};

/// A text translation backend.
///
/// Every failure is recoverable for callers: the field keeps its original text.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String>;
}

/// Client for the public Google Translate `gtx` endpoint
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    /// Build a translator with a client that applies the configured per-request timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.translate_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::new(client, config.translate_api_url.clone()))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        // Nothing to translate
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .context("Failed to send translation request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("Translation API error ({}): {}", status, body);
        }

        let body: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse translation response")?;

        parse_translation_response(&body)
    }
}

/// Extract the translated text from a `gtx` response.
///
/// The body is a nested array; element 0 holds one entry per translated
/// sentence, and the first string of each entry is the translation.
fn parse_translation_response(body: &serde_json::Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(|v| v.as_array())
        .context("translation response contained no segments")?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|s| s.as_str()))
        .collect();

    if translated.is_empty() {
        anyhow::bail!("translation response contained no segments");
    }

    Ok(translated)
}

/// Which string of a document is being translated (indices are 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title { section: usize },
    Rule { section: usize, rule: usize },
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title { section } => write!(f, "title of section {}", section),
            Field::Rule { section, rule } => write!(f, "rule {} of section {}", rule, section),
        }
    }
}

/// Result of translating one field
#[derive(Debug)]
pub enum FieldOutcome {
    Translated(String),
    Fallback {
        original: String,
        error: anyhow::Error,
    },
}

impl FieldOutcome {
    /// The text that ends up in the translated document.
    pub fn into_text(self) -> String {
        match self {
            FieldOutcome::Translated(text) => text,
            FieldOutcome::Fallback { original, .. } => original,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FieldOutcome::Fallback { .. })
    }
}

/// Translate a single field, falling back to the original on failure.
pub async fn translate_field(
    translator: &dyn Translator,
    text: &str,
    source_lang: &str,
    target_lang: &str,
) -> FieldOutcome {
    match translator.translate(text, source_lang, target_lang).await {
        Ok(translated) => FieldOutcome::Translated(translated),
        Err(error) => FieldOutcome::Fallback {
            original: text.to_string(),
            error,
        },
    }
}

/// Build a translated copy of `document` for `locale`.
///
/// `document` is only borrowed; the returned value shares nothing with it.
/// Each title and rule is translated independently. A failed field is
/// logged and keeps its source text, so the result always has the same
/// shape as the input.
pub async fn translate_document(
    translator: &dyn Translator,
    document: &RuleDocument,
    source_lang: &str,
    locale: &LocaleConfig,
    metrics: &TranslationMetrics,
) -> RuleDocument {
    let mut sections = Vec::with_capacity(document.sections.len());

    for (i, section) in document.sections.iter().enumerate() {
        let section_no = i + 1;

        let title = resolve(
            translate_field(translator, &section.title, source_lang, locale.backend_code).await,
            Field::Title {
                section: section_no,
            },
            locale,
            metrics,
        );

        let mut rules = Vec::with_capacity(section.rules.len());
        for (j, rule) in section.rules.iter().enumerate() {
            let outcome = translate_field(translator, rule, source_lang, locale.backend_code).await;
            rules.push(resolve(
                outcome,
                Field::Rule {
                    section: section_no,
                    rule: j + 1,
                },
                locale,
                metrics,
            ));
        }

        sections.push(Section { title, rules });
    }

    RuleDocument::new(sections)
}

fn resolve(
    outcome: FieldOutcome,
    field: Field,
    locale: &LocaleConfig,
    metrics: &TranslationMetrics,
) -> String {
    match &outcome {
        FieldOutcome::Translated(_) => {
            debug!("Translated {} to {}", field, locale.key);
            metrics.record_translated();
        }
        FieldOutcome::Fallback { original, error } => {
            warn!(
                "Failed to translate {} to {} ({}), keeping original '{}': {:#}",
                field, locale.name, locale.backend_code, original, error
            );
            metrics.record_fallback();
        }
    }

    outcome.into_text()
}
