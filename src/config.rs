use anyhow::Result;
use std::time::Duration;

/// Default location of the English rule book
pub const DEFAULT_SOURCE_FILE: &str = "rules_source.json";

/// Default location of the generated locale → HTML map
pub const DEFAULT_OUTPUT_FILE: &str = "rules.json";

/// Public Google Translate endpoint used by the `gtx` client
pub const DEFAULT_TRANSLATE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    // Files
    pub source_file: String,
    pub output_file: String,

    // Translation backend
    pub translate_api_url: String,
    pub translate_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Files
            source_file: std::env::var("RULES_SOURCE_FILE")
                .unwrap_or_else(|_| DEFAULT_SOURCE_FILE.to_string()),
            output_file: std::env::var("RULES_OUTPUT_FILE")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_FILE.to_string()),

            // Translation backend
            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string()),
            translate_timeout: Duration::from_secs(
                std::env::var("TRANSLATE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_file: DEFAULT_SOURCE_FILE.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            translate_api_url: DEFAULT_TRANSLATE_API_URL.to_string(),
            translate_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
