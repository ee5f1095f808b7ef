//! Integration tests for the rule book translator
//!
//! These tests drive the public library API end to end against a mocked
//! translation backend.

use rules_translator::{
    config::Config,
    document::{RuleDocument, Section},
    i18n::LocaleTable,
    pipeline::{self, RunOutcome},
    translation::GoogleTranslator,
};
use std::path::Path;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

// ==================== Test Helpers ====================

/// Create a test config pointing at a mocked translation endpoint
fn create_test_config(api_url: &str, temp_dir: &TempDir) -> Config {
    Config {
        source_file: temp_dir
            .path()
            .join("rules_source.json")
            .display()
            .to_string(),
        output_file: temp_dir.path().join("rules.json").display().to_string(),
        translate_api_url: api_url.to_string(),
        translate_timeout: std::time::Duration::from_secs(5),
    }
}

fn write_source(config: &Config, json: &str) {
    std::fs::write(&config.source_file, json).expect("Failed to write source");
}

/// A `gtx`-shaped response body
fn gtx_response(text: &str) -> serde_json::Value {
    serde_json::json!([[[text, "source", null, null, 10]], null, "en"])
}

/// Answer every request with "<tl>:<q>"
struct EchoResponder;

impl wiremock::Respond for EchoResponder {
    fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
        let mut target = String::new();
        let mut text = String::new();
        for (key, value) in request.url.query_pairs() {
            match key.as_ref() {
                "tl" => target = value.into_owned(),
                "q" => text = value.into_owned(),
                _ => {}
            }
        }
        ResponseTemplate::new(200).set_body_json(gtx_response(&format!("{}:{}", target, text)))
    }
}

fn read_output(config: &Config) -> serde_json::Value {
    let content = std::fs::read_to_string(&config.output_file).expect("Output should exist");
    serde_json::from_str(&content).expect("Output should be JSON")
}

const SAMPLE: &str = r#"[
    {"title": "Safety", "rules": ["Wear a helmet", "No running"]},
    {"title": "Conduct", "rules": ["Be kind"]}
]"#;

// ==================== End-to-End Tests ====================

#[tokio::test]
async fn test_full_run_translates_every_locale() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(EchoResponder)
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(
        &format!("{}/translate_a/single", mock_server.uri()),
        &temp_dir,
    );
    write_source(&config, SAMPLE);

    let translator = GoogleTranslator::from_config(&config).unwrap();
    let outcome = pipeline::run(&config, &LocaleTable::default(), &translator)
        .await
        .expect("Run should succeed");
    assert!(matches!(outcome, RunOutcome::Written { .. }));

    let output = read_output(&config);
    let object = output.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["ar", "en", "es", "fr", "ko", "tr", "zh"]);

    assert_eq!(
        output["en"],
        "\n<h3>Safety</h3>\n<ol>\n  <li>Wear a helmet</li>\n  <li>No running</li>\n</ol>\n\
         \n<h3>Conduct</h3>\n<ol start=\"3\">\n  <li>Be kind</li>\n</ol>\n"
    );

    // Chinese goes out with the backend's simplified code but keeps the short key
    let zh = output["zh"].as_str().unwrap();
    assert!(zh.contains("<h3>zh-CN:Safety</h3>"));
    assert!(zh.contains("<li>zh-CN:Be kind</li>"));

    let ar = output["ar"].as_str().unwrap();
    assert!(ar.starts_with("<div style=\"direction: rtl; text-align: right;\">\n"));
    assert!(ar.ends_with("</div>\n"));
    assert!(ar.contains("<ol start=\"3\">"));

    // 5 strings for each of 6 target locales
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 30);
}

#[tokio::test]
async fn test_failed_strings_keep_english_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("q", "No running"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend down"))
        .with_priority(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(EchoResponder)
        .with_priority(2)
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(
        &format!("{}/translate_a/single", mock_server.uri()),
        &temp_dir,
    );
    write_source(&config, SAMPLE);

    let translator = GoogleTranslator::from_config(&config).unwrap();
    pipeline::run(&config, &LocaleTable::default(), &translator)
        .await
        .expect("Per-string failures are not fatal");

    let output = read_output(&config);
    for key in ["ko", "zh", "tr", "fr", "es", "ar"] {
        let html = output[key].as_str().unwrap();
        assert!(html.contains("<li>No running</li>"), "{} should fall back", key);
        assert!(html.contains("Wear a helmet</li>"));
        assert!(!html.contains("<li>Wear a helmet</li>"), "{} should translate", key);
    }
}

#[tokio::test]
async fn test_backend_completely_down_still_writes_all_keys() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(
        &format!("{}/translate_a/single", mock_server.uri()),
        &temp_dir,
    );
    write_source(&config, SAMPLE);

    let translator = GoogleTranslator::from_config(&config).unwrap();
    pipeline::run(&config, &LocaleTable::default(), &translator)
        .await
        .unwrap();

    let output = read_output(&config);
    assert_eq!(output.as_object().unwrap().len(), 7);
    // Every non-RTL locale degrades to the English fragment
    for key in ["ko", "zh", "tr", "fr", "es"] {
        assert_eq!(output[key], output["en"]);
    }
}

#[tokio::test]
async fn test_missing_source_makes_no_requests() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(EchoResponder)
        .expect(0)
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &temp_dir);

    let translator = GoogleTranslator::from_config(&config).unwrap();
    let outcome = pipeline::run(&config, &LocaleTable::default(), &translator)
        .await
        .unwrap();

    assert!(matches!(outcome, RunOutcome::SourceMissing { .. }));
    assert!(!Path::new(&config.output_file).exists());
}

#[tokio::test]
async fn test_output_preserves_non_ascii_literally() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("tl", "ko"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gtx_response("안전")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .respond_with(EchoResponder)
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &temp_dir);
    write_source(&config, r#"[{"title": "Safety", "rules": []}]"#);

    let translator = GoogleTranslator::from_config(&config).unwrap();
    pipeline::run(&config, &LocaleTable::default(), &translator)
        .await
        .unwrap();

    let raw = std::fs::read_to_string(&config.output_file).unwrap();
    assert!(raw.contains("<h3>안전</h3>"));
    assert!(!raw.contains("\\u"));
    assert!(raw.starts_with("{\n  \"en\": "));
}

// ==================== Library API Tests ====================

#[test]
fn test_document_roundtrip_through_renderer() {
    let document = RuleDocument::new(vec![Section {
        title: "Only".to_string(),
        rules: vec!["one".to_string()],
    }]);
    let locales = LocaleTable::default();

    let html = rules_translator::render::render_html(&document, "fr", &locales);
    assert_eq!(html, "\n<h3>Only</h3>\n<ol>\n  <li>one</li>\n</ol>\n");
}
