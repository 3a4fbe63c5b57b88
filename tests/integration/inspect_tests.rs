//! Integration tests for the inspection pipeline
//!
//! These tests use wiremock to serve the inspected site and a recording
//! stand-in for the language model, and run full inspections end-to-end.

use async_trait::async_trait;
use parslink::config::{ConfigProvider, InspectorConfig};
use parslink::summarizer::{Generation, SummarizerError, TextGenerator};
use parslink::{InspectError, InspectionReport, Inspector};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIXTURE: &str = r#"<html><head><title>Example</title></head><body>
    <h1>Welcome</h1>
    <p>Hello world</p>
    <a href="/one">One</a>
    <a href="http://127.0.0.1/two">Two</a>
    <a href="https://elsewhere.org/">Away</a>
    <img src="/logo.png">
    </body></html>"#;

/// Provider with a fixed key and model
struct StaticProvider {
    api_key: Option<String>,
}

impl ConfigProvider for StaticProvider {
    fn api_key(&self) -> Option<String> {
        self.api_key.clone()
    }

    fn model(&self) -> String {
        "gemini-pro".to_string()
    }
}

/// Generator that records every prompt and answers with a fixed text
#[derive(Default)]
struct RecordingGenerator {
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(&self, prompt: &str) -> Result<Generation, SummarizerError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(SummarizerError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            });
        }
        Ok(Generation {
            text: "A small example site.".to_string(),
        })
    }
}

/// Creates a test configuration with short timeouts
fn create_test_config() -> InspectorConfig {
    InspectorConfig {
        user_agent: "ParslinkTest/1.0".to_string(),
        fetch_timeout_secs: 5,
        probe_timeout_secs: 1,
        tls_timeout_secs: 1,
    }
}

fn create_inspector(generator: Arc<RecordingGenerator>) -> Inspector {
    let provider = Arc::new(StaticProvider {
        api_key: Some("test-key".to_string()),
    });
    Inspector::new(create_test_config(), provider, generator).expect("Failed to build inspector")
}

async fn mount_page(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn inspect_fixture(server: &MockServer) -> (InspectionReport, Arc<RecordingGenerator>) {
    let generator = Arc::new(RecordingGenerator::default());
    let inspector = create_inspector(generator.clone());
    let url = format!("{}/", server.uri());
    let report = inspector.inspect(&url).await.expect("Inspection failed");
    (report, generator)
}

#[tokio::test]
async fn test_fixture_page_report() {
    let server = MockServer::start().await;
    mount_page(&server, FIXTURE).await;

    let (report, generator) = inspect_fixture(&server).await;

    assert_eq!(report.url, format!("{}/", server.uri()));
    assert_eq!(report.title, "Example");
    assert_eq!(report.description, "description not found");
    assert!(report.keywords.is_empty());
    assert_eq!(report.meta_tags.len(), 3);
    assert!(report.meta_tags.values().all(Option::is_none));

    assert_eq!(report.performance.script_count, 0);
    assert_eq!(report.performance.style_count, 0);
    assert_eq!(report.performance.images.len(), 1);
    assert_eq!(report.performance.images[0].src, "/logo.png");
    assert!(!report.performance.images[0].has_alt);
    let expected_kb = FIXTURE.len() as f64 / 1024.0;
    assert!((report.performance.page_size_kb - expected_kb).abs() < 1e-9);

    assert_eq!(report.seo.heading_count("h1"), 1);
    assert_eq!(report.seo.heading_count("h2"), 0);
    assert_eq!(report.seo.links.internal, vec!["/one", "http://127.0.0.1/two"]);
    assert_eq!(report.seo.links.external, vec!["https://elsewhere.org/"]);
    assert!(report.seo.robots_text.is_none());
    assert!(report.seo.robots_allows_page.is_none());
    assert!(!report.seo.sitemap_present);

    // Nothing serves TLS on the mock host
    assert!(!report.tls.is_valid());
    assert!(report.tls.error().is_some());
    assert!(report.tls.details().is_none());

    assert!(report.load_time_seconds > 0.0);
    assert!(chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
    assert_eq!(report.summary_model_id, "gemini-pro");
    assert_eq!(report.summary_text, "A small example site.");

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Title: Example"));
    assert!(prompts[0].contains("Main content: Welcome Hello world..."));
}

#[tokio::test]
async fn test_server_error_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let generator = Arc::new(RecordingGenerator::default());
    let inspector = create_inspector(generator.clone());
    let url = format!("{}/", server.uri());

    let err = inspector.inspect(&url).await.unwrap_err();
    match &err {
        InspectError::HttpStatus { url: failed, status } => {
            assert_eq!(failed, &url);
            assert_eq!(*status, 500);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains(&url));

    // The summarizer is never reached
    assert!(generator.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_host_is_fatal() {
    let generator = Arc::new(RecordingGenerator::default());
    let inspector = create_inspector(generator.clone());

    let err = inspector.inspect("http://127.0.0.1:9/").await.unwrap_err();
    assert!(matches!(
        err,
        InspectError::Fetch { .. } | InspectError::Timeout { .. }
    ));
    assert!(generator.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_crawler_files_present() {
    let server = MockServer::start().await;
    mount_page(&server, FIXTURE).await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<urlset></urlset>"))
        .mount(&server)
        .await;

    let (report, generator) = inspect_fixture(&server).await;

    assert_eq!(
        report.seo.robots_text.as_deref(),
        Some("User-agent: *\nDisallow: /")
    );
    assert_eq!(report.seo.robots_allows_page, Some(false));
    assert!(report.seo.sitemap_present);

    let prompts = generator.prompts.lock().unwrap();
    assert!(prompts[0].contains("- robots.txt: present"));
    assert!(prompts[0].contains("- sitemap.xml: present"));
}

#[tokio::test]
async fn test_slow_robots_does_not_fail() {
    let server = MockServer::start().await;
    mount_page(&server, FIXTURE).await;

    // Longer than the one-second probe timeout
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("User-agent: *\nAllow: /")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let (report, _) = inspect_fixture(&server).await;

    assert!(report.seo.robots_text.is_none());
    assert!(report.seo.robots_allows_page.is_none());
    assert_eq!(report.title, "Example");
}

#[tokio::test]
async fn test_security_headers_and_cookies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(FIXTURE)
                .insert_header("content-type", "text/html")
                .insert_header("Strict-Transport-Security", "max-age=31536000")
                .insert_header("X-Frame-Options", "SAMEORIGIN")
                .insert_header("Set-Cookie", "session=abc123; Path=/"),
        )
        .mount(&server)
        .await;

    let (report, generator) = inspect_fixture(&server).await;

    let headers = &report.security.headers;
    assert_eq!(headers.len(), 4);
    assert_eq!(headers["HSTS"].as_deref(), Some("max-age=31536000"));
    assert_eq!(headers["X-Frame-Options"].as_deref(), Some("SAMEORIGIN"));
    assert_eq!(headers["CSP"], None);
    assert_eq!(headers["X-XSS-Protection"], None);
    assert_eq!(report.security.cookies["session"], "abc123");

    let prompts = generator.prompts.lock().unwrap();
    assert!(prompts[0].contains("- Missing security headers: CSP, X-XSS-Protection"));
}

#[tokio::test]
async fn test_summarizer_failure_is_fatal() {
    let server = MockServer::start().await;
    mount_page(&server, FIXTURE).await;

    let generator = Arc::new(RecordingGenerator {
        prompts: Mutex::new(Vec::new()),
        fail: true,
    });
    let inspector = create_inspector(generator.clone());
    let url = format!("{}/", server.uri());

    let err = inspector.inspect(&url).await.unwrap_err();
    match err {
        InspectError::Summarizer { url: failed, source } => {
            assert_eq!(failed, url);
            assert!(matches!(source, SummarizerError::Api { status: 503, .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(generator.prompts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_api_key_makes_no_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
        .expect(0)
        .mount(&server)
        .await;

    let generator = Arc::new(RecordingGenerator::default());
    let provider = Arc::new(StaticProvider { api_key: None });
    let inspector = Inspector::new(create_test_config(), provider, generator.clone())
        .expect("Failed to build inspector");

    let err = inspector
        .inspect(&format!("{}/", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, InspectError::MissingApiKey));
    assert!(generator.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_repeated_inspections_are_deterministic() {
    let server = MockServer::start().await;
    mount_page(&server, FIXTURE).await;

    let (first, first_gen) = inspect_fixture(&server).await;
    let (second, second_gen) = inspect_fixture(&server).await;

    let strip = |mut report: InspectionReport| {
        report.timestamp = String::new();
        report.load_time_seconds = 0.0;
        report
    };
    assert_eq!(strip(first), strip(second));

    let first_prompt = first_gen.prompts.lock().unwrap()[0].clone();
    let second_prompt = second_gen.prompts.lock().unwrap()[0].clone();
    assert_eq!(first_prompt, second_prompt);
}

#[tokio::test]
async fn test_scheme_is_added_once() {
    let server = MockServer::start().await;
    mount_page(&server, FIXTURE).await;

    let generator = Arc::new(RecordingGenerator::default());
    let inspector = create_inspector(generator);

    // Already schemed input is left untouched
    let url = format!("{}/", server.uri());
    let report = inspector.inspect(&url).await.expect("Inspection failed");
    assert_eq!(report.url, url);
    assert_eq!(report.url.matches("://").count(), 1);
}
