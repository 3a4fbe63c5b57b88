//! Inspection pipeline
//!
//! This module contains everything between a raw URL and a finished report:
//! - Fetching the page and the auxiliary crawler files
//! - Probing the TLS endpoint
//! - Structural extraction and the performance, SEO and security analyzers
//! - Prompt construction and report assembly
//! - Overall coordination of one inspection

mod aggregate;
mod coordinator;
mod document;
mod extract;
mod fetcher;
mod performance;
mod robots;
mod security;
mod seo;
mod tls;

pub use aggregate::{assemble_report, build_prompt, PageAnalysis, MAX_PROMPT_CONTENT_CHARS};
pub use coordinator::Inspector;
pub use document::Document;
pub use extract::{extract_structure, PageStructure};
pub use fetcher::{build_http_client, fetch_page, probe_url, FetchedPage, ProbeResponse};
pub use performance::analyze_performance;
pub use robots::is_allowed;
pub use security::{analyze_security, collect_security_headers};
pub use seo::{count_headings, classify_links, probe_crawler_files, CrawlerFiles};
pub use tls::{probe_tls, probe_tls_at, tls_info};

use crate::config::Config;
use crate::report::InspectionReport;
use crate::summarizer::{GeminiClient, SummarizerError};
use crate::InspectError;
use std::fmt;
use std::sync::Arc;

/// Why a recoverable probe failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeFailureKind {
    /// Host name is not usable for the probe
    InvalidHost,
    /// Name resolution failed
    Dns,
    /// TCP connection failed
    Connect,
    /// TLS handshake failed
    Handshake,
    /// The probe did not finish in time
    Timeout,
    /// The peer presented no usable certificate
    Certificate,
    /// HTTP-level failure (transport error or non-2xx status)
    Http,
}

impl ProbeFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidHost => "invalid_host",
            Self::Dns => "dns",
            Self::Connect => "connect",
            Self::Handshake => "handshake",
            Self::Timeout => "timeout",
            Self::Certificate => "certificate",
            Self::Http => "http",
        }
    }
}

/// Failure of a best-effort probe; recorded in the report, never propagated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFailure {
    pub kind: ProbeFailureKind,
    pub detail: String,
}

impl ProbeFailure {
    pub fn new(kind: ProbeFailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.detail)
    }
}

/// Result of a best-effort probe
pub type ProbeResult<T> = Result<T, ProbeFailure>;

/// Runs one inspection with the Gemini summarizer
///
/// This is the main entry point for inspecting a URL. It will:
/// 1. Check that an API key is configured
/// 2. Fetch the page while probing TLS
/// 3. Extract structure and run the analyzers
/// 4. Check robots.txt and sitemap.xml
/// 5. Request a summary and assemble the report
///
/// # Arguments
///
/// * `raw_url` - The URL to inspect; `https://` is added when no scheme is given
/// * `config` - The loaded configuration
///
/// # Returns
///
/// * `Ok(InspectionReport)` - The complete report
/// * `Err(InspectError)` - A fatal failure; no report is produced
pub async fn inspect(raw_url: &str, config: &Config) -> Result<InspectionReport, InspectError> {
    let generator = GeminiClient::from_provider(config, &config.summarizer.endpoint)
        .map_err(|e| match e {
            SummarizerError::Transport(source) => InspectError::Reqwest(source),
            _ => InspectError::MissingApiKey,
        })?;

    let provider = Arc::new(config.clone());
    let inspector = Inspector::new(config.inspector.clone(), provider, Arc::new(generator))?;

    inspector.inspect(raw_url).await
}
