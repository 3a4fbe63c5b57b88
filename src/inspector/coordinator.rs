//! Inspection coordinator - orchestration of one inspection
//!
//! This module sequences the pipeline stages:
//! - Fetching the page while the TLS probe runs alongside it
//! - Running the document analyzers on the fetched body
//! - Checking robots.txt and sitemap.xml
//! - Building the prompt and requesting the summary
//! - Assembling the final report
//!
//! Only the fetch and the summary can fail an inspection. Every other stage
//! records its outcome in the report.

use crate::config::{ConfigProvider, InspectorConfig};
use crate::inspector::aggregate::{assemble_report, build_prompt, PageAnalysis};
use crate::inspector::fetcher::{build_http_client, fetch_page};
use crate::inspector::seo::probe_crawler_files;
use crate::inspector::tls::tls_info;
use crate::report::InspectionReport;
use crate::state::InspectionState;
use crate::summarizer::TextGenerator;
use crate::url::{base_url, ensure_scheme, extract_host, normalize_url};
use crate::{InspectError, UrlError};
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Tracks the state of a single inspection and rejects illegal edges
struct Progress {
    url: String,
    state: InspectionState,
}

impl Progress {
    fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            state: InspectionState::Start,
        }
    }

    fn advance(&mut self, next: InspectionState) -> Result<(), InspectError> {
        if !self.state.can_transition_to(next) {
            return Err(InspectError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        tracing::debug!("{}: {} -> {}", self.url, self.state, next);
        self.state = next;
        Ok(())
    }
}

/// Runs inspections against one configuration and summarizer
pub struct Inspector {
    config: InspectorConfig,
    provider: Arc<dyn ConfigProvider>,
    generator: Arc<dyn TextGenerator>,
    page_client: Client,
    probe_client: Client,
}

impl Inspector {
    /// Creates a new inspector
    ///
    /// # Arguments
    ///
    /// * `config` - Network settings (user agent and timeouts)
    /// * `provider` - Source of the API key and model identifier
    /// * `generator` - The summarization collaborator
    ///
    /// # Returns
    ///
    /// * `Ok(Inspector)` - Ready to inspect
    /// * `Err(InspectError)` - An HTTP client could not be built
    pub fn new(
        config: InspectorConfig,
        provider: Arc<dyn ConfigProvider>,
        generator: Arc<dyn TextGenerator>,
    ) -> Result<Self, InspectError> {
        let page_client = build_http_client(
            &config.user_agent,
            Duration::from_secs(config.fetch_timeout_secs),
        )?;
        let probe_client = build_http_client(
            &config.user_agent,
            Duration::from_secs(config.probe_timeout_secs),
        )?;

        Ok(Self {
            config,
            provider,
            generator,
            page_client,
            probe_client,
        })
    }

    /// Inspects one URL and returns the complete report
    ///
    /// The API key is checked before any request is made. A failed fetch or
    /// a failed summary returns an error and no report.
    pub async fn inspect(&self, raw_url: &str) -> Result<InspectionReport, InspectError> {
        if self.provider.api_key().is_none() {
            return Err(InspectError::MissingApiKey);
        }

        let url = ensure_scheme(raw_url);
        let parsed = normalize_url(&url)?;
        let host = extract_host(&parsed).ok_or(UrlError::MissingHost)?;
        let base = base_url(&parsed);

        let mut progress = Progress::new(&url);
        tracing::info!("Inspecting {}", url);

        // The TLS probe runs beside the fetch; load time ends with the fetch
        progress.advance(InspectionState::Fetching)?;
        let started = Instant::now();
        let (fetched, tls) = tokio::join!(
            async {
                let result = fetch_page(&self.page_client, &url).await;
                (result, started.elapsed())
            },
            tls_info(&host, Duration::from_secs(self.config.tls_timeout_secs))
        );
        let (fetched, load_time) = fetched;

        let page = match fetched {
            Ok(page) => page,
            Err(e) => {
                progress.advance(InspectionState::FetchFailed)?;
                tracing::error!("Fetch failed for {}: {}", url, e);
                return Err(e);
            }
        };
        progress.advance(InspectionState::Fetched)?;
        tracing::info!(
            "Fetched {} ({} bytes, HTTP {}) in {:.2}s",
            page.final_url,
            page.body.len(),
            page.status_code,
            load_time.as_secs_f64()
        );

        progress.advance(InspectionState::Analyzing)?;
        let analysis = PageAnalysis::from_page(&url, &page, &host);
        drop(page);

        let files =
            probe_crawler_files(&self.probe_client, &base, &url, &self.config.user_agent).await;
        tracing::debug!(
            "Crawler files for {}: robots.txt {}, sitemap.xml {}",
            base,
            files.robots_text.is_some(),
            files.sitemap_present
        );

        let prompt = build_prompt(&analysis, &files, &tls);
        let model_id = self.provider.model();

        progress.advance(InspectionState::Summarizing)?;
        tracing::info!("Requesting summary from {}", model_id);
        let generation = match self.generator.generate(&prompt).await {
            Ok(generation) => generation,
            Err(source) => {
                progress.advance(InspectionState::SummarizeFailed)?;
                tracing::error!("Summarization failed for {}: {}", url, source);
                return Err(InspectError::Summarizer { url, source });
            }
        };

        progress.advance(InspectionState::Done)?;
        tracing::info!("Inspection of {} complete", url);

        Ok(assemble_report(
            analysis,
            files,
            tls,
            load_time,
            model_id,
            generation.text,
        ))
    }
}
