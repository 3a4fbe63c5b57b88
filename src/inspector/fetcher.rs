//! HTTP fetcher implementation
//!
//! This module handles all plain HTTP requests of an inspection:
//! - Building HTTP clients with the configured user agent and timeout
//! - The primary GET of the inspected page (fatal on failure)
//! - Best-effort GETs of auxiliary files (never fatal)

use crate::inspector::{ProbeFailure, ProbeFailureKind, ProbeResult};
use crate::InspectError;
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;

/// Upper bound on the TCP connect phase of any request
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,
    /// HTTP status code (always 2xx)
    pub status_code: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Cookies set by the response, by name
    pub cookies: BTreeMap<String, String>,
    /// Raw response body
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Body decoded as UTF-8, with invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Response of an auxiliary probe that answered 2xx
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status_code: u16,
    pub body: String,
}

/// Builds an HTTP client for one kind of request
///
/// Every stage of an inspection gets its own client, and idle connections
/// are not kept, so no connection is shared between stages.
///
/// # Arguments
///
/// * `user_agent` - Value of the `User-Agent` header
/// * `timeout` - Total timeout per request
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use parslink::inspector::build_http_client;
///
/// let client = build_http_client("Mozilla/5.0", Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(CONNECT_TIMEOUT.min(timeout))
        .pool_max_idle_per_host(0)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the page under inspection
///
/// # Error Classification
///
/// | Condition | Error |
/// |-----------|-------|
/// | Timeout | `InspectError::Timeout` |
/// | Non-2xx status | `InspectError::HttpStatus` |
/// | Any other transport error | `InspectError::Fetch` |
///
/// No retry is attempted; every error is fatal for the inspection.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, InspectError> {
    tracing::debug!("Fetching {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_fetch_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(InspectError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().to_string();
    let headers = response.headers().clone();
    let cookies = response
        .cookies()
        .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
        .collect::<BTreeMap<_, _>>();

    let body = response
        .bytes()
        .await
        .map_err(|e| classify_fetch_error(url, e))?
        .to_vec();

    tracing::debug!(
        "Fetched {} ({} bytes, status {})",
        final_url,
        body.len(),
        status.as_u16()
    );

    Ok(FetchedPage {
        final_url,
        status_code: status.as_u16(),
        headers,
        cookies,
        body,
    })
}

fn classify_fetch_error(url: &str, error: reqwest::Error) -> InspectError {
    if error.is_timeout() {
        InspectError::Timeout {
            url: url.to_string(),
        }
    } else {
        InspectError::Fetch {
            url: url.to_string(),
            source: error,
        }
    }
}

/// Best-effort GET of an auxiliary resource
///
/// Succeeds only for a 2xx answer whose body could be read. Every other
/// outcome becomes a `ProbeFailure` for the caller to record.
pub async fn probe_url(client: &Client, url: &str) -> ProbeResult<ProbeResponse> {
    let response = client.get(url).send().await.map_err(probe_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProbeFailure::new(
            ProbeFailureKind::Http,
            format!("{} returned HTTP {}", url, status.as_u16()),
        ));
    }

    let body = response.text().await.map_err(probe_error)?;

    Ok(ProbeResponse {
        status_code: status.as_u16(),
        body,
    })
}

fn probe_error(error: reqwest::Error) -> ProbeFailure {
    let kind = if error.is_timeout() {
        ProbeFailureKind::Timeout
    } else if error.is_connect() {
        ProbeFailureKind::Connect
    } else {
        ProbeFailureKind::Http
    };
    ProbeFailure::new(kind, error.to_string())
}
