//! Parslink: a single-page website inspector
//!
//! This crate fetches one page, probes its TLS endpoint, extracts structure,
//! performance, SEO and security data, and asks a hosted language model for a
//! summary of the result.

pub mod config;
pub mod inspector;
pub mod output;
pub mod report;
pub mod state;
pub mod summarizer;
pub mod url;

use thiserror::Error;

/// Main error type for Parslink operations
///
/// Every variant here is fatal for an inspection. Recoverable failures (TLS
/// probe, robots.txt, sitemap.xml) never surface as an `InspectError`; they are
/// recorded inside the report instead.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API key not found. Use the `config` command or set GEMINI_API_KEY")]
    MissingApiKey,

    #[error("Failed to fetch {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("Failed to fetch {url}: HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Summarization failed for {url}: {source}")]
    Summarizer {
        url: String,
        source: summarizer::SummarizerError,
    },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::InspectionState,
        to: state::InspectionState,
    },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Parslink operations
pub type Result<T> = std::result::Result<T, InspectError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{Config, ConfigProvider};
pub use inspector::{inspect, Inspector};
pub use report::InspectionReport;
pub use state::InspectionState;
pub use summarizer::{GeminiClient, Generation, TextGenerator};
pub use url::{ensure_scheme, extract_host, normalize_url};
