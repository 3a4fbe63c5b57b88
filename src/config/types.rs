use serde::{Deserialize, Serialize};

/// Default model used for summaries
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Default Generative Language API base URL
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Browser-like identification sent with every page request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for Parslink
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub summarizer: SummarizerConfig,
    #[serde(default)]
    pub inspector: InspectorConfig,
}

/// Language-model settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SummarizerConfig {
    /// API key; an empty string means "not configured"
    #[serde(default)]
    pub api_key: String,

    /// Model used for summaries
    #[serde(default = "default_model")]
    pub model: String,

    /// Models the `config` command accepts
    #[serde(default = "default_available_models")]
    pub available_models: Vec<String>,

    /// API base URL, without the `/models/...` suffix
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            available_models: default_available_models(),
            endpoint: default_endpoint(),
        }
    }
}

/// Network behavior of the inspection pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InspectorConfig {
    /// User-Agent header for the page fetch and auxiliary probes
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Timeout for the primary page fetch (seconds)
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Timeout for each robots.txt / sitemap.xml probe (seconds)
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,

    /// Timeout for the TLS connect and handshake (seconds)
    #[serde(default = "default_tls_timeout")]
    pub tls_timeout_secs: u64,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            fetch_timeout_secs: default_fetch_timeout(),
            probe_timeout_secs: default_probe_timeout(),
            tls_timeout_secs: default_tls_timeout(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_available_models() -> Vec<String> {
    vec!["gemini-pro".to_string(), "gemini-2.0-flash-exp".to_string()]
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_probe_timeout() -> u64 {
    5
}

fn default_tls_timeout() -> u64 {
    10
}
