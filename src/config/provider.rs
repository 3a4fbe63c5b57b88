use crate::config::types::Config;

/// Environment variable consulted when the config file has no API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Read access to the two settings the pipeline needs
///
/// The pipeline never reaches for global state; callers pass a provider into
/// [`crate::inspector::Inspector::new`].
pub trait ConfigProvider: Send + Sync {
    /// The summarizer API key, if one is configured
    fn api_key(&self) -> Option<String>;

    /// The model identifier used for summaries
    fn model(&self) -> String;
}

impl Config {
    /// Resolves the API key from the file, falling back to `env_value`
    ///
    /// Empty strings on either side count as "not set".
    pub fn resolve_api_key(&self, env_value: Option<String>) -> Option<String> {
        let from_file = self.summarizer.api_key.trim();
        if !from_file.is_empty() {
            return Some(from_file.to_string());
        }

        env_value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

impl ConfigProvider for Config {
    fn api_key(&self) -> Option<String> {
        self.resolve_api_key(std::env::var(API_KEY_ENV).ok())
    }

    fn model(&self) -> String {
        self.summarizer.model.clone()
    }
}
