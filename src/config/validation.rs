use crate::config::types::{Config, InspectorConfig, SummarizerConfig};
use crate::ConfigError;
use url::Url;

/// Upper bound for any configured timeout (seconds)
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_summarizer_config(&config.summarizer)?;
    validate_inspector_config(&config.inspector)?;
    Ok(())
}

/// Validates summarizer configuration
fn validate_summarizer_config(config: &SummarizerConfig) -> Result<(), ConfigError> {
    if config.model.trim().is_empty() {
        return Err(ConfigError::Validation("model cannot be empty".to_string()));
    }

    if config.available_models.is_empty() {
        return Err(ConfigError::Validation(
            "available_models must list at least one model".to_string(),
        ));
    }

    if !config.available_models.contains(&config.model) {
        return Err(ConfigError::Validation(format!(
            "model '{}' is not one of the available models: {}",
            config.model,
            config.available_models.join(", ")
        )));
    }

    let endpoint = Url::parse(&config.endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid endpoint: {}", e)))?;

    if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Endpoint '{}' must use HTTP or HTTPS",
            config.endpoint
        )));
    }

    Ok(())
}

/// Validates inspector configuration
fn validate_inspector_config(config: &InspectorConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    validate_timeout("fetch_timeout_secs", config.fetch_timeout_secs)?;
    validate_timeout("probe_timeout_secs", config.probe_timeout_secs)?;
    validate_timeout("tls_timeout_secs", config.tls_timeout_secs)?;

    Ok(())
}

fn validate_timeout(name: &str, secs: u64) -> Result<(), ConfigError> {
    if !(1..=MAX_TIMEOUT_SECS).contains(&secs) {
        return Err(ConfigError::Validation(format!(
            "{} must be between 1 and {}, got {}",
            name, MAX_TIMEOUT_SECS, secs
        )));
    }
    Ok(())
}
