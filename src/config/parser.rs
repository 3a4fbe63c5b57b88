use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::{Path, PathBuf};

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use parslink::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Model: {}", config.summarizer.model);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Loads the configuration, or returns the defaults when the file does not exist
///
/// A file that exists but cannot be parsed or validated is still an error.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!(
            "No configuration at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }
    load_config(path)
}

/// Validates and writes a configuration file, creating parent directories
pub fn save_config(config: &Config, path: &Path) -> Result<(), ConfigError> {
    validate(config)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;

    Ok(())
}

/// Returns `$HOME/.parslink/config.toml`, or `./parslink.toml` without a home
pub fn default_config_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home).join(".parslink").join("config.toml"),
        _ => PathBuf::from("parslink.toml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[summarizer]
api-key = "secret"
model = "gemini-2.0-flash-exp"
available-models = ["gemini-pro", "gemini-2.0-flash-exp"]

[inspector]
fetch-timeout-secs = 20
probe-timeout-secs = 3
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.summarizer.api_key, "secret");
        assert_eq!(config.summarizer.model, "gemini-2.0-flash-exp");
        assert_eq!(config.inspector.fetch_timeout_secs, 20);
        assert_eq!(config.inspector.probe_timeout_secs, 3);
        // Unspecified fields fall back to defaults
        assert_eq!(config.inspector.tls_timeout_secs, 10);
        assert_eq!(
            config.summarizer.endpoint,
            crate::config::types::DEFAULT_ENDPOINT
        );
    }

    #[test]
    fn test_load_empty_file_gives_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[inspector]
fetch-timeout-secs = 0
"#;
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.summarizer.api_key = "abc".to_string();
        config.summarizer.model = "gemini-2.0-flash-exp".to_string();

        save_config(&config, &path).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.summarizer.model = "unknown".to_string();

        assert!(save_config(&config, &path).is_err());
        assert!(!path.exists());
    }
}
