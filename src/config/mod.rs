//! Configuration module for Parslink
//!
//! This module handles loading, validating and saving the TOML configuration
//! file, and exposes the [`ConfigProvider`] view the pipeline consumes.
//!
//! # Example
//!
//! ```no_run
//! use parslink::config::{default_config_path, load_or_default, ConfigProvider};
//!
//! let config = load_or_default(&default_config_path()).unwrap();
//! println!("Summaries will use: {}", config.model());
//! ```

mod parser;
mod provider;
mod types;
mod validation;

// Re-export types
pub use provider::{ConfigProvider, API_KEY_ENV};
pub use types::{
    Config, InspectorConfig, SummarizerConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{default_config_path, load_config, load_or_default, save_config};
pub use validation::validate;
