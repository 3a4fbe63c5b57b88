//! Text-generation collaborator
//!
//! The pipeline only depends on the [`TextGenerator`] trait: one prompt in,
//! one block of text out. [`GeminiClient`] is the hosted implementation.

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a text-generation call
#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("Request to the model API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Model API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Model API returned no text")]
    EmptyResponse,
}

/// Text produced by a generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
}

/// A service that turns a prompt into text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for `prompt`; no retry is performed
    async fn generate(&self, prompt: &str) -> Result<Generation, SummarizerError>;
}
