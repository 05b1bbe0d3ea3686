//! AI provider abstraction
//!
//! Defines the AiProvider enum, AiError types, and factory for creating
//! provider instances.

use thiserror::Error;

use crate::config::ai_types::AiConfig;

mod openai;

pub use openai::OpenAiClient;

/// Errors that can occur during AI operations
#[derive(Debug, Error)]
pub enum AiError {
    /// AI is not configured (missing API key or disabled)
    #[error("AI not configured: {0}")]
    NotConfigured(String),

    /// Network error during API request
    #[error("Network error: {0}")]
    Network(String),

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to serialize the API request
    #[error("Parse error: {0}")]
    Parse(String),
}

/// AI provider implementations
#[derive(Debug)]
pub enum AiProvider {
    /// OpenAI-style chat completions endpoint
    OpenAi(OpenAiClient),
}

impl AiProvider {
    /// Create an AI provider from configuration
    ///
    /// Returns an error if the configuration is invalid (e.g., missing API key)
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        if !config.enabled {
            return Err(AiError::NotConfigured(
                "AI is disabled in config".to_string(),
            ));
        }

        let api_key = config.credential().ok_or_else(|| {
            AiError::NotConfigured("Missing or empty API key in [ai] config".to_string())
        })?;

        if config.model.trim().is_empty() {
            return Err(AiError::NotConfigured(
                "Missing or empty model in [ai] config".to_string(),
            ));
        }

        Ok(AiProvider::OpenAi(OpenAiClient::new(
            api_key.to_string(),
            config.endpoint.clone(),
            config.model.clone(),
            config.max_tokens,
            config.temperature,
        )?))
    }

    /// Request one completion for the assembled prompt.
    ///
    /// An empty string means the endpoint produced no usable suggestion;
    /// that is not an error.
    pub fn complete(&self, prompt: &str) -> Result<String, AiError> {
        match self {
            AiProvider::OpenAi(client) => client.complete(prompt),
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
