//! AI configuration types

use serde::Deserialize;

/// Default chat completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// AI configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Whether ambient suggestions are enabled at all
    #[serde(default)]
    pub enabled: bool,
    /// Bearer token for the suggestion endpoint; the OPENAI_API_KEY
    /// environment variable overrides this at load time
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Free-text description of the user's writing style, injected into
    /// every prompt when present
    #[serde(default)]
    pub style_profile: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    80
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            enabled: false,
            api_key: None,
            endpoint: default_endpoint(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            style_profile: String::new(),
        }
    }
}

impl AiConfig {
    /// The credential, if present and non-empty
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}
