// Configuration type definitions

use serde::Deserialize;

use super::ai_types::AiConfig;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Trigger timing and signal keywords
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerConfig {
    /// Idle pause before a time-triggered suggestion fires
    #[serde(default = "default_idle_ms")]
    pub idle_ms: u64,
    /// Window after any fired request during which no automatic fire occurs
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    /// Keywords that qualify a pause as worth reacting to
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

fn default_idle_ms() -> u64 {
    9_000
}

fn default_cooldown_ms() -> u64 {
    5_000
}

fn default_keywords() -> Vec<String> {
    ["task:", "deadline", "schedule a meeting", "remind"]
        .iter()
        .map(|k| k.to_string())
        .collect()
}

impl Default for TriggerConfig {
    fn default() -> Self {
        TriggerConfig {
            idle_ms: default_idle_ms(),
            cooldown_ms: default_cooldown_ms(),
            keywords: default_keywords(),
        }
    }
}

/// Bubble presentation timing
#[derive(Debug, Clone, Deserialize)]
pub struct BubbleConfig {
    /// Delay before a hover-expanded bubble collapses after the pointer leaves
    #[serde(default = "default_hover_collapse_ms")]
    pub hover_collapse_ms: u64,
}

fn default_hover_collapse_ms() -> u64 {
    300
}

impl Default for BubbleConfig {
    fn default() -> Self {
        BubbleConfig {
            hover_collapse_ms: default_hover_collapse_ms(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub trigger: TriggerConfig,
    #[serde(default)]
    pub bubble: BubbleConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}
