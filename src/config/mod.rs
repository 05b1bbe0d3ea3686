//! Configuration loading and type definitions

pub mod ai_types;
mod loader;
mod types;

pub use loader::{config_file_path, load_config};
pub use types::{BubbleConfig, ClipboardBackend, ClipboardConfig, Config, TriggerConfig};
