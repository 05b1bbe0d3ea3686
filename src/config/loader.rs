//! Config file discovery and loading
//!
//! The config file is optional; a missing file yields defaults. The
//! OPENAI_API_KEY environment variable overrides the configured credential.

use std::path::{Path, PathBuf};

use crate::error::NudgeError;

use super::types::Config;

/// Environment variable that overrides `[ai] api_key`
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default config location: `<config_dir>/nudge/config.toml`
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nudge").join("config.toml"))
}

/// Load configuration from `path` (or the default location), then apply
/// environment overrides. A missing file is not an error.
pub fn load_config(path: Option<&Path>) -> Result<Config, NudgeError> {
    let resolved = match path {
        Some(p) => Some(p.to_path_buf()),
        None => config_file_path(),
    };

    let mut config = match resolved {
        Some(ref file) if file.exists() => {
            let raw = std::fs::read_to_string(file).map_err(|source| NudgeError::ReadFile {
                path: file.display().to_string(),
                source,
            })?;
            toml::from_str(&raw).map_err(|e| NudgeError::InvalidConfig {
                path: file.display().to_string(),
                message: e.to_string(),
            })?
        }
        _ => Config::default(),
    };

    if let Ok(key) = std::env::var(API_KEY_ENV)
        && !key.trim().is_empty()
    {
        config.ai.api_key = Some(key);
    }

    Ok(config)
}
