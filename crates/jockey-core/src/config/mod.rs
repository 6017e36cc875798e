mod collaborators;
mod defaults;


pub use collaborators::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::JockeyError;
use defaults::*;

/// Top-level jockey configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub jockey: JockeyConfig,
    #[serde(default)]
    pub youtube: YouTubeConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub spotify: SpotifyConfig,
}

/// General DJ settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JockeyConfig {
    /// Chat command that marks a song request (e.g. `/dj never gonna ...`).
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
    /// Seconds to wait between loop iterations. The only backpressure on
    /// every external call the loop makes.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// Path of the durable request queue file.
    #[serde(default = "default_queue_path")]
    pub queue_path: String,
}

impl Default for JockeyConfig {
    fn default() -> Self {
        Self {
            command_prefix: default_command_prefix(),
            poll_interval_secs: default_poll_interval(),
            queue_path: default_queue_path(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, JockeyError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| JockeyError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| JockeyError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
