use serde::{Deserialize, Serialize};

use super::defaults::*;

/// YouTube Data API config (live chat feed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_youtube_base_url")]
    pub base_url: String,
    /// Per-request HTTP timeout so a hanging chat endpoint cannot stall
    /// the whole loop.
    #[serde(default = "default_chat_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_youtube_base_url(),
            request_timeout_secs: default_chat_timeout_secs(),
        }
    }
}

/// OpenAI-compatible provider config (song selection).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_openai_model")]
    pub model: String,
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    #[serde(default = "default_provider_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_openai_model(),
            base_url: default_openai_base_url(),
            request_timeout_secs: default_provider_timeout_secs(),
        }
    }
}

/// Spotify config (track search and playback).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyConfig {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default = "default_spotify_base_url")]
    pub base_url: String,
    /// Client-credentials token endpoint.
    #[serde(default = "default_spotify_token_url")]
    pub token_url: String,
    #[serde(default = "default_playback_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            base_url: default_spotify_base_url(),
            token_url: default_spotify_token_url(),
            request_timeout_secs: default_playback_timeout_secs(),
        }
    }
}
