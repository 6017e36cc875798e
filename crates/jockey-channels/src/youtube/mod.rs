//! YouTube Live chat feed.
//!
//! Resolves a broadcast's active live chat via `videos.list` and pages
//! through messages with `liveChatMessages.list`.
//! Docs: <https://developers.google.com/youtube/v3/live/docs>

mod feed;
pub(crate) mod types;


use jockey_core::{config::YouTubeConfig, error::JockeyError};
use std::time::Duration;

/// YouTube Live chat feed using the Data API v3 with API-key auth.
pub struct YouTubeChat {
    config: YouTubeConfig,
    client: reqwest::Client,
}

impl YouTubeChat {
    /// Create a new YouTube feed from config.
    pub fn new(config: YouTubeConfig) -> Result<Self, JockeyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| JockeyError::Chat(format!("failed to build http client: {e}")))?;
        Ok(Self { config, client })
    }
}
