//! Spotify search-and-play.
//!
//! Authenticates with the client-credentials flow, searches for the single
//! best track match, and triggers playback by opening the track URL with
//! the platform opener. Client-credentials tokens cannot drive the
//! playback API directly, so "play" means handing the track to whatever
//! the OS opens Spotify links with — same contract as the desktop client.
//! Docs: <https://developer.spotify.com/documentation/web-api>

pub(crate) mod types;


use async_trait::async_trait;
use jockey_core::{
    config::SpotifyConfig,
    error::JockeyError,
    message::Track,
    traits::Player,
};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, warn};
use types::{SpSearchResponse, SpTokenResponse, SpTrackItem};

/// Spotify player using the Web API with client-credentials auth.
pub struct SpotifyPlayer {
    config: SpotifyConfig,
    client: reqwest::Client,
    access_token: String,
}

impl SpotifyPlayer {
    /// Authenticate and create a new player.
    pub async fn connect(config: SpotifyConfig) -> Result<Self, JockeyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| JockeyError::Playback(format!("failed to build http client: {e}")))?;

        let resp = client
            .post(&config.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", config.client_id.as_str()),
                ("client_secret", config.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| JockeyError::Playback(format!("spotify auth request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(JockeyError::Playback(format!(
                "spotify auth returned {status}: {text}"
            )));
        }

        let token: SpTokenResponse = resp
            .json()
            .await
            .map_err(|e| JockeyError::Playback(format!("spotify auth parse failed: {e}")))?;

        info!("Spotify authenticated");

        Ok(Self {
            config,
            client,
            access_token: token.access_token,
        })
    }

    /// Search for the best single track match.
    async fn search(&self, query: &str) -> Result<Option<Track>, JockeyError> {
        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        debug!("spotify: searching '{query}'");

        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .query(&[("q", query), ("type", "track"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| JockeyError::Playback(format!("spotify search failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(JockeyError::Playback(format!(
                "spotify search returned {status}: {text}"
            )));
        }

        let parsed: SpSearchResponse = resp
            .json()
            .await
            .map_err(|e| JockeyError::Playback(format!("spotify search parse failed: {e}")))?;

        Ok(parsed
            .tracks
            .and_then(|t| t.items.into_iter().next())
            .and_then(track_from_item))
    }
}

/// Map a search hit into a `Track`, dropping hits without a playable URL.
fn track_from_item(item: SpTrackItem) -> Option<Track> {
    let url = item.external_urls.and_then(|u| u.spotify)?;
    let artist = item
        .artists
        .into_iter()
        .next()
        .map(|a| a.name)
        .unwrap_or_default();
    Some(Track {
        title: item.name,
        artist,
        url,
    })
}

/// Platform opener invocation for a URL.
fn opener_args(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        ("cmd", vec!["/C".into(), "start".into(), String::new(), url.to_string()])
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// Open `url` with the platform opener, fire-and-forget.
fn launch(url: &str) -> Result<(), JockeyError> {
    let (program, args) = opener_args(url);
    Command::new(program)
        .args(&args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| JockeyError::Playback(format!("failed to launch {program}: {e}")))?;
    Ok(())
}

#[async_trait]
impl Player for SpotifyPlayer {
    fn name(&self) -> &str {
        "spotify"
    }

    async fn search_and_play(&self, query: &str) -> Result<Option<Track>, JockeyError> {
        match self.search(query).await? {
            Some(track) => {
                info!("playing: {} — {}", track.title, track.artist);
                launch(&track.url)?;
                Ok(Some(track))
            }
            None => {
                warn!("spotify: no track found for '{query}'");
                Ok(None)
            }
        }
    }
}
