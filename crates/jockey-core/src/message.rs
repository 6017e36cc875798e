use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single chat message pulled from the live feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Platform-assigned message id.
    pub id: String,
    /// Platform-specific author id (e.g. YouTube channel id).
    pub author_id: String,
    /// Human-readable author name.
    pub author_name: Option<String>,
    /// Message text content.
    pub text: String,
    pub published_at: DateTime<Utc>,
}

/// One page of chat messages plus the cursor for the next fetch.
///
/// The cursor is threaded through loop iterations by the caller; the feed
/// itself is stateless between fetches.
#[derive(Debug, Clone, Default)]
pub struct ChatBatch {
    /// Messages in arrival order. May be empty.
    pub messages: Vec<ChatMessage>,
    /// Pagination cursor for the next fetch, if the platform returned one.
    pub next_cursor: Option<String>,
}

/// A playable track resolved from a search query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    /// External URL used to trigger playback.
    pub url: String,
}
