//! YouTube Data API deserialization types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct YtVideoListResponse {
    #[serde(default)]
    pub items: Vec<YtVideo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct YtVideo {
    /// Absent on videos that are not (or never were) live broadcasts.
    pub live_streaming_details: Option<YtLiveStreamingDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct YtLiveStreamingDetails {
    /// Absent once the broadcast has ended.
    pub active_live_chat_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct YtChatListResponse {
    #[serde(default)]
    pub items: Vec<YtChatItem>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct YtChatItem {
    pub id: String,
    pub snippet: Option<YtChatSnippet>,
    pub author_details: Option<YtAuthorDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct YtChatSnippet {
    /// Absent on non-text events (member milestones, deleted messages, ...).
    pub display_message: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct YtAuthorDetails {
    pub channel_id: Option<String>,
    pub display_name: Option<String>,
}
