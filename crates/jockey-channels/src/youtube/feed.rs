//! ChatFeed trait implementation over the Data API.

use super::types::{YtChatListResponse, YtVideoListResponse};
use super::YouTubeChat;
use async_trait::async_trait;
use chrono::Utc;
use jockey_core::{
    error::JockeyError,
    message::{ChatBatch, ChatMessage},
    traits::ChatFeed,
};
use tracing::debug;

#[async_trait]
impl ChatFeed for YouTubeChat {
    fn name(&self) -> &str {
        "youtube"
    }

    async fn resolve_live_chat(
        &self,
        broadcast_id: &str,
    ) -> Result<Option<String>, JockeyError> {
        let url = format!("{}/videos", self.config.base_url.trim_end_matches('/'));

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("part", "liveStreamingDetails"),
                ("id", broadcast_id),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| JockeyError::Chat(format!("youtube videos request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(JockeyError::Chat(format!(
                "youtube videos returned {status}: {text}"
            )));
        }

        let parsed: YtVideoListResponse = resp
            .json()
            .await
            .map_err(|e| JockeyError::Chat(format!("youtube videos parse failed: {e}")))?;

        Ok(parsed
            .items
            .into_iter()
            .next()
            .and_then(|v| v.live_streaming_details)
            .and_then(|d| d.active_live_chat_id))
    }

    async fn fetch(
        &self,
        live_chat_id: &str,
        cursor: Option<&str>,
    ) -> Result<ChatBatch, JockeyError> {
        let url = format!(
            "{}/liveChatMessages",
            self.config.base_url.trim_end_matches('/')
        );

        let mut query = vec![
            ("liveChatId", live_chat_id),
            ("part", "id,snippet,authorDetails"),
            ("key", self.config.api_key.as_str()),
        ];
        if let Some(token) = cursor {
            query.push(("pageToken", token));
        }

        let resp = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| JockeyError::Chat(format!("youtube chat poll failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(JockeyError::Chat(format!(
                "youtube chat poll returned {status}: {text}"
            )));
        }

        let parsed: YtChatListResponse = resp
            .json()
            .await
            .map_err(|e| JockeyError::Chat(format!("youtube chat parse failed: {e}")))?;

        let messages: Vec<ChatMessage> = parsed
            .items
            .into_iter()
            .filter_map(|item| {
                // Non-text events (milestones, deletions) carry no display text.
                let snippet = item.snippet?;
                let text = snippet.display_message?;
                let author = item.author_details;
                Some(ChatMessage {
                    id: item.id,
                    author_id: author
                        .as_ref()
                        .and_then(|a| a.channel_id.clone())
                        .unwrap_or_default(),
                    author_name: author.and_then(|a| a.display_name),
                    text,
                    published_at: snippet.published_at.unwrap_or_else(Utc::now),
                })
            })
            .collect();

        debug!(
            "youtube: fetched {} message(s), next cursor {:?}",
            messages.len(),
            parsed.next_page_token
        );

        Ok(ChatBatch {
            messages,
            next_cursor: parsed.next_page_token,
        })
    }
}
