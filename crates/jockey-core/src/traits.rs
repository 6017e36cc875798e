use crate::{
    error::JockeyError,
    message::{ChatBatch, Track},
};
use async_trait::async_trait;

/// Live chat feed trait — the ears.
///
/// Every chat platform (YouTube Live, and whatever comes next) implements
/// this trait to resolve an active session and page through its messages.
#[async_trait]
pub trait ChatFeed: Send + Sync {
    /// Human-readable feed name.
    fn name(&self) -> &str;

    /// Resolve the live chat session for a broadcast.
    ///
    /// Returns `None` when the broadcast exists but has no active live chat —
    /// callers treat that as a fatal precondition failure.
    async fn resolve_live_chat(&self, broadcast_id: &str)
        -> Result<Option<String>, JockeyError>;

    /// Fetch the next page of chat messages.
    ///
    /// `cursor` is the pagination token from the previous fetch, or `None`
    /// on the first call.
    async fn fetch(
        &self,
        live_chat_id: &str,
        cursor: Option<&str>,
    ) -> Result<ChatBatch, JockeyError>;
}

/// Text-generation provider trait — the brain.
///
/// Maps a natural-language instruction to a single reply string. The DJ
/// pipeline relies on the instruction itself to pin down the output format.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider requires an API key to function.
    fn requires_api_key(&self) -> bool;

    /// Send a prompt to the provider and get its reply text.
    async fn complete(&self, prompt: &str) -> Result<String, JockeyError>;

    /// Check if the provider is available and ready.
    async fn is_available(&self) -> bool;
}

/// Playback service trait — the hands.
///
/// Finds the best match for a search query and triggers playback as a side
/// effect. `Ok(None)` is the not-found outcome, not an error.
#[async_trait]
pub trait Player: Send + Sync {
    /// Human-readable player name.
    fn name(&self) -> &str;

    /// Search for the query and start playing the best match.
    async fn search_and_play(&self, query: &str) -> Result<Option<Track>, JockeyError>;
}
