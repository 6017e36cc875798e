//! The DJ loop — the polling state machine connecting chat, queue,
//! provider, and player.
//!
//! Each iteration: poll the chat feed (pagination cursor threaded between
//! iterations), extract and merge request candidates, pick one unplayed
//! request at random, resolve it to a track, mark it played, and print the
//! queue snapshot. With no unplayed requests the iteration idles. Every
//! external call is awaited sequentially and errors propagate out of the
//! loop — fail-fast, no retries. The fixed post-iteration sleep is the
//! only backpressure on the collaborators.

mod pipeline;

#[cfg(test)]
mod tests;

use jockey_core::{
    error::JockeyError,
    traits::{ChatFeed, Player, Provider},
};
use jockey_queue::{extract_requests, select_request, RequestStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// The chat DJ: owns the request queue and orchestrates the collaborators.
pub struct Dj {
    chat: Arc<dyn ChatFeed>,
    provider: Arc<dyn Provider>,
    player: Arc<dyn Player>,
    store: RequestStore,
    live_chat_id: String,
    command_prefix: String,
    poll_interval: Duration,
    /// Pagination cursor carried across iterations; `None` on the first poll.
    cursor: Option<String>,
}

impl Dj {
    /// Create a new DJ.
    pub fn new(
        chat: Arc<dyn ChatFeed>,
        provider: Arc<dyn Provider>,
        player: Arc<dyn Player>,
        store: RequestStore,
        live_chat_id: String,
        command_prefix: String,
        poll_interval: Duration,
    ) -> Self {
        Self {
            chat,
            provider,
            player,
            store,
            live_chat_id,
            command_prefix,
            poll_interval,
            cursor: None,
        }
    }

    /// Run the polling loop until shutdown or a collaborator failure.
    pub async fn run(mut self) -> Result<(), JockeyError> {
        info!(
            "jockey running | chat: {} | provider: {} | player: {} | every {}s",
            self.chat.name(),
            self.provider.name(),
            self.player.name(),
            self.poll_interval.as_secs(),
        );

        loop {
            self.tick().await?;

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        Ok(())
    }

    /// One full loop iteration: poll → extract → merge → select →
    /// resolve → mark → snapshot.
    async fn tick(&mut self) -> Result<(), JockeyError> {
        let batch = self
            .chat
            .fetch(&self.live_chat_id, self.cursor.as_deref())
            .await?;
        self.cursor = batch.next_cursor;

        let candidates = extract_requests(&self.command_prefix, &batch.messages);
        if !candidates.is_empty() {
            debug!("extracted {} candidate(s) from poll", candidates.len());
        }
        self.store.merge(&candidates)?;

        let Some(request) = select_request(self.store.records()).map(|r| r.text.clone()) else {
            debug!("no unplayed requests, idling");
            return Ok(());
        };

        let resolution =
            pipeline::resolve(self.provider.as_ref(), self.player.as_ref(), &request).await?;
        if resolution.track.is_none() {
            warn!(
                "no track found for '{request}' (query '{}'), marking played anyway",
                resolution.query
            );
        }

        // Resolution was attempted, so the request leaves the pool for good
        // whether or not a track was found.
        if !self.store.mark_played(&request)? {
            warn!("selected request '{request}' vanished from the queue");
        }

        println!("\n{}", console::style("Request queue").bold());
        print!("{}", self.store.snapshot());

        Ok(())
    }
}
