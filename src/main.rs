mod dj;

use clap::{Parser, Subcommand};
use dj::Dj;
use jockey_channels::youtube::YouTubeChat;
use jockey_core::{
    config, shellexpand,
    traits::{ChatFeed, Provider},
};
use jockey_playback::SpotifyPlayer;
use jockey_providers::OpenAiProvider;
use jockey_queue::RequestStore;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "jockey",
    version,
    about = "♪ jockey — live-stream chat DJ"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the DJ loop against a running live stream.
    Start,
    /// Check config completeness and collaborator availability.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Start => {
            let cfg = config::load(&cli.config)?;

            if cfg.youtube.api_key.is_empty() {
                anyhow::bail!(
                    "YouTube api_key is empty. Set it under [youtube] in config.toml."
                );
            }

            // Build the provider.
            let provider = OpenAiProvider::from_config(&cfg.openai)?;
            if !provider.is_available().await {
                anyhow::bail!(
                    "provider '{}' is not available. Check the [openai] api_key.",
                    provider.name()
                );
            }

            // Build the chat feed and the player.
            let chat = YouTubeChat::new(cfg.youtube.clone())?;
            let player = SpotifyPlayer::connect(cfg.spotify.clone()).await?;

            // Open the durable request queue.
            let store = RequestStore::open(shellexpand(&cfg.jockey.queue_path))?;

            let broadcast_id: String = cliclack::input("Broadcast (video) id")
                .placeholder("The id of the running live stream")
                .interact()?;

            // No active live chat is a fatal precondition: exit before the loop.
            let live_chat_id = chat
                .resolve_live_chat(&broadcast_id)
                .await?
                .ok_or_else(|| {
                    anyhow::anyhow!("no active live chat on broadcast '{broadcast_id}'")
                })?;

            println!("♪ jockey — starting chat DJ...");
            let dj = Dj::new(
                Arc::new(chat),
                Arc::new(provider),
                Arc::new(player),
                store,
                live_chat_id,
                cfg.jockey.command_prefix.clone(),
                Duration::from_secs(cfg.jockey.poll_interval_secs),
            );
            dj.run().await?;
        }
        Commands::Status => {
            let cfg = config::load(&cli.config)?;
            println!("♪ jockey — Status Check\n");
            println!("Config: {}", cli.config);
            println!("Queue file: {}", shellexpand(&cfg.jockey.queue_path));
            println!("Command prefix: {}", cfg.jockey.command_prefix);
            println!();

            let provider = OpenAiProvider::from_config(&cfg.openai)?;
            let available = provider.is_available().await;
            println!(
                "  openai: {}",
                if available { "available" } else { "not reachable" }
            );
            println!(
                "  youtube: {}",
                if cfg.youtube.api_key.is_empty() {
                    "missing api_key"
                } else {
                    "configured"
                }
            );
            println!(
                "  spotify: {}",
                if cfg.spotify.client_id.is_empty() || cfg.spotify.client_secret.is_empty() {
                    "missing credentials"
                } else {
                    "configured"
                }
            );
        }
    }

    Ok(())
}
