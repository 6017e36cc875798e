use thiserror::Error;

/// Top-level error type for jockey.
#[derive(Debug, Error)]
pub enum JockeyError {
    /// Error from the live chat feed.
    #[error("chat error: {0}")]
    Chat(String),

    /// Error from the text-generation provider.
    #[error("provider error: {0}")]
    Provider(String),

    /// Error from the playback service.
    #[error("playback error: {0}")]
    Playback(String),

    /// Request queue error.
    #[error("queue error: {0}")]
    Queue(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
