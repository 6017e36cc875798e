//! Default value functions used by serde for config deserialization.

pub fn default_command_prefix() -> String {
    "/dj".to_string()
}

pub fn default_poll_interval() -> u64 {
    10
}

pub fn default_queue_path() -> String {
    "~/.jockey/requests.txt".to_string()
}

pub fn default_youtube_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

pub fn default_openai_model() -> String {
    "gpt-4o".to_string()
}

pub fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

pub fn default_spotify_base_url() -> String {
    "https://api.spotify.com/v1".to_string()
}

pub fn default_spotify_token_url() -> String {
    "https://accounts.spotify.com/api/token".to_string()
}

pub fn default_chat_timeout_secs() -> u64 {
    30
}

pub fn default_provider_timeout_secs() -> u64 {
    60
}

pub fn default_playback_timeout_secs() -> u64 {
    30
}
