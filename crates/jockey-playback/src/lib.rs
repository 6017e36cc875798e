//! # jockey-playback
//!
//! Music search and playback integration for jockey.

pub mod spotify;

pub use spotify::SpotifyPlayer;
