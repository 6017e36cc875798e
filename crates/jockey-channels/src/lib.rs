//! # jockey-channels
//!
//! Live chat platform integrations for jockey.

pub mod youtube;
