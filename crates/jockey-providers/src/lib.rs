//! # jockey-providers
//!
//! Text-generation provider implementations for jockey.

pub mod openai;

pub use openai::OpenAiProvider;
