//! # jockey-queue
//!
//! The DJ's request queue: extraction of command candidates from chat
//! batches, the durable deduplicated request store, and random selection
//! of the next request to play.

pub mod extract;
pub mod select;
pub mod store;

pub use extract::extract_requests;
pub use select::select_request;
pub use store::{RequestRecord, RequestStore, Status, PLAYED_MARKER};
