//! Random selection of the next request to play.

use crate::store::{RequestRecord, Status};
use rand::seq::SliceRandom;

/// Pick one unplayed request uniformly at random.
///
/// Randomness is deliberate: it prevents request-order gaming and keeps
/// playback order unpredictable to the audience. Returns `None` when every
/// record is played (or the queue is empty) — the idle condition.
pub fn select_request(records: &[RequestRecord]) -> Option<&RequestRecord> {
    let unplayed: Vec<&RequestRecord> = records
        .iter()
        .filter(|r| r.status == Status::Unplayed)
        .collect();
    unplayed.choose(&mut rand::thread_rng()).copied()
}
