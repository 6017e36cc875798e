//! Durable request queue — the sole owner of persisted DJ state.
//!
//! One request per line; a trailing `*` marks a record as played. Line
//! order is append order and positions are never renumbered. Records are
//! never deleted: a request that was ever serviced stays in the file so it
//! can never re-enter the unplayed pool.
//!
//! The in-memory vector is authoritative between mutations and every
//! mutation rewrites the whole file through a temp-file + rename, so a
//! crash cannot leave a torn queue. The store assumes exactly one process
//! writes it at a time; concurrent instances would race whole-file
//! rewrites (last write wins).

use jockey_core::error::JockeyError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Trailing marker character denoting a played record in the queue file.
pub const PLAYED_MARKER: char = '*';

/// Played/unplayed state of a queued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Unplayed,
    Played,
}

/// One queued song request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    /// The trimmed request text; doubles as the dedup key.
    pub text: String,
    pub status: Status,
    /// Insertion order, never renumbered.
    pub position: usize,
}

/// Durable, ordered, deduplicated queue of song requests.
pub struct RequestStore {
    path: PathBuf,
    records: Vec<RequestRecord>,
}

/// Normalize a request text for dedup comparison: trim whitespace and strip
/// an accidental trailing played marker.
pub fn normalize_key(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed.strip_suffix(PLAYED_MARKER).unwrap_or(trimmed)
}

impl RequestStore {
    /// Open the store at `path`, parsing the existing queue file if any.
    ///
    /// A missing file is an empty store; the parent directory is created
    /// so the first persist can succeed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, JockeyError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    JockeyError::Queue(format!("failed to create queue dir: {e}"))
                })?;
            }
        }

        let records = match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(JockeyError::Queue(format!(
                    "failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        debug!(
            "request store opened: {} records at {}",
            records.len(),
            path.display()
        );

        Ok(Self { path, records })
    }

    /// The full ordered sequence of records.
    pub fn records(&self) -> &[RequestRecord] {
        &self.records
    }

    /// Path of the queue file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Merge a batch of candidates into the queue, in order.
    ///
    /// A candidate whose normalized key matches any existing record — played
    /// or not — is silently dropped: it is neither duplicated, re-queued,
    /// nor promoted. New candidates are appended as `Unplayed` with the next
    /// position. The store is persisted once after the batch. Returns the
    /// number of records appended.
    pub fn merge<S: AsRef<str>>(&mut self, candidates: &[S]) -> Result<usize, JockeyError> {
        let mut appended = 0;
        for candidate in candidates {
            let key = normalize_key(candidate.as_ref());
            if self.records.iter().any(|r| r.text == key) {
                continue;
            }
            self.records.push(RequestRecord {
                text: key.to_string(),
                status: Status::Unplayed,
                position: self.records.len(),
            });
            appended += 1;
        }
        self.persist()?;
        if appended > 0 {
            debug!("merged {appended} new request(s), {} total", self.records.len());
        }
        Ok(appended)
    }

    /// Mark the record matching `text` as played and persist.
    ///
    /// Returns `false` (a no-op, never an error) when no record matches —
    /// the caller may hold a selection the store no longer recognizes.
    /// A played record never reverts.
    pub fn mark_played(&mut self, text: &str) -> Result<bool, JockeyError> {
        match self.records.iter_mut().find(|r| r.text == text) {
            Some(record) => {
                record.status = Status::Played;
                self.persist()?;
                Ok(true)
            }
            None => {
                debug!("mark_played: no record for '{text}', ignoring");
                Ok(false)
            }
        }
    }

    /// The full persisted text representation, for observability.
    pub fn snapshot(&self) -> String {
        self.render()
    }

    fn parse(content: &str) -> Vec<RequestRecord> {
        content
            .lines()
            .enumerate()
            .map(|(position, line)| {
                let trimmed = line.trim();
                match trimmed.strip_suffix(PLAYED_MARKER) {
                    Some(text) => RequestRecord {
                        text: text.to_string(),
                        status: Status::Played,
                        position,
                    },
                    None => RequestRecord {
                        text: trimmed.to_string(),
                        status: Status::Unplayed,
                        position,
                    },
                }
            })
            .collect()
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&record.text);
            if record.status == Status::Played {
                out.push(PLAYED_MARKER);
            }
            out.push('\n');
        }
        out
    }

    /// Rewrite the whole queue file atomically (temp file + rename).
    fn persist(&self) -> Result<(), JockeyError> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, self.render()).map_err(|e| {
            JockeyError::Queue(format!("failed to write {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            JockeyError::Queue(format!("failed to replace {}: {e}", self.path.display()))
        })?;
        Ok(())
    }
}
