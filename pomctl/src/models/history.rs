//! History entry representing one finalized Pomodoro session.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::session::{SessionRecord, SessionStatus};

/// A finalized session as stored in history. Never mutated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Row identifier (set by database on insert).
    pub id: i64,
    /// When the session started.
    pub start: NaiveDateTime,
    /// When the session was finalized.
    pub end: NaiveDateTime,
    /// Intended length in seconds.
    pub runtime: u64,
    /// Final status, always `Finished` or `Cancelled`.
    pub status: SessionStatus,
}

impl HistoryEntry {
    /// Build an entry from a finalized session record.
    ///
    /// Returns `None` unless the record has a start, an end and a final status.
    pub fn from_record(record: &SessionRecord) -> Option<Self> {
        if !record.has_finished() {
            return None;
        }
        Some(Self {
            id: 0, // Will be set by database on insert
            start: record.start?,
            end: record.end?,
            runtime: record.runtime,
            status: record.status?,
        })
    }
}
