//! Session history: an append-only log of finalized sessions.

mod connection;
mod queries;

pub use connection::HistoryDb;
use queries::HistoryQueries;

use crate::error::{PomodoroError, Result};
use crate::models::HistoryEntry;

/// Where finalized sessions are archived.
pub trait HistorySink {
    /// Append a finalized session.
    fn append(&self, entry: &HistoryEntry) -> Result<()>;

    /// The most recent entries, newest first.
    fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>>;

    /// Number of archived sessions.
    fn count(&self) -> Result<usize>;
}

impl HistorySink for HistoryDb {
    fn append(&self, entry: &HistoryEntry) -> Result<()> {
        let id = HistoryQueries::insert(self.conn(), entry)
            .map_err(|e| PomodoroError::HistoryWrite(format!("{e:#}")))?;
        tracing::info!(id, status = %entry.status, runtime = entry.runtime, "Session archived");
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        HistoryQueries::list_recent(self.conn(), limit)
            .map_err(|e| PomodoroError::HistoryRead(format!("{e:#}")))
    }

    fn count(&self) -> Result<usize> {
        HistoryQueries::count(self.conn()).map_err(|e| PomodoroError::HistoryRead(format!("{e:#}")))
    }
}
