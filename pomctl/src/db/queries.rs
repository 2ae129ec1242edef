//! History query implementations.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

use crate::clock::DATETIME_FORMAT;
use crate::models::{HistoryEntry, SessionStatus};

/// Parse a stored timestamp, accepting RFC 3339 as a fallback.
fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, DATETIME_FORMAT) {
        return Ok(naive);
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }

    anyhow::bail!("Invalid timestamp format: {s}")
}

/// Queries for the sessions history table.
pub struct HistoryQueries;

impl HistoryQueries {
    /// Append a finalized session. Returns the new row id.
    pub fn insert(conn: &Connection, entry: &HistoryEntry) -> Result<i64> {
        let runtime = i64::try_from(entry.runtime).context("Runtime too large to store")?;
        conn.execute(
            r"INSERT INTO sessions (start, end, runtime, status)
              VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.start.format(DATETIME_FORMAT).to_string(),
                entry.end.format(DATETIME_FORMAT).to_string(),
                runtime,
                entry.status.as_str(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// List the most recent sessions, newest first.
    pub fn list_recent(conn: &Connection, limit: usize) -> Result<Vec<HistoryEntry>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = conn.prepare(
            r"SELECT id, start, end, runtime, status
              FROM sessions ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], |row| Ok(Self::row_to_entry(row)))?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row??);
        }
        Ok(entries)
    }

    /// Count stored sessions.
    pub fn count(conn: &Connection) -> Result<usize> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Convert a row to a `HistoryEntry`.
    fn row_to_entry(row: &rusqlite::Row<'_>) -> Result<HistoryEntry> {
        let status_str: String = row.get(4)?;
        let status = SessionStatus::from_str(&status_str)
            .with_context(|| format!("Invalid session status: {status_str}"))?;

        let start_str: String = row.get(1)?;
        let end_str: String = row.get(2)?;
        let runtime: i64 = row.get(3)?;

        Ok(HistoryEntry {
            id: row.get(0)?,
            start: parse_timestamp(&start_str)?,
            end: parse_timestamp(&end_str)?,
            runtime: u64::try_from(runtime).unwrap_or(0),
            status,
        })
    }
}
