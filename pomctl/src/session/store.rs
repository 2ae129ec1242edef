//! File-backed storage for the current session record.
//!
//! The foreground command and the background timer both read, merge and
//! write this file without locking. Writes go through a temp file and a rename
//! so a reader never sees a half-written record; concurrent updates are
//! last-write-wins.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{PomodoroError, Result};
use crate::models::{SessionRecord, SessionUpdate};

/// Handle to the session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored record.
    ///
    /// A missing, empty or unparsable file reads as the empty record.
    pub fn read(&self) -> SessionRecord {
        match self.try_read() {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable session file");
                SessionRecord::default()
            }
        }
    }

    fn try_read(&self) -> Result<SessionRecord> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(SessionRecord::default()),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read session file");
                return Ok(SessionRecord::default());
            }
        };

        if content.trim().is_empty() {
            return Ok(SessionRecord::default());
        }

        serde_json::from_str(&content).map_err(|source| PomodoroError::MalformedStateFile {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the stored record.
    pub fn write(&self, record: &SessionRecord) -> Result<()> {
        let write_err = |source: std::io::Error| PomodoroError::StateWrite {
            path: self.path.clone(),
            source,
        };

        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).map_err(write_err)?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
        serde_json::to_writer_pretty(&mut tmp, record)
            .map_err(|e| write_err(std::io::Error::from(e)))?;
        tmp.write_all(b"\n").map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        tracing::debug!(path = %self.path.display(), status = ?record.status, "Session written");
        Ok(())
    }

    /// Read, apply `update` over the current record, write, and return the result.
    ///
    /// Works when nothing has been stored yet: the update applies to the
    /// empty record.
    pub fn update(&self, update: SessionUpdate) -> Result<SessionRecord> {
        let mut record = self.read();
        update.apply_to(&mut record);
        self.write(&record)?;
        Ok(record)
    }
}
