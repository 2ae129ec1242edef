//! Error types for pomctl operations.

use std::path::PathBuf;

/// Errors raised by the session core and its collaborators.
///
/// Only some of these ever reach the user. A malformed state file is logged
/// and read as an empty session, and a notifier failure is logged as a
/// warning by the timer.
#[derive(Debug, thiserror::Error)]
pub enum PomodoroError {
    #[error("Session file malformed: {path}: {source}")]
    MalformedStateFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session file write failed: {path}: {source}")]
    StateWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("History write failed: {0}")]
    HistoryWrite(String),

    #[error("History read failed: {0}")]
    HistoryRead(String),

    #[error("Session cannot be archived, it has no start, end or final status")]
    IncompleteSession,

    #[error("Failed to launch timer process: {0}")]
    TimerSpawn(#[source] std::io::Error),

    #[error("No notifier available: {0}")]
    NotifierUnavailable(String),

    #[error("Could not determine a home directory for pomctl")]
    HomeUnavailable,
}

/// Convenience type alias for Results using `PomodoroError`.
pub type Result<T> = std::result::Result<T, PomodoroError>;
