//! Home directory resolution and on-disk layout.
//!
//! Everything pomctl persists lives under one home directory:
//!
//! ```text
//! ~/.pomctl/
//!   session.json     current (or most recent) session
//!   history.db       finalized sessions (SQLite)
//!   logs/pomctl.log  diagnostics, including the detached timer's
//! ```
//!
//! The home can be moved with `--home` or `POMCTL_HOME`.

use std::path::{Path, PathBuf};

use crate::error::{PomodoroError, Result};

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "POMCTL_HOME";

const HOME_DIR_NAME: &str = ".pomctl";
const SESSION_FILE: &str = "session.json";
const HISTORY_DB: &str = "history.db";
const LOG_DIR: &str = "logs";

/// Paths used by a pomctl invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    home: PathBuf,
}

impl Config {
    /// Use the explicit home if given, otherwise `~/.pomctl`.
    pub fn resolve(home: Option<PathBuf>) -> Result<Self> {
        match home {
            Some(home) => Ok(Self::at(home)),
            None => dirs::home_dir()
                .map(|h| Self::at(h.join(HOME_DIR_NAME)))
                .ok_or(PomodoroError::HomeUnavailable),
        }
    }

    /// Config rooted at a specific directory.
    pub fn at(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn session_file(&self) -> PathBuf {
        self.home.join(SESSION_FILE)
    }

    pub fn history_db(&self) -> PathBuf {
        self.home.join(HISTORY_DB)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.home.join(LOG_DIR)
    }

    /// Create the home directory if needed. Returns `true` when it was created.
    pub fn ensure_home(&self) -> std::io::Result<bool> {
        if self.home.is_dir() {
            return Ok(false);
        }
        std::fs::create_dir_all(&self.home)?;
        Ok(true)
    }
}
