//! Session model representing the single current (or most recent) Pomodoro.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Status of a Pomodoro session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Timer is counting down.
    Running,
    /// Paused by the user, can be resumed.
    Stopped,
    /// Ended early by the user.
    Cancelled,
    /// Timer ran out.
    Finished,
}

impl SessionStatus {
    /// Convert status to string for storage.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Cancelled => "cancelled",
            Self::Finished => "finished",
        }
    }

    /// Parse status from its stored string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "running" => Some(Self::Running),
            "stopped" | "paused" => Some(Self::Stopped),
            "cancelled" | "canceled" => Some(Self::Cancelled),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }

    /// Upper-case label used in status lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Stopped => "STOPPED",
            Self::Cancelled => "CANCELLED",
            Self::Finished => "FINISHED",
        }
    }

    /// Whether this status can be written to history.
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Cancelled | Self::Finished)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The persisted session record.
///
/// Every field is optional on disk. Older files wrote absent values as empty
/// strings, which read back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// PID of the background timer that owns this session while it runs.
    #[serde(default, deserialize_with = "lenient_pid")]
    pub pid: Option<u32>,
    /// When the session was started. Kept across stop/resume.
    #[serde(default, with = "timestamp")]
    pub start: Option<NaiveDateTime>,
    /// When the session was last paused.
    #[serde(default, with = "timestamp")]
    pub stop: Option<NaiveDateTime>,
    /// When the session was finalized.
    #[serde(default, with = "timestamp")]
    pub end: Option<NaiveDateTime>,
    /// Intended length in seconds.
    #[serde(default)]
    pub runtime: u64,
    /// Total seconds spent paused so far.
    #[serde(default)]
    pub paused: u64,
    /// Current status, `None` when nothing has ever been recorded.
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<SessionStatus>,
}

impl SessionRecord {
    /// A freshly started session.
    pub const fn started(pid: u32, start: NaiveDateTime, runtime: u64) -> Self {
        Self {
            pid: Some(pid),
            start: Some(start),
            stop: None,
            end: None,
            runtime,
            paused: 0,
            status: Some(SessionStatus::Running),
        }
    }

    /// True when no session has ever been written.
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.start.is_none()
    }
}

/// A partial update applied field by field over a [`SessionRecord`].
///
/// An outer `None` leaves the field untouched; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    pub pid: Option<Option<u32>>,
    pub stop: Option<Option<NaiveDateTime>>,
    pub end: Option<Option<NaiveDateTime>>,
    pub paused: Option<u64>,
    pub status: Option<SessionStatus>,
}

impl SessionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn pid(mut self, pid: Option<u32>) -> Self {
        self.pid = Some(pid);
        self
    }

    pub const fn stop(mut self, stop: Option<NaiveDateTime>) -> Self {
        self.stop = Some(stop);
        self
    }

    pub const fn end(mut self, end: Option<NaiveDateTime>) -> Self {
        self.end = Some(end);
        self
    }

    pub const fn paused(mut self, paused: u64) -> Self {
        self.paused = Some(paused);
        self
    }

    pub const fn status(mut self, status: SessionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Overwrite every field this update sets.
    pub fn apply_to(self, record: &mut SessionRecord) {
        if let Some(pid) = self.pid {
            record.pid = pid;
        }
        if let Some(stop) = self.stop {
            record.stop = stop;
        }
        if let Some(end) = self.end {
            record.end = end;
        }
        if let Some(paused) = self.paused {
            record.paused = paused;
        }
        if let Some(status) = self.status {
            record.status = Some(status);
        }
    }
}

fn lenient_pid<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPid {
        Number(u32),
        Text(String),
    }

    Ok(match Option::<RawPid>::deserialize(deserializer)? {
        Some(RawPid::Number(pid)) => Some(pid),
        Some(RawPid::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

fn lenient_status<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<SessionStatus>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => SessionStatus::from_str(s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown session status: {s}"))),
    }
}

/// Optional timestamps stored as `YYYY-MM-DD HH:MM:SS`, with `""` meaning absent.
mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::clock::DATETIME_FORMAT;

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(at) => serializer.serialize_str(&at.format(DATETIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
