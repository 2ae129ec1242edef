//! Data models for pomctl entities.

mod history;
mod session;

pub use history::HistoryEntry;
pub use session::{SessionRecord, SessionStatus, SessionUpdate};
