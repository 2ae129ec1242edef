//! Current session tracking.
//!
//! - [`store`]: the JSON record shared by commands and the timer process
//! - [`machine`]: state predicates, transitions and status rendering

mod machine;
mod store;

pub use machine::{pomtext, Pomodoro, TOMATO};
pub use store::SessionStore;
