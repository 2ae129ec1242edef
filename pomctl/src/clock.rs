//! Time arithmetic for Pomodoro sessions.
//!
//! Durations are whole seconds. The compact text form is `<H>h<M>m<S>s` with
//! zero components left out, so `3661` renders as `1h1m1s` and `0` renders as
//! an empty string.

use std::sync::LazyLock;

use chrono::{Local, NaiveDateTime, SubsecRound, TimeDelta};
use regex::Regex;

/// Format used for every timestamp persisted or displayed by pomctl.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Session length used when `start` is given no duration.
pub const DEFAULT_DURATION: &str = "25m";

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?").expect("duration pattern is valid")
});

/// Source of wall-clock time.
///
/// Commands never call `Local::now()` directly so that session arithmetic can
/// be driven by a manual clock in tests.
pub trait Clock {
    /// Current local time, truncated to whole seconds.
    fn now(&self) -> NaiveDateTime;
}

/// The real local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local().trunc_subsecs(0)
    }
}

/// Render seconds as `{h}h{m}m{s}s`, omitting zero components.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    if secs > 0 {
        out.push_str(&format!("{secs}s"));
    }
    out
}

/// Parse a duration in `<H>h<M>m<S>s` form (any subset, in that order) or a
/// bare integer number of seconds.
///
/// Anything that does not match contributes nothing, so garbage input and the
/// empty string both yield `0`.
pub fn parse_duration(text: &str) -> u64 {
    let text = text.trim();
    if let Ok(seconds) = text.parse::<u64>() {
        return seconds;
    }

    let Some(caps) = DURATION_RE.captures(text) else {
        return 0;
    };

    let component = |idx: usize, scale: u64| {
        caps.get(idx)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .map_or(0, |v| v.saturating_mul(scale))
    };

    component(1, 3600)
        .saturating_add(component(2, 60))
        .saturating_add(component(3, 1))
}

/// Elapsed and remaining seconds of a session measured at `reference`.
///
/// `reference` is "now" for a running session and the `stop` timestamp for a
/// paused one. Remaining goes negative once the session is overdue.
pub fn elapsed_remaining(start: NaiveDateTime, runtime: u64, reference: NaiveDateTime) -> (i64, i64) {
    let elapsed = (reference - start).num_seconds();
    let runtime = i64::try_from(runtime).unwrap_or(i64::MAX);
    (elapsed, runtime.saturating_sub(elapsed))
}

/// Shift a timestamp forward by a number of seconds.
pub fn add_seconds(at: NaiveDateTime, seconds: u64) -> NaiveDateTime {
    let seconds = i64::try_from(seconds).unwrap_or(i64::MAX);
    TimeDelta::try_seconds(seconds)
        .and_then(|delta| at.checked_add_signed(delta))
        .unwrap_or(at)
}

/// Format possibly-negative seconds, treating anything below zero as zero.
pub fn format_signed(seconds: i64) -> String {
    format_duration(u64::try_from(seconds).unwrap_or(0))
}

/// `time elapsed: X, time remaining: Y`
pub fn elapsed_remaining_message(elapsed: i64, remaining: i64) -> String {
    format!(
        "time elapsed: {}, time remaining: {}",
        format_signed(elapsed),
        format_signed(remaining)
    )
}
