//! The Pomodoro session state machine.
//!
//! ```text
//! (none) ──start──▶ RUNNING ──stop──▶ STOPPED ──resume──▶ RUNNING
//!                     │  │               │
//!                     │  └──timer ends──▶ FINISHED
//!                     └──cancel──────────┴──▶ CANCELLED
//! FINISHED / CANCELLED ──start / repeat──▶ RUNNING (new session)
//! RUNNING / STOPPED ──reset──▶ CANCELLED (archived) + new RUNNING
//! ```
//!
//! Illegal transitions are not errors: they produce an informational line
//! and leave the stored record untouched.

use chrono::NaiveDateTime;

use crate::clock::{self, Clock};
use crate::db::HistorySink;
use crate::error::{PomodoroError, Result};
use crate::models::{HistoryEntry, SessionRecord, SessionStatus, SessionUpdate};
use crate::process::TimerLauncher;

use super::SessionStore;

/// Tomato emoji, U+1F345.
pub const TOMATO: &str = "\u{1f345}";

/// Prefix a user-facing line with the tomato marker.
pub fn pomtext(text: &str) -> String {
    format!("( {TOMATO} ) {text}")
}

fn no_session_in_progress(text: &str) -> String {
    pomtext(&format!("No Pomodoro session in progress - {text}"))
}

impl SessionRecord {
    pub fn is_running(&self) -> bool {
        self.status == Some(SessionStatus::Running)
    }

    /// A session exists and has not been finalized.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self.status,
            Some(SessionStatus::Running | SessionStatus::Stopped)
        )
    }

    pub fn has_finished(&self) -> bool {
        self.status.is_some_and(SessionStatus::is_final)
    }

    /// Start shifted forward by the time spent paused.
    fn effective_start(&self) -> Option<NaiveDateTime> {
        self.start.map(|start| clock::add_seconds(start, self.paused))
    }
}

/// Render the one-line status of a record.
pub fn render_status(record: &SessionRecord) -> String {
    let (Some(status), Some(start)) = (record.status, record.start) else {
        return pomtext("No Pomodoro session found.");
    };

    let runtime = clock::format_duration(record.runtime);
    let runtime = if runtime.is_empty() { "-".to_string() } else { runtime };
    let label = status.label();
    let start_day = start.format("%Y-%m-%d");
    let start_time = start.format("%H:%M:%S");

    let message = match record.end {
        Some(end) if end.date() == start.date() => format!(
            "{label} ({runtime}) (from {start_time} to {}) [{start_day}]",
            end.format("%H:%M:%S")
        ),
        Some(end) => format!(
            "[{start_day}:{start_time}] [{}:{}] {label}",
            end.format("%Y-%m-%d"),
            end.format("%H:%M:%S")
        ),
        None => format!("{label} ({runtime}) (from {start_time}) [{start_day}]"),
    };
    pomtext(&message)
}

/// Command façade over the session store, the timer process and history.
pub struct Pomodoro {
    store: SessionStore,
    history: Box<dyn HistorySink>,
    timer: Box<dyn TimerLauncher>,
    clock: Box<dyn Clock>,
}

impl Pomodoro {
    pub fn new(
        store: SessionStore,
        history: Box<dyn HistorySink>,
        timer: Box<dyn TimerLauncher>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            store,
            history,
            timer,
            clock,
        }
    }

    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    #[cfg(test)]
    pub fn history(&self) -> &dyn HistorySink {
        self.history.as_ref()
    }

    /// The current (or most recent) session.
    pub fn current(&self) -> SessionRecord {
        self.store.read()
    }

    pub fn status(&self) -> String {
        render_status(&self.current())
    }

    /// Elapsed and remaining seconds of an in-progress session.
    ///
    /// Elapsed time excludes time spent paused: it is measured from `start`
    /// shifted by `paused`, not from the raw `start`. The reference point is
    /// `stop` for a paused session and now otherwise.
    pub fn runtimes(&self, record: &SessionRecord) -> Option<(i64, i64)> {
        if !record.is_in_progress() {
            return None;
        }
        let start = record.effective_start()?;
        let reference = record.stop.unwrap_or_else(|| self.clock.now());
        Some(clock::elapsed_remaining(start, record.runtime, reference))
    }

    /// Start a new session unless one is already in progress.
    pub fn start(&self, runtime: u64) -> Result<String> {
        if self.current().is_in_progress() {
            return Ok(pomtext("A Pomodoro session is already in progress."));
        }

        let pid = self.timer.spawn(runtime)?;
        let record = SessionRecord::started(pid, self.clock.now(), runtime);
        self.store.write(&record)?;
        tracing::info!(pid, runtime, "Session started");

        Ok(render_status(&record))
    }

    /// Pause the running session.
    pub fn stop(&self) -> Result<String> {
        let current = self.current();
        if !current.is_in_progress() {
            return Ok(no_session_in_progress("nothing to stop."));
        }
        if !current.is_running() {
            // Already stopped, just echo it.
            return Ok(render_status(&current));
        }

        self.kill_current(&current);
        let stopped = self.store.update(
            SessionUpdate::new()
                .pid(None)
                .stop(Some(self.clock.now()))
                .status(SessionStatus::Stopped),
        )?;
        tracing::info!("Session stopped");

        let mut lines = Vec::new();
        if let Some((elapsed, remaining)) = self.runtimes(&stopped) {
            lines.push(pomtext(&format!(
                "Session stopped - ({})",
                clock::elapsed_remaining_message(elapsed, remaining)
            )));
        }
        lines.push(render_status(&stopped));
        Ok(lines.join("\n"))
    }

    /// Resume a stopped session with whatever time it had left.
    pub fn resume(&self) -> Result<String> {
        let current = self.current();
        if !current.is_in_progress() {
            return Ok(no_session_in_progress("nothing to resume."));
        }
        if current.is_running() {
            return Ok(render_status(&current));
        }

        let Some((elapsed, remaining)) = self.runtimes(&current) else {
            return Ok(no_session_in_progress("nothing to resume."));
        };

        let now = self.clock.now();
        let paused_for = current
            .stop
            .map_or(0, |stop| u64::try_from((now - stop).num_seconds()).unwrap_or(0));
        let pid = self.timer.spawn(u64::try_from(remaining).unwrap_or(0))?;

        let resumed = self.store.update(
            SessionUpdate::new()
                .pid(Some(pid))
                .stop(None)
                .paused(current.paused.saturating_add(paused_for))
                .status(SessionStatus::Running),
        )?;
        tracing::info!(pid, remaining, "Session resumed");

        Ok([
            pomtext(&format!(
                "Session restarted - ({})",
                clock::elapsed_remaining_message(elapsed, remaining)
            )),
            render_status(&resumed),
        ]
        .join("\n"))
    }

    /// Cancel the session in progress and archive it.
    pub fn cancel(&self) -> Result<String> {
        let current = self.current();
        if !current.is_in_progress() {
            return Ok(no_session_in_progress("nothing to cancel."));
        }

        self.kill_current(&current);
        let cancelled = self.finish(self.clock.now(), SessionStatus::Cancelled)?;
        Ok(render_status(&cancelled))
    }

    /// Cancel the session in progress and start a fresh one with the same runtime.
    ///
    /// The superseded session is archived as cancelled.
    pub fn reset(&self) -> Result<String> {
        let current = self.current();
        if !current.is_in_progress() {
            return Ok(no_session_in_progress("nothing to reset / restart"));
        }

        self.kill_current(&current);
        let cancelled = self.finish(self.clock.now(), SessionStatus::Cancelled)?;
        self.start(cancelled.runtime)
    }

    /// Start a new session with the runtime of the last one.
    pub fn repeat(&self) -> Result<String> {
        let current = self.current();
        if current.is_in_progress() {
            return Ok(pomtext(
                "Can't repeat last session because it's still in progress.",
            ));
        }
        if current.is_empty() {
            return Ok(pomtext("No Pomodoro session to repeat."));
        }
        self.start(current.runtime)
    }

    /// Finalize the session and append it to history.
    pub fn finish(&self, end_time: NaiveDateTime, status: SessionStatus) -> Result<SessionRecord> {
        let finished = self.store.update(
            SessionUpdate::new()
                .pid(None)
                .stop(None)
                .end(Some(end_time))
                .status(status),
        )?;
        let entry = HistoryEntry::from_record(&finished).ok_or(PomodoroError::IncompleteSession)?;
        self.history.append(&entry)?;
        tracing::info!(%status, "Session finalized");
        Ok(finished)
    }

    /// Called by the timer process `pid` when its sleep ends.
    ///
    /// Finalizes the session only while that timer still owns it, so a stale
    /// timer can never finish a session it no longer runs.
    pub fn complete_timer(&self, pid: u32) -> Result<Option<SessionRecord>> {
        let current = self.current();
        if current.pid != Some(pid) || !current.is_running() {
            return Ok(None);
        }
        self.finish(self.clock.now(), SessionStatus::Finished).map(Some)
    }

    /// Kill the timer owning `record`, if any. `None` when nothing was killed.
    fn kill_current(&self, record: &SessionRecord) -> Option<u32> {
        let pid = record.pid?;
        let killed = self.timer.kill(pid);
        if killed.is_none() {
            tracing::debug!(pid, "Timer process already gone");
        }
        killed
    }

    /// Recent history, newest first.
    pub fn history_report(&self, limit: usize) -> Result<String> {
        let entries = self.history.recent(limit)?;
        if entries.is_empty() {
            return Ok(pomtext("No Pomodoro history yet."));
        }

        let mut lines: Vec<String> = entries
            .iter()
            .map(|entry| {
                let runtime = clock::format_duration(entry.runtime);
                format!(
                    "#{:<4} {} -> {}  {:<8} {}",
                    entry.id,
                    entry.start.format(clock::DATETIME_FORMAT),
                    entry.end.format(clock::DATETIME_FORMAT),
                    if runtime.is_empty() { "-" } else { runtime.as_str() },
                    entry.status.label(),
                )
            })
            .collect();
        lines.push(pomtext(&format!(
            "{} sessions recorded",
            self.history.count()?
        )));
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::DATETIME_FORMAT;
    use crate::db::HistoryDb;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use tempfile::{tempdir, TempDir};

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).unwrap()
    }

    #[derive(Clone)]
    struct ManualClock(Rc<Cell<NaiveDateTime>>);

    impl ManualClock {
        fn advance(&self, seconds: u64) {
            self.0.set(clock::add_seconds(self.0.get(), seconds));
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> NaiveDateTime {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct TimerLog {
        next_pid: u32,
        spawned: Vec<(u32, u64)>,
        alive: Vec<u32>,
        killed: Vec<u32>,
    }

    #[derive(Clone, Default)]
    struct FakeTimer(Rc<RefCell<TimerLog>>);

    impl TimerLauncher for FakeTimer {
        fn spawn(&self, runtime: u64) -> Result<u32> {
            let mut log = self.0.borrow_mut();
            log.next_pid += 1;
            let pid = 1000 + log.next_pid;
            log.spawned.push((pid, runtime));
            log.alive.push(pid);
            Ok(pid)
        }

        fn kill(&self, pid: u32) -> Option<u32> {
            let mut log = self.0.borrow_mut();
            let idx = log.alive.iter().position(|p| *p == pid)?;
            log.alive.remove(idx);
            log.killed.push(pid);
            Some(pid)
        }
    }

    struct Harness {
        clock: ManualClock,
        timer: FakeTimer,
        pomodoro: Pomodoro,
        _dir: TempDir,
    }

    fn harness() -> Harness {
        let dir = tempdir().unwrap();
        let clock = ManualClock(Rc::new(Cell::new(at("2026-10-19 09:00:00"))));
        let timer = FakeTimer::default();
        let pomodoro = Pomodoro::new(
            SessionStore::new(dir.path().join("session.json")),
            Box::new(HistoryDb::open_at(&dir.path().join("history.db")).unwrap()),
            Box::new(timer.clone()),
            Box::new(clock.clone()),
        );
        Harness {
            clock,
            timer,
            pomodoro,
            _dir: dir,
        }
    }

    #[test]
    fn test_predicates() {
        let mut record = SessionRecord::default();
        assert!(!record.is_running() && !record.is_in_progress() && !record.has_finished());

        for (status, running, in_progress, finished) in [
            (SessionStatus::Running, true, true, false),
            (SessionStatus::Stopped, false, true, false),
            (SessionStatus::Finished, false, false, true),
            (SessionStatus::Cancelled, false, false, true),
        ] {
            record.status = Some(status);
            assert_eq!(record.is_running(), running, "{status}");
            assert_eq!(record.is_in_progress(), in_progress, "{status}");
            assert_eq!(record.has_finished(), finished, "{status}");
        }
    }

    #[test]
    fn test_status_without_session() {
        let h = harness();
        assert_eq!(h.pomodoro.status(), pomtext("No Pomodoro session found."));
    }

    #[test]
    fn test_render_status_variants() {
        let mut record = SessionRecord::started(1, at("2026-10-19 09:00:00"), 300);
        assert_eq!(
            render_status(&record),
            pomtext("RUNNING (5m) (from 09:00:00) [2026-10-19]")
        );

        record.pid = None;
        record.end = Some(at("2026-10-19 09:05:00"));
        record.status = Some(SessionStatus::Finished);
        assert_eq!(
            render_status(&record),
            pomtext("FINISHED (5m) (from 09:00:00 to 09:05:00) [2026-10-19]")
        );

        record.start = Some(at("2026-10-19 23:58:00"));
        record.end = Some(at("2026-10-20 00:03:00"));
        assert_eq!(
            render_status(&record),
            pomtext("[2026-10-19:23:58:00] [2026-10-20:00:03:00] FINISHED")
        );

        record.runtime = 0;
        record.end = None;
        record.status = Some(SessionStatus::Stopped);
        assert_eq!(
            render_status(&record),
            pomtext("STOPPED (-) (from 23:58:00) [2026-10-19]")
        );
    }

    #[test]
    fn test_start_spawns_timer_and_writes_record() {
        let h = harness();
        let out = h.pomodoro.start(1500).unwrap();

        assert_eq!(out, pomtext("RUNNING (25m) (from 09:00:00) [2026-10-19]"));
        let record = h.pomodoro.current();
        assert_eq!(record.pid, Some(1001));
        assert_eq!(record.runtime, 1500);
        assert_eq!(record.start, Some(at("2026-10-19 09:00:00")));
        assert_eq!(h.timer.0.borrow().spawned, vec![(1001, 1500)]);
    }

    #[test]
    fn test_start_is_noop_while_in_progress() {
        let h = harness();
        h.pomodoro.start(300).unwrap();
        let before = h.pomodoro.current();

        h.clock.advance(10);
        let out = h.pomodoro.start(900).unwrap();

        assert_eq!(out, pomtext("A Pomodoro session is already in progress."));
        assert_eq!(h.pomodoro.current(), before);
        assert_eq!(h.timer.0.borrow().spawned.len(), 1);

        h.pomodoro.stop().unwrap();
        let stopped = h.pomodoro.current();
        h.pomodoro.start(900).unwrap();
        assert_eq!(h.pomodoro.current(), stopped);
    }

    #[test]
    fn test_stop_then_resume_preserves_runtime_and_start() {
        let h = harness();
        h.pomodoro.start(300).unwrap();
        h.clock.advance(60);

        let out = h.pomodoro.stop().unwrap();
        assert!(out.contains("Session stopped - (time elapsed: 1m, time remaining: 4m)"));
        assert!(out.ends_with(&pomtext("STOPPED (5m) (from 09:00:00) [2026-10-19]")));

        let stopped = h.pomodoro.current();
        assert_eq!(stopped.pid, None);
        assert_eq!(stopped.stop, Some(at("2026-10-19 09:01:00")));
        assert_eq!(h.timer.0.borrow().killed, vec![1001]);

        let out = h.pomodoro.resume().unwrap();
        assert!(out.contains("Session restarted - (time elapsed: 1m, time remaining: 4m)"));

        let resumed = h.pomodoro.current();
        assert!(resumed.is_running());
        assert_eq!(resumed.runtime, 300);
        assert_eq!(resumed.start, Some(at("2026-10-19 09:00:00")));
        assert_eq!(resumed.stop, None);
        assert_eq!(h.timer.0.borrow().spawned.last(), Some(&(1002, 240)));
        assert_eq!(h.pomodoro.runtimes(&resumed), Some((60, 240)));
    }

    #[test]
    fn test_pause_time_is_not_counted_as_elapsed() {
        let h = harness();
        h.pomodoro.start(1500).unwrap();
        h.clock.advance(300);
        h.pomodoro.stop().unwrap();

        h.clock.advance(600);
        h.pomodoro.resume().unwrap();
        h.clock.advance(60);
        h.pomodoro.stop().unwrap();

        let record = h.pomodoro.current();
        assert_eq!(record.paused, 600);
        assert_eq!(h.pomodoro.runtimes(&record), Some((360, 1140)));

        h.pomodoro.resume().unwrap();
        assert_eq!(h.timer.0.borrow().spawned.last().map(|s| s.1), Some(1140));
    }

    #[test]
    fn test_stop_when_already_stopped_echoes_status() {
        let h = harness();
        h.pomodoro.start(300).unwrap();
        h.pomodoro.stop().unwrap();
        let stopped = h.pomodoro.current();

        h.clock.advance(30);
        let out = h.pomodoro.stop().unwrap();
        assert_eq!(out, render_status(&stopped));
        assert_eq!(h.pomodoro.current(), stopped);
    }

    #[test]
    fn test_resume_while_running_is_noop() {
        let h = harness();
        h.pomodoro.start(300).unwrap();
        let out = h.pomodoro.resume().unwrap();
        assert_eq!(out, h.pomodoro.status());
        assert_eq!(h.timer.0.borrow().spawned.len(), 1);
    }

    #[test]
    fn test_cancel_archives_once() {
        let h = harness();
        h.pomodoro.start(300).unwrap();
        h.clock.advance(90);

        let out = h.pomodoro.cancel().unwrap();
        assert_eq!(
            out,
            pomtext("CANCELLED (5m) (from 09:00:00 to 09:01:30) [2026-10-19]")
        );

        let record = h.pomodoro.current();
        assert_eq!(record.status, Some(SessionStatus::Cancelled));
        assert_eq!(record.end, Some(at("2026-10-19 09:01:30")));
        assert_eq!(record.pid, None);

        let history = h.pomodoro.history().recent(10).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].runtime, 300);
        assert_eq!(history[0].status, SessionStatus::Cancelled);

        let again = h.pomodoro.cancel().unwrap();
        assert_eq!(
            again,
            pomtext("No Pomodoro session in progress - nothing to cancel.")
        );
        assert_eq!(h.pomodoro.history().count().unwrap(), 1);
    }

    #[test]
    fn test_cancel_stopped_session_without_timer() {
        let h = harness();
        h.pomodoro.start(300).unwrap();
        h.pomodoro.stop().unwrap();
        h.pomodoro.cancel().unwrap();

        assert_eq!(h.pomodoro.current().status, Some(SessionStatus::Cancelled));
        // Only the stop killed anything.
        assert_eq!(h.timer.0.borrow().killed, vec![1001]);
    }

    #[test]
    fn test_finished_session_rejects_stop_resume_reset() {
        let h = harness();
        h.pomodoro.start(300).unwrap();
        h.pomodoro.cancel().unwrap();

        assert_eq!(
            h.pomodoro.stop().unwrap(),
            pomtext("No Pomodoro session in progress - nothing to stop.")
        );
        assert_eq!(
            h.pomodoro.resume().unwrap(),
            pomtext("No Pomodoro session in progress - nothing to resume.")
        );
        assert_eq!(
            h.pomodoro.reset().unwrap(),
            pomtext("No Pomodoro session in progress - nothing to reset / restart")
        );
    }

    #[test]
    fn test_commands_without_any_session() {
        let h = harness();
        assert!(h.pomodoro.stop().unwrap().contains("nothing to stop."));
        assert!(h.pomodoro.resume().unwrap().contains("nothing to resume."));
        assert!(h.pomodoro.cancel().unwrap().contains("nothing to cancel."));
        assert_eq!(
            h.pomodoro.repeat().unwrap(),
            pomtext("No Pomodoro session to repeat.")
        );
        assert!(h.timer.0.borrow().spawned.is_empty());
    }

    #[test]
    fn test_reset_archives_and_restarts() {
        let h = harness();
        h.pomodoro.start(600).unwrap();
        h.clock.advance(120);

        let out = h.pomodoro.reset().unwrap();
        assert_eq!(out, pomtext("RUNNING (10m) (from 09:02:00) [2026-10-19]"));

        let record = h.pomodoro.current();
        assert_eq!(record.pid, Some(1002));
        assert_eq!(record.start, Some(at("2026-10-19 09:02:00")));
        assert_eq!(record.end, None);

        let history = h.pomodoro.history().recent(10).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].status, SessionStatus::Cancelled);
        assert_eq!(history[0].end, at("2026-10-19 09:02:00"));
        assert_eq!(h.timer.0.borrow().killed, vec![1001]);
    }

    #[test]
    fn test_repeat() {
        let h = harness();
        h.pomodoro.start(900).unwrap();
        assert_eq!(
            h.pomodoro.repeat().unwrap(),
            pomtext("Can't repeat last session because it's still in progress.")
        );

        h.pomodoro.cancel().unwrap();
        h.clock.advance(3600);
        let out = h.pomodoro.repeat().unwrap();
        assert_eq!(out, pomtext("RUNNING (15m) (from 10:00:00) [2026-10-19]"));
        assert_eq!(h.timer.0.borrow().spawned.last(), Some(&(1002, 900)));
    }

    #[test]
    fn test_complete_timer_requires_ownership() {
        let h = harness();
        h.pomodoro.start(300).unwrap();
        h.clock.advance(300);

        assert!(h.pomodoro.complete_timer(9999).unwrap().is_none());
        assert!(h.pomodoro.current().is_running());

        let finished = h.pomodoro.complete_timer(1001).unwrap().unwrap();
        assert_eq!(finished.status, Some(SessionStatus::Finished));
        assert_eq!(finished.end, Some(at("2026-10-19 09:05:00")));
        assert_eq!(finished.pid, None);

        // A second expiry of the same timer does nothing.
        assert!(h.pomodoro.complete_timer(1001).unwrap().is_none());
        assert_eq!(h.pomodoro.history().count().unwrap(), 1);
    }

    #[test]
    fn test_stopped_session_is_not_completed_by_timer() {
        let h = harness();
        h.pomodoro.start(300).unwrap();
        h.pomodoro.stop().unwrap();
        assert!(h.pomodoro.complete_timer(1001).unwrap().is_none());
        assert_eq!(h.pomodoro.current().status, Some(SessionStatus::Stopped));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let h = harness();

        assert!(h.pomodoro.start(300).unwrap().contains("RUNNING (5m)"));
        h.clock.advance(60);
        assert!(h.pomodoro.stop().unwrap().contains("STOPPED (5m)"));

        h.pomodoro.resume().unwrap();
        let (pid, runtime) = *h.timer.0.borrow().spawned.last().unwrap();
        assert_eq!(pid, 1002);
        assert_eq!(runtime, 240);

        assert!(h.pomodoro.cancel().unwrap().contains("CANCELLED (5m)"));
        let history = h.pomodoro.history().recent(10).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].runtime, 300);
        assert_eq!(history[0].status.as_str(), "cancelled");
    }

    #[test]
    fn test_history_report() {
        let h = harness();
        assert_eq!(
            h.pomodoro.history_report(10).unwrap(),
            pomtext("No Pomodoro history yet.")
        );

        h.pomodoro.start(1500).unwrap();
        h.clock.advance(1500);
        h.pomodoro.complete_timer(1001).unwrap();

        let report = h.pomodoro.history_report(10).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("#1    2026-10-19 09:00:00 -> 2026-10-19 09:25:00  25m"));
        assert!(lines[0].ends_with("FINISHED"));
        assert_eq!(lines[1], pomtext("1 sessions recorded"));
    }
}
