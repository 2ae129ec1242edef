//! Background timer processes.
//!
//! A timer is pomctl re-executing itself as `pomctl --home <home> timer <secs>`
//! in its own process group. It keeps the launching terminal as stdout, when
//! there is one, so the console notifier can still reach the user. It
//! outlives the command that launched it, sleeps for the session's remaining
//! runtime, finalizes the session and notifies the user. Stop, cancel and
//! reset end it with a forced kill, so a killed timer never reaches the
//! finalizing code.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

use crate::error::{PomodoroError, Result};
use crate::notify::NotifierChain;
use crate::session::Pomodoro;

/// How long a fresh timer waits for the launching command to record its pid.
const OWNERSHIP_POLL_ATTEMPTS: u32 = 20;
const OWNERSHIP_POLL_INTERVAL: Duration = Duration::from_millis(100);

const FINISHED_MESSAGE: &str = "Pomodoro session finished!";

/// Launches and kills timer processes.
pub trait TimerLauncher {
    /// Start a detached timer for `runtime` seconds and return its pid.
    fn spawn(&self, runtime: u64) -> Result<u32>;

    /// Forcefully terminate `pid`. Returns `None` if no such process exists.
    fn kill(&self, pid: u32) -> Option<u32>;
}

/// Timer processes running the current executable.
#[derive(Debug, Clone)]
pub struct DetachedTimer {
    exe: PathBuf,
    home: PathBuf,
}

impl DetachedTimer {
    pub fn new(home: impl Into<PathBuf>) -> Result<Self> {
        let exe = std::env::current_exe().map_err(PomodoroError::TimerSpawn)?;
        Ok(Self {
            exe,
            home: home.into(),
        })
    }
}

impl TimerLauncher for DetachedTimer {
    fn spawn(&self, runtime: u64) -> Result<u32> {
        // A pipe would stay open until the timer exits, so only a terminal is shared.
        let stdout = if std::io::stdout().is_terminal() {
            Stdio::inherit()
        } else {
            Stdio::null()
        };

        let mut cmd = Command::new(&self.exe);
        cmd.arg("--home")
            .arg(&self.home)
            .args(["timer", &runtime.to_string()])
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // Keep the timer out of the terminal's process group so Ctrl-C in
            // the shell does not reach it.
            cmd.process_group(0);
        }

        let child = cmd.spawn().map_err(PomodoroError::TimerSpawn)?;
        let pid = child.id();
        tracing::debug!(pid, runtime, exe = %self.exe.display(), "Timer process launched");
        Ok(pid)
    }

    fn kill(&self, pid: u32) -> Option<u32> {
        #[cfg(unix)]
        let status = Command::new("kill")
            .args(["-9", &pid.to_string()])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        #[cfg(not(unix))]
        let status = Command::new("taskkill")
            .args(["/F", "/PID", &pid.to_string()])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(s) if s.success() => {
                tracing::debug!(pid, "Timer process killed");
                Some(pid)
            }
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(pid, error = %e, "Could not run kill");
                None
            }
        }
    }
}

/// Body of the background timer process.
///
/// Sleeps for `runtime` seconds, then finalizes the session if this process
/// still owns it and notifies the user.
pub async fn run(pomodoro: &Pomodoro, notifier: &NotifierChain, runtime: u64) -> Result<()> {
    let pid = std::process::id();
    tracing::info!(pid, runtime, "Timer started");

    tokio::time::sleep(Duration::from_secs(runtime)).await;

    // The launching command writes our pid right after spawning us; a very
    // short timer can wake up before that write lands.
    for attempt in 0..OWNERSHIP_POLL_ATTEMPTS {
        if let Some(record) = pomodoro.complete_timer(pid)? {
            tracing::info!(pid, status = ?record.status, "Timer completed session");
            if let Err(e) = notifier.notify(FINISHED_MESSAGE).await {
                tracing::warn!(error = %e, "Session finished but nobody was notified");
            }
            return Ok(());
        }
        if attempt + 1 < OWNERSHIP_POLL_ATTEMPTS {
            tokio::time::sleep(OWNERSHIP_POLL_INTERVAL).await;
        }
    }

    tracing::info!(pid, "Timer no longer owns the session, exiting");
    Ok(())
}
