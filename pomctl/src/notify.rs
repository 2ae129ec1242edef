//! End-of-session notifications.
//!
//! Strategies are tried in order until one succeeds: a native desktop
//! notification, then the platform's notification tool, then a line on
//! standard output.

use std::io::{IsTerminal, Write};
use std::time::Duration;

use notify_rust::Notification;

use crate::error::{PomodoroError, Result};
use crate::process::{spawn_process, ProcessOptions};
use crate::session::pomtext;

const APP_NAME: &str = "pomctl";
const SUMMARY: &str = "Pomodoro";
const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// One way of telling the user something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notifier {
    /// Native notification through the desktop's notification service.
    Desktop,
    /// An external tool; `{message}` in any argument is replaced with the text.
    Command { program: String, args: Vec<String> },
    /// Print to standard output. Fails when stdout is not a terminal.
    Console,
}

impl Notifier {
    /// The platform's command-line notification tool, if it has a known one.
    pub fn platform_command() -> Option<Self> {
        if cfg!(target_os = "macos") {
            Some(Self::Command {
                program: "osascript".to_string(),
                args: vec![
                    "-e".to_string(),
                    format!("display notification \"{{message}}\" with title \"{SUMMARY}\""),
                ],
            })
        } else if cfg!(unix) {
            Some(Self::Command {
                program: "notify-send".to_string(),
                args: vec![SUMMARY.to_string(), "{message}".to_string()],
            })
        } else {
            None
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Desktop => "desktop",
            Self::Command { program, .. } => program,
            Self::Console => "console",
        }
    }

    pub async fn send(&self, message: &str) -> Result<()> {
        match self {
            Self::Desktop => {
                let message = message.to_string();
                tokio::task::spawn_blocking(move || {
                    Notification::new()
                        .appname(APP_NAME)
                        .summary(SUMMARY)
                        .body(&message)
                        .show()
                        .map(|_| ())
                        .map_err(|e| PomodoroError::NotifierUnavailable(e.to_string()))
                })
                .await
                .map_err(|e| PomodoroError::NotifierUnavailable(e.to_string()))?
            }
            Self::Command { program, args } => {
                let options = ProcessOptions::new(program.as_str())
                    .args(args.iter().map(|a| a.replace("{message}", message)))
                    .timeout(COMMAND_TIMEOUT);
                let result = spawn_process(options)
                    .await
                    .map_err(|e| PomodoroError::NotifierUnavailable(format!("{e:#}")))?;
                if result.success() {
                    Ok(())
                } else if result.timed_out {
                    Err(PomodoroError::NotifierUnavailable(format!(
                        "{program} timed out"
                    )))
                } else {
                    Err(PomodoroError::NotifierUnavailable(format!(
                        "{program} exited with {:?}: {}",
                        result.code(),
                        result.stderr
                    )))
                }
            }
            Self::Console => write_console(std::io::stdout().lock(), message),
        }
    }
}

/// Write the pomtext line to `out`. Anything but a terminal counts as a failure.
fn write_console<W: Write + IsTerminal>(mut out: W, message: &str) -> Result<()> {
    if !out.is_terminal() {
        return Err(PomodoroError::NotifierUnavailable(
            "stdout is not a terminal".to_string(),
        ));
    }
    writeln!(out, "{}", pomtext(message))
        .and_then(|()| out.flush())
        .map_err(|e| PomodoroError::NotifierUnavailable(e.to_string()))
}

/// Ordered fallback list of notifiers.
#[derive(Debug, Clone)]
pub struct NotifierChain {
    notifiers: Vec<Notifier>,
}

impl NotifierChain {
    pub fn new(notifiers: Vec<Notifier>) -> Self {
        Self { notifiers }
    }

    /// Desktop, then the platform tool, then the console.
    pub fn platform_default() -> Self {
        let mut notifiers = vec![Notifier::Desktop];
        notifiers.extend(Notifier::platform_command());
        notifiers.push(Notifier::Console);
        Self::new(notifiers)
    }

    #[cfg(test)]
    pub fn notifiers(&self) -> &[Notifier] {
        &self.notifiers
    }

    /// Deliver `message` with the first notifier that works.
    ///
    /// Returns the name of the notifier that delivered it.
    pub async fn notify(&self, message: &str) -> Result<&str> {
        let mut failures = Vec::new();
        for notifier in &self.notifiers {
            match notifier.send(message).await {
                Ok(()) => {
                    if failures.is_empty() {
                        tracing::debug!(notifier = notifier.name(), "Notification delivered");
                    } else {
                        tracing::warn!(
                            notifier = notifier.name(),
                            failed = %failures.join("; "),
                            "Preferred notifiers failed, fell back"
                        );
                    }
                    return Ok(notifier.name());
                }
                Err(e) => {
                    tracing::debug!(notifier = notifier.name(), error = %e, "Notifier failed");
                    failures.push(format!("{}: {e}", notifier.name()));
                }
            }
        }
        Err(PomodoroError::NotifierUnavailable(if failures.is_empty() {
            "no notifiers configured".to_string()
        } else {
            failures.join("; ")
        }))
    }
}
