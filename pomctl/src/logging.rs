//! Logging setup.
//!
//! Diagnostics go to `<home>/logs/pomctl.log` so stdout stays reserved for
//! status lines. The detached timer has no terminal at all, which makes the
//! file its only sink.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Environment variable holding the log filter (e.g. `debug`, `pomctl=trace`).
pub const LOG_ENV: &str = "POMCTL_LOG";

const LOG_FILE: &str = "pomctl.log";

/// Install the global subscriber. The returned guard must be held until exit
/// so buffered lines are flushed.
pub fn init(config: &Config) -> Option<WorkerGuard> {
    let log_dir = config.log_dir();
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("pomctl: logging disabled, cannot create {}: {e}", log_dir.display());
        return None;
    }

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
