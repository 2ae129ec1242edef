//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::clock::DEFAULT_DURATION;
use crate::config::HOME_ENV;

/// pomctl - Manage Pomodoro sessions from the command line
#[derive(Parser, Debug)]
#[command(name = "pomctl")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "DURATION examples:\n  \
    90      = 90 seconds\n  \
    5m      = 5 minutes\n  \
    1h30m   = 1 hour 30 minutes\n  \
    25m     = 25 minutes (the default)")]
pub struct Cli {
    /// Directory holding the session file, history and logs (default: ~/.pomctl)
    #[arg(long, global = true, env = HOME_ENV)]
    pub home: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show status of the current (or last) session
    Status,

    /// Start a new session
    Start {
        /// Session length, e.g. 25m, 1h30m, 90s or a plain number of seconds
        #[arg(default_value = DEFAULT_DURATION)]
        duration: String,
    },

    /// Stop (pause) the current session
    #[command(alias = "pause")]
    Stop,

    /// Resume a stopped session
    Resume,

    /// Cancel the current session
    Cancel,

    /// Cancel the current session and start it over with the same length
    #[command(alias = "restart")]
    Reset,

    /// Start a new session as long as the last one
    Repeat,

    /// Show recently finished sessions
    History {
        /// Maximum number of sessions to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Print a tomato
    #[command(alias = "pomodoro")]
    Tomato,

    /// Background timer body (launched by start, resume and reset)
    #[command(hide = true)]
    Timer {
        /// Seconds to wait before finishing the session
        runtime: u64,
    },
}
