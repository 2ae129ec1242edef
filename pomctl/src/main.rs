//! pomctl - Manage Pomodoro sessions from the command line.
//!
//! Each command is a short-lived process that reads and rewrites a single
//! JSON session record. Running sessions are timed by a detached copy of
//! pomctl (`pomctl timer <secs>`) that finalizes the session into the
//! SQLite history and notifies the user when time is up.
//!
//! Architecture:
//! - `session` owns the state machine and the session file
//! - `process` launches and kills timer processes
//! - `db` archives finalized sessions
//! - `notify` tells the user a session finished

mod cli;
mod clock;
mod config;
mod db;
mod error;
mod logging;
mod models;
mod notify;
mod process;
mod session;

use anyhow::Result;
use clap::Parser;

use cli::{execute, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    execute(cli).await
}
