//! Command execution.
//!
//! Every invocation resolves the home directory, installs file logging and
//! builds a [`Pomodoro`] over the session file, the history database and
//! the detached timer before dispatching the subcommand.

use anyhow::{Context, Result};

use crate::clock::{self, SystemClock};
use crate::config::Config;
use crate::db::HistoryDb;
use crate::logging;
use crate::notify::NotifierChain;
use crate::process::{timer, DetachedTimer};
use crate::session::{pomtext, Pomodoro, SessionStore, TOMATO};

use super::args::{Cli, Commands};

fn build_pomodoro(config: &Config) -> Result<Pomodoro> {
    let store = SessionStore::new(config.session_file());
    let history = HistoryDb::open_at(&config.history_db())?;
    let timer = DetachedTimer::new(config.home()).context("Failed to locate pomctl executable")?;

    Ok(Pomodoro::new(
        store,
        Box::new(history),
        Box::new(timer),
        Box::new(SystemClock),
    ))
}

pub async fn execute(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.home)?;

    let created = config
        .ensure_home()
        .with_context(|| format!("Failed to create {}", config.home().display()))?;
    let _guard = logging::init(&config);
    if created {
        tracing::info!(home = %config.home().display(), "Created pomctl home");
        if !matches!(cli.command, Commands::Timer { .. }) {
            println!(
                "{}",
                pomtext(&format!("pomctl home created: {}", config.home().display()))
            );
        }
    }

    let pomodoro = build_pomodoro(&config)?;
    tracing::debug!(command = ?cli.command, session = %pomodoro.store().path().display(), "Dispatching");

    let output = match cli.command {
        Commands::Status => pomodoro.status(),
        Commands::Start { duration } => pomodoro.start(clock::parse_duration(&duration))?,
        Commands::Stop => pomodoro.stop()?,
        Commands::Resume => pomodoro.resume()?,
        Commands::Cancel => pomodoro.cancel()?,
        Commands::Reset => pomodoro.reset()?,
        Commands::Repeat => pomodoro.repeat()?,
        Commands::History { limit } => pomodoro.history_report(limit)?,
        Commands::Timer { runtime } => {
            timer::run(&pomodoro, &NotifierChain::platform_default(), runtime).await?;
            return Ok(());
        }
        Commands::Tomato => TOMATO.to_string(),
    };

    println!("{output}");
    Ok(())
}
