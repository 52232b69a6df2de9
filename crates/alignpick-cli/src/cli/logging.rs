//! Logging setup.
//!
//! Filtered by the ALIGNPICK_LOG env var (default "warn"). Non-interactive
//! commands log to stderr; the interactive picker owns the terminal, so it
//! logs to a daily file under ${ALIGNPICK_HOME}/logs instead.

use alignpick_core::config;
use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Returns a guard that must stay alive for the process lifetime when file
/// logging is active, so buffered lines are flushed on exit.
pub fn init(interactive: bool) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_env("ALIGNPICK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    if interactive {
        let logs_dir = config::paths::logs_dir();
        std::fs::create_dir_all(&logs_dir)
            .with_context(|| format!("create log directory {}", logs_dir.display()))?;
        let appender = tracing_appender::rolling::daily(logs_dir, "alignpick.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        Ok(None)
    }
}
