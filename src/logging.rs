//! File logging via tracing. The terminal belongs to the UI, so nothing is written to stdout/stderr.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable controlling the log filter
pub const LOG_ENV: &str = "TODO_LOG";

const LOG_FILE_PREFIX: &str = "todo.log";

/// Initialize logging into `<data_dir>/logs/`
///
/// ```bash
/// TODO_LOG=debug todo
/// ```
pub fn init(data_dir: &Path) -> Result<()> {
    let log_dir = log_directory(data_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("todo=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!("todo starting, logs in {}", log_dir.display());
    Ok(())
}

fn log_directory(data_dir: &Path) -> PathBuf {
    data_dir.join("logs")
}
