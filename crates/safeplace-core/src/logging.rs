//! Logging bootstrap
//!
//! The TUI owns the terminal, so tracing output goes to a daily-rotated file
//! under the platform data dir, never to stdout. The `SAFEPLACE_LOG`
//! environment variable overrides the default filter, e.g.
//! `SAFEPLACE_LOG=debug safeplace`.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_ENV: &str = "SAFEPLACE_LOG";
const DEFAULT_FILTER: &str = "safeplace=info,warn";
const LOG_FILE_PREFIX: &str = "safeplace.log";

/// Install the file-backed tracing subscriber. Returns the log directory so
/// startup can report where to look.
pub fn init() -> Result<PathBuf> {
    let dir = log_directory();
    std::fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(dir = %dir.display(), "logging started");
    Ok(dir)
}

/// `<data dir>/safeplace/logs`, falling back to the working directory when
/// the platform reports no data dir.
fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("safeplace")
        .join("logs")
}
