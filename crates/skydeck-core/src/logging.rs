//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that controls the log filter
pub const LOG_ENV_VAR: &str = "SKYDECK_LOG";

const LOG_FILE_NAME: &str = "skydeck.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/skydeck/logs/` because the terminal
/// belongs to the dashboard. Log level is controlled by `SKYDECK_LOG`.
///
/// # Examples
/// ```bash
/// SKYDECK_LOG=debug skydeck
/// SKYDECK_LOG=skydeck_app=trace skydeck
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Skydeck starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Filter used when `SKYDECK_LOG` is unset or invalid
pub fn default_filter() -> &'static str {
    "skydeck=info,skydeck_core=info,skydeck_app=info,skydeck_tui=info,warn"
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("skydeck").join("logs")
}

/// Get the log file path prefix used by the daily appender
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        let dir = get_log_directory();
        assert!(dir.ends_with("skydeck/logs"));
        assert_eq!(get_current_log_file().parent(), Some(dir.as_path()));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(default_filter()).is_ok());
    }
}
