//! Logging setup: stderr always, a log file on request.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogConfig;

const LOG_FILE_NAME: &str = "server.log";

/// Install the global subscriber.
///
/// `RUST_LOG` drives filtering and defaults to `info`. When file logging is
/// enabled the returned guard must live until shutdown, or buffered lines are
/// lost.
pub fn setup_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = if config.to_file {
        let log_dir = config.dir.clone().unwrap_or_else(default_log_directory);
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file)
            .with_ansi(false);

        (Some((layer, log_dir)), Some(guard))
    } else {
        (None, None)
    };

    let log_dir = file_layer.as_ref().map(|(_, dir)| dir.clone());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer.map(|(layer, _)| layer))
        .try_init()?;

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/{}", dir.display(), LOG_FILE_NAME);
    }

    Ok(guard)
}

/// Platform-specific cache directory for log files.
fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "warrior-server")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("warrior-server").join("logs"))
}
