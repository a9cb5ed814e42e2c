//! File-backed `tracing` setup. The terminal UI owns stdout, so events go to
//! `<directory>/<file_name>` instead.

use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` when set, the configured level otherwise.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered events are flushed.
pub fn init(config: &LoggingConfig) -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(&config.directory)?;
    let file_appender = tracing_appender::rolling::never(&config.directory, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(guard)
}
