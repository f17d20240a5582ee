use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Send all tracing output to the append-only log file. The terminal is
/// reserved for the conversation, so nothing is written to stdout/stderr.
///
/// The returned guard flushes the writer on drop; hold it until exit.
pub fn init(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_name = config
        .file
        .file_name()
        .with_context(|| format!("Log file path has no file name: {:?}", config.file))?;
    let dir = config
        .file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(dir)
        .with_context(|| format!("Failed to open log file: {:?}", config.file))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = build_env_filter(&config.level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(guard)
}

/// `RUST_LOG` wins over the configured level.
fn build_env_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level in config: {:?}", level)),
    }
}
