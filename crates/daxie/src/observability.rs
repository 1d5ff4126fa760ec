//! Logging setup for the CLI.
//!
//! Human-readable events go to stderr. When a log location is configured, a
//! second layer writes JSON lines to a file through a non-blocking writer.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const ENV_LOG_PATH: &str = "DAXIE_LOG_PATH";
const ENV_LOG_DIR: &str = "DAXIE_LOG_DIR";
const LOG_FILE_NAME: &str = "daxie.jsonl";

/// Where log output goes.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// JSONL log file. File logging is off when `None`.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from `DAXIE_LOG_PATH`, then `DAXIE_LOG_DIR`, then
    /// the configured directory.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        let log_file = env_path(ENV_LOG_PATH)
            .or_else(|| env_path(ENV_LOG_DIR).map(|dir| dir.join(LOG_FILE_NAME)))
            .or_else(|| log_dir.map(|dir| dir.join(LOG_FILE_NAME)));
        Self { log_file }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Level for the stderr layer: `warn`, `error` when quiet, `debug`/`trace` with `-v`/`-vv`.
pub const fn stderr_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Filter for the file layer: `RUST_LOG` if set, else verbosity flags, else `default_level`.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    if quiet || verbose > 0 {
        return EnvFilter::new(stderr_level(quiet, verbose));
    }
    EnvFilter::new(default_level)
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive until exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    stderr_filter: EnvFilter,
    file_filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(stderr_filter);

    let (file_layer, guard) = match config.log_file.as_deref() {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(file_filter);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn file_writer(
    path: &Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_level_follows_flags() {
        assert_eq!(stderr_level(false, 0), "warn");
        assert_eq!(stderr_level(true, 0), "error");
        assert_eq!(stderr_level(true, 2), "error");
        assert_eq!(stderr_level(false, 1), "debug");
        assert_eq!(stderr_level(false, 3), "trace");
    }

    #[test]
    fn config_log_dir_names_the_file() {
        if std::env::var_os(ENV_LOG_PATH).is_some() || std::env::var_os(ENV_LOG_DIR).is_some() {
            return;
        }
        let config = ObservabilityConfig::from_env_with_overrides(Some(PathBuf::from("/tmp/logs")));
        assert_eq!(
            config.log_file.as_deref(),
            Some(Path::new("/tmp/logs/daxie.jsonl"))
        );
        assert!(
            ObservabilityConfig::from_env_with_overrides(None)
                .log_file
                .is_none()
        );
    }
}
