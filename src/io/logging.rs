//! File-based logging.
//!
//! The TUI owns the terminal, so log records go to rotating files under the
//! log directory and never to stdout/stderr. Records are metadata-only
//! `key=value` events; task text is never logged.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

const LOG_FILE_BASENAME: &str = "tasklist";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Error type for logging setup
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("unsupported log level '{0}' (expected trace|debug|info|warn|error)")]
    InvalidLevel(String),
    #[error("log dir must be an absolute path, got '{0}'")]
    RelativeDir(String),
    #[error("could not create log dir {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not start logger: {0}")]
    Backend(#[from] flexi_logger::FlexiLoggerError),
}

/// Default level: `debug` for debug builds, `info` for release
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Normalize a user-supplied level name
pub fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::InvalidLevel(other.to_string())),
    }
}

fn normalize_log_dir(dir: &Path) -> Result<PathBuf, LoggingError> {
    if !dir.is_absolute() {
        return Err(LoggingError::RelativeDir(dir.display().to_string()));
    }
    Ok(dir.to_path_buf())
}

/// Start logging to `log_dir`. Keep the returned handle alive for the life of
/// the process; dropping it flushes and stops the logger.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle, LoggingError> {
    let level = normalize_level(level)?;
    let dir = normalize_log_dir(log_dir)?;

    std::fs::create_dir_all(&dir).map_err(|e| LoggingError::CreateDir {
        path: dir.clone(),
        source: e,
    })?;

    let handle = Logger::try_with_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    info!(
        "event=app_start version={} level={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        level,
        dir.display()
    );
    Ok(handle)
}
