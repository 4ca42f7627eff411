use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};

use crate::model::config::Config;
use crate::ops::task_ops::today;

const APP_DIR: &str = "tasklist";
const CONFIG_FILE: &str = "config.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid date_format '{0}'")]
    InvalidDateFormat(String),
}

/// Default config location: `<config_dir>/tasklist/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
}

/// Default log directory: `<data_local_dir>/tasklist/logs`
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join(APP_DIR).join("logs"))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the default location is used
/// if a file is there, otherwise built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.is_file() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

/// Read and validate a config file
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = parse_config(&text).map_err(|e| match e {
        ConfigError::ParseError { source, .. } => ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    Ok(config)
}

/// Parse and validate config text
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: PathBuf::new(),
        source: e,
    })?;
    validate_date_format(&config.ui.date_format)?;
    Ok(config)
}

/// Reject strftime strings that cannot render a plain date. Time and
/// timezone items (`%H`, `%s`, `%Z`) parse fine but fail on a `NaiveDate`.
pub fn validate_date_format(format: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidDateFormat(format.to_string());
    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }
    let mut sample = String::new();
    write!(sample, "{}", today().format(format)).map_err(|_| invalid())?;
    Ok(())
}
