use serde::Deserialize;
use std::collections::HashMap;

use super::filter::Filter;
use crate::ops::task_ops::DEFAULT_DATE_FORMAT;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Start in dark mode
    #[serde(default)]
    pub dark_mode: bool,
    /// Filter selected at startup
    #[serde(default)]
    pub default_filter: Filter,
    /// strftime format for task creation dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Per-palette hex color overrides
    #[serde(default)]
    pub colors: PaletteOverrides,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            dark_mode: false,
            default_filter: Filter::All,
            date_format: default_date_format(),
            show_key_hints: true,
            colors: PaletteOverrides::default(),
        }
    }
}

/// `[ui.colors.light]` and `[ui.colors.dark]`: palette key → `#RRGGBB`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PaletteOverrides {
    #[serde(default)]
    pub light: HashMap<String, String>,
    #[serde(default)]
    pub dark: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LogConfig {
    /// trace|debug|info|warn|error (default depends on build mode)
    #[serde(default)]
    pub level: Option<String>,
    /// Absolute directory for log files
    #[serde(default)]
    pub dir: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
