use std::path::PathBuf;

use flexi_logger::LoggerHandle;

use crate::cli::commands::Cli;
use crate::io::config_io::{self, default_log_dir};
use crate::io::logging::{self, default_log_level};
use crate::model::{Config, LogConfig, UiConfig};
use crate::tui::{self, app::App};

/// Load config, start logging, and run the TUI
pub fn launch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(cli.config.as_deref())?;
    let ui = apply_overrides(config.ui.clone(), &cli);

    // Held until the TUI exits; dropping it flushes the log
    let _logger = start_logging(&config, &cli);
    log::info!(
        "event=config_load explicit={} dark={} filter={}",
        cli.config.is_some(),
        ui.dark_mode,
        ui.default_filter
    );

    tui::run(App::from_config(&ui))
}

/// Command-line flags win over `[ui]` settings
pub fn apply_overrides(mut ui: UiConfig, cli: &Cli) -> UiConfig {
    if cli.dark {
        ui.dark_mode = true;
    }
    if let Some(filter) = cli.filter {
        ui.default_filter = filter;
    }
    ui
}

/// Resolve level and directory from flags, then config, then defaults
pub fn resolve_log_settings(log: &LogConfig, cli: &Cli) -> (String, Option<PathBuf>) {
    let level = cli
        .log_level
        .clone()
        .or_else(|| log.level.clone())
        .unwrap_or_else(|| default_log_level().to_string());
    let dir = cli
        .log_dir
        .clone()
        .or_else(|| log.dir.as_ref().map(PathBuf::from))
        .or_else(default_log_dir);
    (level, dir)
}

/// Logging is best-effort: on failure, warn before the TUI takes the
/// terminal and carry on without a log.
fn start_logging(config: &Config, cli: &Cli) -> Option<LoggerHandle> {
    let (level, dir) = resolve_log_settings(&config.log, cli);
    let dir = dir?;
    match logging::init_logging(&level, &dir) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    }
}
