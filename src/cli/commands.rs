use std::path::PathBuf;

use clap::Parser;

use crate::model::Filter;

#[derive(Parser, Debug)]
#[command(name = "tl", about = concat!("[x] tasklist v", env!("CARGO_PKG_VERSION"), " - a task list for your terminal"), version)]
pub struct Cli {
    /// Config file (default: <config dir>/tasklist/config.toml)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Initial filter (all, active, completed)
    #[arg(long)]
    pub filter: Option<Filter>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory for log files (absolute path)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}
