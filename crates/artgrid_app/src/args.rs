use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use grid_logging::LogDestination;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "artgrid")]
#[command(about = "Page through the artwork catalog and build a cross-page row selection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// RON config file; defaults to ./artgrid.ron when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Collection endpoint, overriding the config file.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Rows per page requested from the server, overriding the config file.
    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long, value_enum, default_value = "file")]
    pub log: LogTarget,

    #[arg(long, default_value = grid_logging::DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::File => LogDestination::File(self.log_file.clone()),
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both(self.log_file.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
