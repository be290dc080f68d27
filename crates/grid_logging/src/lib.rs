#![deny(missing_docs)]
//! Shared logging utilities for the artgrid workspace.
//!
//! This crate provides the `grid_*` logging macros used across the codebase,
//! the logger setup used by the terminal front end, and a minimal test
//! initializer for the global logger.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Default log file, relative to the current working directory.
pub const DEFAULT_LOG_FILE: &str = "artgrid.log";

#[doc(hidden)]
pub use log as __log;

/// Logs at an explicit [`log::Level`]; the `grid_*` shorthands expand to this.
///
/// Expands through this crate's re-export of `log`, so callers only need a
/// dependency on `grid_logging`.
#[macro_export]
macro_rules! grid_log {
    ($level:ident, $($arg:tt)+) => {
        $crate::__log::log!($crate::__log::Level::$level, $($arg)+)
    };
}

/// Trace-level [`grid_log!`].
#[macro_export]
macro_rules! grid_trace {
    ($($arg:tt)+) => { $crate::grid_log!(Trace, $($arg)+) };
}

/// Debug-level [`grid_log!`].
#[macro_export]
macro_rules! grid_debug {
    ($($arg:tt)+) => { $crate::grid_log!(Debug, $($arg)+) };
}

/// Info-level [`grid_log!`].
#[macro_export]
macro_rules! grid_info {
    ($($arg:tt)+) => { $crate::grid_log!(Info, $($arg)+) };
}

/// Warn-level [`grid_log!`].
#[macro_export]
macro_rules! grid_warn {
    ($($arg:tt)+) => { $crate::grid_log!(Warn, $($arg)+) };
}

/// Error-level [`grid_log!`].
#[macro_export]
macro_rules! grid_error {
    ($($arg:tt)+) => { $crate::grid_log!(Error, $($arg)+) };
}

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to a log file only.
    File(PathBuf),
    /// Write to the terminal (stderr/stdout mixed).
    Terminal,
    /// Write to both a log file and the terminal.
    Both(PathBuf),
}

impl Default for LogDestination {
    fn default() -> Self {
        LogDestination::File(PathBuf::from(DEFAULT_LOG_FILE))
    }
}

/// Initialize the global logger with the specified destination and level.
///
/// File destinations that cannot be created are reported on stderr and
/// skipped; a second initialization is silently ignored.
pub fn initialize(destination: &LogDestination, level: LevelFilter) {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File(path) => match create_file_logger(path, level, config) {
            Some(file_logger) => vec![file_logger],
            None => return,
        },
        LogDestination::Terminal => vec![terminal_logger(level, config)],
        LogDestination::Both(path) => {
            let mut loggers: Vec<Box<dyn SharedLogger>> =
                vec![terminal_logger(level, config.clone())];
            if let Some(file_logger) = create_file_logger(path, level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn terminal_logger(level: LevelFilter, config: Config) -> Box<TermLogger> {
    TermLogger::new(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}

/// Environment variable that overrides the level used by [`initialize_for_tests`].
pub const TEST_LOG_ENV: &str = "ARTGRID_TEST_LOG";

/// Routes log output from tests to the terminal.
///
/// The level comes from `ARTGRID_TEST_LOG` (`off`, `error` .. `trace`) and
/// otherwise defaults to debug. Later calls are no-ops.
pub fn initialize_for_tests() {
    let level = test_level(std::env::var(TEST_LOG_ENV).ok().as_deref());
    let _ = CombinedLogger::init(vec![terminal_logger(level, build_config())]);
}

fn test_level(requested: Option<&str>) -> LevelFilter {
    requested
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(LevelFilter::Debug)
}
