//! Log levels and `RUST_LOG` handling.
//!
//! One threshold drives both the console logger of the line-oriented
//! commands and the filter on the dashboard's activity log.

use log::LevelFilter;
use std::env;
use std::str::FromStr;

/// Target name this crate's log records are emitted under.
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level {:?}", other)),
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl LogLevel {
    /// Threshold from a `RUST_LOG`-style directive list such as
    /// `warn,insights_dashboard=debug`.
    ///
    /// A directive naming this crate wins over a bare default level. Other
    /// targets are ignored, and anything unparsable leaves `info`.
    pub fn from_directives(directives: &str) -> Self {
        let mut default = None;
        for directive in directives.split(',').map(str::trim) {
            match directive.split_once('=') {
                Some((target, level)) if target == CRATE_TARGET => {
                    if let Ok(level) = level.parse() {
                        return level;
                    }
                }
                Some(_) => {}
                None => {
                    if default.is_none() {
                        default = directive.parse().ok();
                    }
                }
            }
        }
        default.unwrap_or(LogLevel::Info)
    }

    /// Threshold from the `RUST_LOG` environment variable, `info` when unset.
    pub fn from_env() -> Self {
        env::var("RUST_LOG")
            .map(|directives| Self::from_directives(&directives))
            .unwrap_or(LogLevel::Info)
    }

    pub fn passes(self, threshold: LogLevel) -> bool {
        self >= threshold
    }
}

/// Initialise `env_logger` for the line-oriented commands.
///
/// Not used in TUI mode, where stderr output would tear the screen.
/// Dependencies only log warnings and above.
pub fn init_console_logger() {
    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(CRATE_TARGET, LogLevel::from_env().into())
        .format_timestamp_secs()
        .try_init();
}
