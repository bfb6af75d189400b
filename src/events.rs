//! Event System
//!
//! Dashboard activity events shown in the activity log panel

use crate::logging::LogLevel;
use chrono::Local;
use std::fmt::Display;

/// Part of the dashboard an event originates from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// The periodic metrics refresh.
    Refresh,
    /// The campaign table (search, sort).
    Table,
    /// CSV export.
    Export,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn refresh(msg: impl Into<String>) -> Self {
        Self::new(Source::Refresh, msg.into(), EventType::Refresh, LogLevel::Info)
    }

    pub fn table(msg: impl Into<String>) -> Self {
        Self::new(Source::Table, msg.into(), EventType::Info, LogLevel::Debug)
    }

    pub fn export_success(msg: impl Into<String>) -> Self {
        Self::new(Source::Export, msg.into(), EventType::Success, LogLevel::Info)
    }

    pub fn export_error(msg: impl Into<String>) -> Self {
        Self::new(Source::Export, msg.into(), EventType::Error, LogLevel::Error)
    }

    /// Successes and anything at `info` or above always show; quieter
    /// events only when `threshold` lets them through.
    pub fn should_display(&self, threshold: LogLevel) -> bool {
        self.event_type == EventType::Success
            || self.log_level.passes(LogLevel::Info)
            || self.log_level.passes(threshold)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
