//! Log line formatting
//!
//! Timestamped, severity-tagged lines for the resolution log.

use chrono::Local;
use std::fmt;

/// Log severity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Parse a configured level name; unknown names fall back to `Info`
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        f.write_str(tag)
    }
}

/// Format a log line with a local timestamp and severity tag
pub fn format_line(level: Level, message: &str) -> String {
    format!(
        "[{}] [{level}] {message}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}
