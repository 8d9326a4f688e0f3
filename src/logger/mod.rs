//! Logger module
//!
//! Advisory logging for the resolution pipeline: per-asset resolution
//! traces, warnings and errors, to stdout/stderr or files. Falls back to
//! plain console output when uninitialized so library users and tests need
//! no setup. Never consulted for control flow.

pub mod format;
pub mod writer;

pub use format::Level;

use crate::config::Config;

/// Initialize the logger with configuration
///
/// Should be called once at startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
        Level::parse(&config.logging.level),
    )
}

fn write(level: Level, message: &str) {
    if writer::is_initialized() {
        writer::get().write(level, message);
    } else if level >= Level::Warn {
        eprintln!("{}", format::format_line(level, message));
    } else if level >= Level::Info {
        // Without an explicit threshold, debug lines are dropped
        println!("{}", format::format_line(level, message));
    }
}

/// Log one successful resolution (debug level, high volume)
pub fn log_resolution(path: &str, mime_type: &str, pattern: &str) {
    write(
        Level::Debug,
        &format!("Matched {path} to {mime_type} using pattern {pattern}"),
    );
}

pub fn log_info(message: &str) {
    write(Level::Info, message);
}

pub fn log_warning(message: &str) {
    write(Level::Warn, message);
}
