//! Logging for the Flycam3D camera
//!
//! - Pluggable sink via the [`Logger`] trait (see `Diagnostics::set_logger`)
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for detailed ERROR logs

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom log sinks
///
/// # Example
///
/// ```no_run
/// use flycam_3d::flycam::log::{Logger, LogEntry};
///
/// struct FrameOverlayLogger;
///
/// impl Logger for FrameOverlayLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Push into the in-game console...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Consume one log entry
    fn log(&self, entry: &LogEntry);
}

/// Everything known about one log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// When the entry was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "flycam::Camera", "flycam::Frustum")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame detail such as cache recomputation
    Trace,

    /// Pose changes and other development information
    Debug,

    /// Notable events
    Info,

    /// Suspicious but recoverable state (non-finite frustum planes, ...)
    Warn,

    /// Rejected input and backend failures (with file:line details)
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by the console logger
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Console logger with colored severities
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
///
/// Warn and Error go to stderr, everything else to stdout.
pub struct DefaultLogger;

impl DefaultLogger {
    /// Render an entry without color codes.
    pub fn format_entry(entry: &LogEntry) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");

        match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, entry.severity.label(), entry.source, entry.message, file, line
            ),
            _ => format!(
                "[{}] [{}] [{}] {}",
                timestamp, entry.severity.label(), entry.source, entry.message
            ),
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let label = entry.severity.label();
        let severity_str = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };
        let source = entry.source.bright_blue();

        let location = match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(" ({}:{})", file, line),
            _ => String::new(),
        };

        if entry.severity >= LogSeverity::Warn {
            eprintln!("[{}] [{}] [{}] {}{}", timestamp, severity_str, source, entry.message, location);
        } else {
            println!("[{}] [{}] [{}] {}{}", timestamp, severity_str, source, entry.message, location);
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
///
/// ```no_run
/// flycam_3d::flycam_trace!("flycam::Camera", "Recomputing world matrix");
/// ```
#[macro_export]
macro_rules! flycam_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::flycam::Diagnostics::log(
            $crate::flycam::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
///
/// ```no_run
/// let eye = flycam_3d::glam::Vec3::ZERO;
/// flycam_3d::flycam_debug!("flycam::Camera", "look_at eye={:?}", eye);
/// ```
#[macro_export]
macro_rules! flycam_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::flycam::Diagnostics::log(
            $crate::flycam::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! flycam_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::flycam::Diagnostics::log(
            $crate::flycam::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
///
/// ```no_run
/// let index = 4;
/// flycam_3d::flycam_warn!("flycam::Frustum", "Plane {} has a non-finite normal", index);
/// ```
#[macro_export]
macro_rules! flycam_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::flycam::Diagnostics::log(
            $crate::flycam::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! flycam_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::flycam::Diagnostics::log_detailed(
            $crate::flycam::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
