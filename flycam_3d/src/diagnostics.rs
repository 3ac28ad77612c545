/// Flycam3D diagnostics - global logger registry
///
/// Holds the active [`Logger`] and the minimum severity that reaches it.
/// Both live in thread-safe static storage so the logging macros can be
/// used from anywhere without threading a handle through the camera API.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Entries below this severity are dropped before reaching the logger
static MIN_SEVERITY: OnceLock<RwLock<LogSeverity>> = OnceLock::new();

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

fn min_severity_lock() -> &'static RwLock<LogSeverity> {
    MIN_SEVERITY.get_or_init(|| RwLock::new(LogSeverity::Info))
}

// ===== PUBLIC API =====

/// Logger registry used by the `flycam_*!` macros
///
/// # Example
///
/// ```no_run
/// use flycam_3d::flycam::{Diagnostics, log::{Logger, LogEntry, LogSeverity}};
///
/// struct HudLogger;
/// impl Logger for HudLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Show in the HUD...
///     }
/// }
///
/// Diagnostics::set_logger(HudLogger);
/// Diagnostics::set_min_severity(LogSeverity::Trace);
/// ```
pub struct Diagnostics;

impl Diagnostics {
    /// Replace the active logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Restore the default console logger
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Set the minimum severity forwarded to the logger (default: Info)
    pub fn set_min_severity(severity: LogSeverity) {
        if let Ok(mut lock) = min_severity_lock().write() {
            *lock = severity;
        }
    }

    /// Current minimum severity
    pub fn min_severity() -> LogSeverity {
        min_severity_lock()
            .read()
            .map(|lock| *lock)
            .unwrap_or(LogSeverity::Info)
    }

    /// Whether an entry of this severity would reach the logger
    pub fn enabled(severity: LogSeverity) -> bool {
        severity >= Self::min_severity()
    }

    /// Log without file:line information
    ///
    /// Used by `flycam_trace!` through `flycam_warn!`.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }

    /// Log with file:line information
    ///
    /// Used by `flycam_error!` (and through it `flycam_err!`/`flycam_bail!`).
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }

    fn dispatch(entry: LogEntry) {
        if !Self::enabled(entry.severity) {
            return;
        }
        if let Ok(lock) = logger_lock().read() {
            lock.log(&entry);
        }
    }
}
