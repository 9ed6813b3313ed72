#![deny(missing_docs)]
//! Shared logging utilities for the shortener workspace.
//!
//! This crate provides the `shortener_*` logging macros used across the
//! codebase, a test initializer for the global logger, and an in-memory
//! capture of every record logged while that test logger is installed.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use simplelog::{ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode};

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! shortener_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! shortener_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! shortener_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! shortener_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! shortener_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// A log record kept in memory by the test logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    /// Severity of the record.
    pub level: Level,
    /// Module path (or explicit target) the record was emitted from.
    pub target: String,
    /// Formatted message text.
    pub message: String,
}

static CAPTURED: Mutex<Vec<CapturedRecord>> = Mutex::new(Vec::new());

/// Returns a snapshot of every record captured so far.
///
/// Tests run in parallel inside one process and share this buffer, so callers
/// should filter on something unique to their own test (a URL, an id).
pub fn captured_records() -> Vec<CapturedRecord> {
    match CAPTURED.lock() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

struct CaptureLogger {
    level: LevelFilter,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let captured = CapturedRecord {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        if let Ok(mut guard) = CAPTURED.lock() {
            guard.push(captured);
        }
    }

    fn flush(&self) {}
}

impl SharedLogger for CaptureLogger {
    fn level(&self) -> LevelFilter {
        self.level
    }

    fn config(&self) -> Option<&Config> {
        None
    }

    fn as_log(self: Box<Self>) -> Box<dyn Log> {
        Box::new(*self)
    }
}

/// Initializes a terminal logger plus the in-memory capture for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::with_capacity(2);
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));
    loggers.push(Box::new(CaptureLogger { level }));
    let _ = CombinedLogger::init(loggers);
}
