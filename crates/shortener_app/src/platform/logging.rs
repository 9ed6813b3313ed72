//! Platform logging initialization for the shortener app.
//!
//! The terminal belongs to the UI while it runs, so the app logs to a file.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output.
#[allow(dead_code)]
pub enum LogDestination {
    /// Write to the given file.
    File(PathBuf),
    /// Write to terminal (stderr for warnings and errors).
    Terminal,
    /// Write to both file and terminal.
    Both(PathBuf),
}

/// Initialize the logger with the specified destination.
///
/// The log file is truncated on every start.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;

    let config = build_config();

    let (path, terminal) = match destination {
        LogDestination::File(path) => (Some(path), false),
        LogDestination::Terminal => (None, true),
        LogDestination::Both(path) => (Some(path), true),
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if terminal {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if let Some(file_logger) = path.and_then(|path| create_file_logger(&path, level, config)) {
        loggers.push(file_logger);
    }
    if loggers.is_empty() {
        return;
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
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
