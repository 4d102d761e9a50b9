// src/logger.rs
//! stderr へ `[level] message` 形式で出力する最小のロガー

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", format_record(record.level(), record.target(), &record.args().to_string()));
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    let label = level.as_str().to_ascii_lowercase();
    if level <= Level::Info {
        format!("[{label}] {message}")
    } else {
        format!("[{label}] {target}: {message}")
    }
}

/// Install the stderr logger and set the level.
///
/// # Errors
///
/// Returns [`SetLoggerError`] when another logger is already installed. The
/// level is applied either way.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_max_level(level);
    log::set_logger(&LOGGER)
}
