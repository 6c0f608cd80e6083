use std::sync::{Mutex, OnceLock};

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::PROGRAM_LOG_LEVEL;

enum LogTarget {
    Stderr,
    /// Keeps formatted lines in memory. Used when a logger is injected into
    /// a component under test.
    Memory(Mutex<Vec<String>>),
}

pub struct Logger {
    level: Level,
    target: LogTarget,
}

impl Logger {
    pub fn stderr(level: Level) -> Self {
        Self {
            level,
            target: LogTarget::Stderr,
        }
    }

    pub fn memory(level: Level) -> Self {
        Self {
            level,
            target: LogTarget::Memory(Mutex::new(Vec::new())),
        }
    }

    /// Lines captured so far. Always empty for the stderr target.
    pub fn lines(&self) -> Vec<String> {
        match &self.target {
            LogTarget::Stderr => Vec::new(),
            LogTarget::Memory(buf) => buf.lock().map(|b| b.clone()).unwrap_or_default(),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let msg = format!(
                "{} {} [{}] {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            );

            match &self.target {
                LogTarget::Stderr => {
                    eprintln!("{msg}")
                }
                LogTarget::Memory(buf) => {
                    if let Ok(mut lines) = buf.lock() {
                        lines.push(msg);
                    }
                }
            }
        }
    }

    fn flush(&self) {}
}

fn get_level_from_env() -> Level {
    std::env::var(PROGRAM_LOG_LEVEL)
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(Level::Warn)
}

pub fn init() -> Result<(), SetLoggerError> {
    _init(get_level_from_env())
}

pub fn _init(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // Only the first call installs the logger. Later calls must not move
    // max_level away from the level the installed logger was built with.
    let init_call = LOGGER.get().is_none();

    let logger = LOGGER.get_or_init(|| Logger::stderr(level));

    if init_call {
        log::set_logger(logger)?;
        log::set_max_level(level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
