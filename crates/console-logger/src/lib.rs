//! Console Logger
//!
//! `log` backend for the browser. Every record is formatted with a
//! timestamp, kept in a fixed-size ring buffer and, on wasm32, written
//! to the matching `console` method.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// One captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {} {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Buffer contents as text, one record per line
    pub fn dump(&self) -> String {
        self.recent()
            .iter()
            .map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push(&self, entry: LogEntry) {
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() == self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(entry);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(entry: &LogEntry) {
    let line = entry.to_string();
    match entry.level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_entry: &LogEntry) {}

/// Install a global logger; returns it so the buffer can be read later
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(logger: &ConsoleLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("grocery")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_filters_below_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 10);
        record(&logger, Level::Debug, "hidden");
        record(&logger, Level::Warn, "shown");
        let entries = logger.recent();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "shown");
        assert_eq!(entries[0].level, Level::Warn);
    }

    #[test]
    fn test_buffer_rolls_over() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            record(&logger, Level::Info, &format!("line {}", i));
        }
        let messages: Vec<_> = logger.recent().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_dump_format() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 4);
        record(&logger, Level::Error, "[APP] boom");
        let dump = logger.dump();
        assert!(dump.contains("ERROR grocery [APP] boom"));
        assert_eq!(dump.lines().count(), 1);
    }

    #[test]
    fn test_dump_lists_oldest_first() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 2);
        record(&logger, Level::Info, "[APP] first");
        record(&logger, Level::Warn, "[SHARE] second");
        record(&logger, Level::Info, "[STORAGE] third");
        let lines: Vec<_> = logger.dump().lines().map(str::to_string).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("WARN  grocery [SHARE] second"));
        assert!(lines[1].ends_with("INFO  grocery [STORAGE] third"));
    }
}
