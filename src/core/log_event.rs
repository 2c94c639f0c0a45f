//! Logging event structure read by the pipeline

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

/// Get cached thread ID, computing and caching it on first access
fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            *cache = Some(format!("{:?}", std::thread::current().id()));
        }
        cache.as_ref().expect("thread_id cache initialized in previous line").clone()
    })
}

/// Get cached thread name, computing and caching it on first access
fn get_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            *cache = Some(std::thread::current().name().map(String::from));
        }
        cache.as_ref().expect("thread_name cache initialized in previous line").clone()
    })
}

/// A single logging event.
///
/// The pipeline only reads events: filters inspect them, converters render
/// them, and no component mutates one after construction. The logger name is
/// the category that emitted the event; the hierarchy's root logger is
/// represented by the empty name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub logger: String,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub thread_id: String,
    pub thread_name: Option<String>,
    /// Pre-rendered exception/stack text, if the event carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throwable: Option<String>,
}

impl LogEvent {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(logger: impl Into<String>, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger: logger.into(),
            level,
            message: Self::sanitize_message(&message.into()),
            timestamp: Utc::now(),
            file: None,
            line: None,
            thread_id: get_thread_id(),
            thread_name: get_thread_name(),
            throwable: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, file: &str, line: u32) -> Self {
        self.file = Some(file.to_string());
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_throwable(mut self, throwable: impl Into<String>) -> Self {
        self.throwable = Some(throwable.into());
        self
    }

    /// Whether this event was emitted by the hierarchy's root logger.
    ///
    /// The root logger has no category name of its own, so it is carried as
    /// the empty string.
    pub fn is_root_logger(&self) -> bool {
        self.logger.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_sanitization() {
        let event = LogEvent::new("app", LogLevel::Info, "line one\nline two");
        assert_eq!(event.message, "line one\\nline two");
    }

    #[test]
    fn test_root_logger_detection() {
        assert!(LogEvent::new("", LogLevel::Info, "x").is_root_logger());
        assert!(!LogEvent::new("root", LogLevel::Info, "x").is_root_logger());
        assert!(!LogEvent::new("app.db", LogLevel::Info, "x").is_root_logger());
    }

    #[test]
    fn test_with_location() {
        let event = LogEvent::new("app", LogLevel::Debug, "x").with_location("Foo.cpp", 42);
        assert_eq!(event.file.as_deref(), Some("Foo.cpp"));
        assert_eq!(event.line, Some(42));
    }
}
