//! Activity events
//!
//! What happened in the terminal UI, kept for the activity panel.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// The part of the application an event came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventSource {
    Router,
    Drawer,
    Storage,
    Analytics,
    Preferences,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: EventSource,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: EventSource, msg: impl Into<String>, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg: msg.into(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn info(source: EventSource, msg: impl Into<String>) -> Self {
        Self::new(source, msg, EventType::Info, LogLevel::Info)
    }

    pub fn debug(source: EventSource, msg: impl Into<String>) -> Self {
        Self::new(source, msg, EventType::Info, LogLevel::Debug)
    }

    pub fn success(source: EventSource, msg: impl Into<String>) -> Self {
        Self::new(source, msg, EventType::Success, LogLevel::Info)
    }

    pub fn error(source: EventSource, msg: impl Into<String>) -> Self {
        Self::new(source, msg, EventType::Error, LogLevel::Error)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
