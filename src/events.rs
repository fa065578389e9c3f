//! Event System
//!
//! Types and implementations for poller events and logging

use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
    StateChange,
}

/// Current phase of the poll cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum PollPhase {
    /// Both range requests are in flight.
    Fetching,
    /// Waiting for the next timer tick or refresh request.
    Idle,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Phase information carried by state change events.
    pub poll_phase: Option<PollPhase>,
}

impl Event {
    pub fn poller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            poll_phase: None,
        }
    }

    pub fn state_change(phase: PollPhase, msg: String) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type: EventType::StateChange,
            log_level: LogLevel::Info,
            poll_phase: Some(phase),
        }
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        // StateChange events drive the header, not the log panel
        if self.event_type == EventType::StateChange {
            return false;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
