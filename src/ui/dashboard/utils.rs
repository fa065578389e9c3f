//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::EventType;
use ratatui::prelude::Color;

/// Get a ratatui color for an event based on its type
pub fn get_event_color(event_type: &EventType) -> Color {
    match event_type {
        EventType::Success => Color::Green,
        EventType::Error => Color::Red,
        EventType::Refresh => Color::Cyan,
        EventType::Waiting => Color::DarkGray,
        EventType::StateChange => Color::DarkGray,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM:SS from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(time) = time_part.get(0..8) {
                    return format!("{} {}", month_day, time);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean transport error messages for the log panel
pub fn clean_transport_message(msg: &str) -> String {
    if msg.contains("Transport error") && msg.contains("timed out") {
        return "Request timed out - retrying on next poll".to_string();
    }
    if msg.contains("Transport error") {
        return "Network error - retrying on next poll".to_string();
    }
    msg.to_string()
}
