//! Poll snapshots
//!
//! Each poll cycle produces one immutable snapshot; the rendering layer is a
//! pure consumer of the latest one. Connectivity and the last-update time are
//! derived from the published status rather than held as shared mutable state.

use crate::consts::watch_consts::PLACEHOLDER_VALUE;
use crate::error_classifier::Banner;
use crate::sheets::types::ValueRange;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;

/// A named display slot bound to one fixed row of a fetched range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SlotId {
    Sensor1,
    Sensor4,
    Actuator1,
    Actuator2,
    Actuator3,
    Actuator4,
}

impl SlotId {
    /// Row of the slot within its source range.
    fn row(&self) -> usize {
        match self {
            SlotId::Sensor1 => 0,
            SlotId::Sensor4 => 3,
            SlotId::Actuator1 => 0,
            SlotId::Actuator2 => 1,
            SlotId::Actuator3 => 2,
            SlotId::Actuator4 => 3,
        }
    }

    fn is_sensor(&self) -> bool {
        matches!(self, SlotId::Sensor1 | SlotId::Sensor4)
    }

    pub const SENSORS: [SlotId; 2] = [SlotId::Sensor1, SlotId::Sensor4];
    pub const ACTUATORS: [SlotId; 4] = [
        SlotId::Actuator1,
        SlotId::Actuator2,
        SlotId::Actuator3,
        SlotId::Actuator4,
    ];
}

/// Result of one successful poll cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct PollSnapshot {
    /// Monotonic cycle number; consumers discard anything not newer than the
    /// last applied one.
    pub seq: u64,
    /// Local wall-clock time the cycle completed.
    pub taken_at: DateTime<Local>,
    /// Formatted text for every slot.
    pub slots: BTreeMap<SlotId, String>,
}

impl PollSnapshot {
    /// Builds a snapshot from the two fetched ranges. Every slot is present:
    /// a missing row or empty cell yields the placeholder.
    pub fn from_ranges(
        seq: u64,
        sensors: &ValueRange,
        actuators: &ValueRange,
        taken_at: DateTime<Local>,
    ) -> Self {
        let mut slots = BTreeMap::new();
        for slot in SlotId::SENSORS.into_iter().chain(SlotId::ACTUATORS) {
            let range = if slot.is_sensor() { sensors } else { actuators };
            slots.insert(slot, format_cell(range.cell(slot.row())));
        }
        Self {
            seq,
            taken_at,
            slots,
        }
    }

    pub fn slot_text(&self, slot: SlotId) -> &str {
        self.slots
            .get(&slot)
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_VALUE)
    }

    /// Last-update display text, fixed local `HH:MM:SS`.
    pub fn formatted_time(&self) -> String {
        self.taken_at.format("%H:%M:%S").to_string()
    }
}

/// Latest known poll outcome, published by the poller over a watch channel.
#[derive(Debug, Clone, PartialEq)]
pub enum PollStatus {
    /// No cycle has completed yet.
    Pending,
    /// Last cycle succeeded.
    Online(PollSnapshot),
    /// Last cycle failed; the snapshot from the previous success, if any,
    /// stays on screen.
    Offline { seq: u64, banner: Banner },
}

impl PollStatus {
    pub fn seq(&self) -> u64 {
        match self {
            PollStatus::Pending => 0,
            PollStatus::Online(snapshot) => snapshot.seq,
            PollStatus::Offline { seq, .. } => *seq,
        }
    }
}

/// Formats one cell for display: missing, null, or empty cells become the
/// placeholder; numeric text is rendered with exactly two decimals; anything
/// else passes through unchanged.
pub fn format_cell(cell: Option<&serde_json::Value>) -> String {
    let text = match cell {
        None => return PLACEHOLDER_VALUE.to_string(),
        Some(serde_json::Value::Null) => return PLACEHOLDER_VALUE.to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    if text.trim().is_empty() {
        return PLACEHOLDER_VALUE.to_string();
    }
    match text.trim().parse::<f64>() {
        Ok(number) => format!("{:.2}", number),
        Err(_) => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn range_of(rows: &[&str]) -> ValueRange {
        ValueRange {
            range: None,
            major_dimension: None,
            values: Some(rows.iter().map(|cell| vec![json!(cell)]).collect()),
        }
    }

    #[test]
    fn numeric_text_renders_with_two_decimals() {
        assert_eq!(format_cell(Some(&json!("3"))), "3.00");
        assert_eq!(format_cell(Some(&json!("21.5"))), "21.50");
        assert_eq!(format_cell(Some(&json!("-7.456"))), "-7.46");
        assert_eq!(format_cell(Some(&json!(" 2 "))), "2.00");
    }

    #[test]
    fn non_numeric_text_passes_through() {
        assert_eq!(format_cell(Some(&json!("ON"))), "ON");
        assert_eq!(format_cell(Some(&json!("21.5 C"))), "21.5 C");
    }

    #[test]
    fn empty_and_null_cells_render_placeholder() {
        assert_eq!(format_cell(None), "--");
        assert_eq!(format_cell(Some(&serde_json::Value::Null)), "--");
        assert_eq!(format_cell(Some(&json!(""))), "--");
        assert_eq!(format_cell(Some(&json!("   "))), "--");
    }

    #[test]
    fn full_ranges_populate_every_slot() {
        let sensors = range_of(&["10", "20", "30", "40"]);
        let actuators = range_of(&["1", "0", "1", "0"]);
        let snapshot = PollSnapshot::from_ranges(1, &sensors, &actuators, Local::now());

        assert_eq!(snapshot.slot_text(SlotId::Sensor1), "10.00");
        assert_eq!(snapshot.slot_text(SlotId::Sensor4), "40.00");
        assert_eq!(snapshot.slot_text(SlotId::Actuator1), "1.00");
        assert_eq!(snapshot.slot_text(SlotId::Actuator2), "0.00");
        assert_eq!(snapshot.slot_text(SlotId::Actuator3), "1.00");
        assert_eq!(snapshot.slot_text(SlotId::Actuator4), "0.00");
    }

    #[test]
    fn short_ranges_fill_missing_rows_with_placeholder() {
        let sensors = range_of(&["18.25"]);
        let actuators = range_of(&["ON", "OFF"]);
        let snapshot = PollSnapshot::from_ranges(2, &sensors, &actuators, Local::now());

        assert_eq!(snapshot.slot_text(SlotId::Sensor1), "18.25");
        assert_eq!(snapshot.slot_text(SlotId::Sensor4), "--");
        assert_eq!(snapshot.slot_text(SlotId::Actuator1), "ON");
        assert_eq!(snapshot.slot_text(SlotId::Actuator2), "OFF");
        assert_eq!(snapshot.slot_text(SlotId::Actuator3), "--");
        assert_eq!(snapshot.slot_text(SlotId::Actuator4), "--");
    }

    #[test]
    fn absent_values_field_renders_all_placeholders() {
        let empty = ValueRange::default();
        let snapshot = PollSnapshot::from_ranges(3, &empty, &empty, Local::now());
        for slot in SlotId::SENSORS.into_iter().chain(SlotId::ACTUATORS) {
            assert_eq!(snapshot.slot_text(slot), "--");
        }
    }

    #[test]
    fn slot_ids_display_as_dom_style_names() {
        assert_eq!(SlotId::Sensor1.to_string(), "sensor1");
        assert_eq!(SlotId::Actuator4.to_string(), "actuator4");
    }
}
