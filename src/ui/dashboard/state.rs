//! Dashboard state management
//!
//! The dashboard is a pure consumer of published poll statuses: it keeps the
//! most recent snapshot's slot texts, the current banner, and the activity
//! log, and never mutates polling state itself.

use crate::consts::watch_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::error_classifier::Banner;
use crate::events::{Event as WorkerEvent, EventType, PollPhase};
use crate::snapshot::{PollStatus, SlotId};
use crate::ui::app::UIConfig;

use std::collections::{BTreeMap, VecDeque};
use std::time::{Duration, Instant};
use sysinfo::System;

/// Dashboard state fed by the poller's event and status channels.
#[derive(Debug)]
pub struct DashboardState {
    /// Spreadsheet being watched.
    pub spreadsheet_id: String,
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Poll interval, for the header countdown.
    pub interval: Duration,
    /// Total RAM available on the machine, in GB.
    pub total_ram_gb: f64,

    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Animation tick counter
    pub tick: usize,

    /// Sequence number of the last applied status.
    seq: u64,
    /// Whether the most recent poll cycle succeeded.
    connected: bool,
    /// Set once the first cycle has succeeded; before that, slots render a
    /// loading marker.
    first_success_seen: bool,
    /// Banner of the most recent failure, cleared by the next success.
    banner: Option<Banner>,
    /// Last-known slot texts, retained across failed polls.
    slots: BTreeMap<SlotId, String>,
    /// Last-update display time, set only on success.
    last_update: Option<String>,
    /// Completion time of the last applied cycle, for the countdown.
    last_cycle_at: Option<Instant>,
    /// Current phase from state change events.
    poll_phase: PollPhase,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(
        spreadsheet_id: String,
        environment: Environment,
        start_time: Instant,
        ui_config: UIConfig,
    ) -> Self {
        let mut sysinfo = System::new();
        sysinfo.refresh_memory();
        let total_ram_gb = sysinfo.total_memory() as f64 / 1024.0 / 1024.0 / 1024.0;

        Self {
            spreadsheet_id,
            environment,
            start_time,
            with_background_color: ui_config.with_background_color,
            interval: ui_config.interval,
            total_ram_gb,
            activity_logs: VecDeque::new(),
            tick: 0,
            seq: 0,
            connected: false,
            first_success_seen: false,
            banner: None,
            slots: BTreeMap::new(),
            last_update: None,
            last_cycle_at: None,
            poll_phase: PollPhase::Idle,
        }
    }

    /// Queue an incoming event into the activity log; state change events
    /// update the phase instead of being logged.
    pub fn add_event(&mut self, event: WorkerEvent) {
        if event.event_type == EventType::StateChange {
            if let Some(phase) = event.poll_phase {
                self.poll_phase = phase;
            }
            return;
        }
        self.activity_logs.push_back(event);
        while self.activity_logs.len() > MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
    }

    /// Apply a published poll status. Anything not newer than the last
    /// applied sequence number is stale and ignored.
    pub fn apply_status(&mut self, status: &PollStatus) {
        if status.seq() <= self.seq {
            return;
        }
        match status {
            PollStatus::Pending => {}
            PollStatus::Online(snapshot) => {
                self.seq = snapshot.seq;
                self.connected = true;
                self.first_success_seen = true;
                self.banner = None;
                self.slots = snapshot.slots.clone();
                self.last_update = Some(snapshot.formatted_time());
                self.last_cycle_at = Some(Instant::now());
            }
            PollStatus::Offline { seq, banner } => {
                self.seq = *seq;
                self.connected = false;
                self.banner = Some(banner.clone());
                self.last_cycle_at = Some(Instant::now());
            }
        }
    }

    /// Advance animations.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn is_online(&self) -> bool {
        self.connected
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn poll_phase(&self) -> PollPhase {
        self.poll_phase
    }

    /// Last-update display text.
    pub fn last_update_text(&self) -> &str {
        self.last_update.as_deref().unwrap_or("--:--:--")
    }

    /// Display text for one slot: a loading marker until the first success,
    /// then the last-known text.
    pub fn slot_text(&self, slot: SlotId) -> &str {
        if !self.first_success_seen {
            return "...";
        }
        self.slots.get(&slot).map(String::as_str).unwrap_or("--")
    }

    /// Fraction of the interval elapsed since the last cycle, for the
    /// countdown gauge.
    pub fn interval_progress(&self) -> f64 {
        match self.last_cycle_at {
            Some(at) => {
                (at.elapsed().as_secs_f64() / self.interval.as_secs_f64()).clamp(0.0, 1.0)
            }
            None => 0.0,
        }
    }

    /// Seconds until the next timer tick, saturating at zero.
    pub fn seconds_until_next_poll(&self) -> u64 {
        match self.last_cycle_at {
            Some(at) => self
                .interval
                .as_secs()
                .saturating_sub(at.elapsed().as_secs()),
            None => self.interval.as_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_classifier::LogLevel;
    use crate::snapshot::PollSnapshot;
    use chrono::Local;

    fn state() -> DashboardState {
        DashboardState::new(
            "sheet-1".to_string(),
            Environment::Production,
            Instant::now(),
            UIConfig::new(false, Duration::from_secs(5)),
        )
    }

    fn online(seq: u64, sensor1: &str) -> PollStatus {
        let mut slots = BTreeMap::new();
        slots.insert(SlotId::Sensor1, sensor1.to_string());
        PollStatus::Online(PollSnapshot {
            seq,
            taken_at: Local::now(),
            slots,
        })
    }

    fn offline(seq: u64) -> PollStatus {
        PollStatus::Offline {
            seq,
            banner: Banner::AccessDenied,
        }
    }

    #[test]
    fn slots_show_loading_marker_until_first_success() {
        let mut state = state();
        assert_eq!(state.slot_text(SlotId::Sensor1), "...");

        state.apply_status(&online(1, "10.00"));
        assert_eq!(state.slot_text(SlotId::Sensor1), "10.00");
        // Slots absent from the snapshot fall back to the placeholder.
        assert_eq!(state.slot_text(SlotId::Actuator1), "--");
    }

    #[test]
    fn success_clears_banner_and_sets_timestamp() {
        let mut state = state();
        state.apply_status(&offline(1));
        assert!(!state.is_online());
        assert_eq!(state.banner(), Some(&Banner::AccessDenied));
        assert_eq!(state.last_update_text(), "--:--:--");

        state.apply_status(&online(2, "10.00"));
        assert!(state.is_online());
        assert_eq!(state.banner(), None);
        assert_ne!(state.last_update_text(), "--:--:--");
    }

    #[test]
    fn failure_keeps_last_known_slots() {
        let mut state = state();
        state.apply_status(&online(1, "10.00"));
        state.apply_status(&offline(2));

        assert!(!state.is_online());
        assert_eq!(state.slot_text(SlotId::Sensor1), "10.00");
        assert_ne!(state.last_update_text(), "--:--:--");
    }

    #[test]
    fn stale_statuses_are_ignored() {
        let mut state = state();
        state.apply_status(&online(5, "10.00"));
        state.apply_status(&offline(3));

        assert!(state.is_online());
        assert_eq!(state.banner(), None);
    }

    #[test]
    fn state_change_events_update_phase_without_logging() {
        let mut state = state();
        state.add_event(WorkerEvent::state_change(
            PollPhase::Fetching,
            "Fetching telemetry ranges".to_string(),
        ));
        assert_eq!(state.poll_phase(), PollPhase::Fetching);
        assert!(state.activity_logs.is_empty());
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut state = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_event(WorkerEvent::poller_with_level(
                format!("event {}", i),
                EventType::Success,
                LogLevel::Info,
            ));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
    }
}
