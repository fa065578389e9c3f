//! Telemetry polling with single-flight semantics
//!
//! One task owns the whole poll cycle: timer ticks and refresh requests are
//! only consumed between cycles, so two polls can never be in flight at once.
//! Each cycle publishes an immutable status over a watch channel; consumers
//! order them by sequence number.

use crate::config::Config;
use crate::consts::watch_consts::sheet;
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::{Event, EventType, PollPhase};
use crate::sheets::SheetsApi;
use crate::sheets::error::SheetsError;
use crate::snapshot::{PollSnapshot, PollStatus};
use chrono::Local;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::time::MissedTickBehavior;

#[derive(Error, Debug)]
pub enum PollError {
    /// Credential missing or left at the placeholder value; detected before
    /// any network call.
    #[error("API key is not configured")]
    NotConfigured,

    #[error("Sheets error: {0}")]
    Sheets(#[from] SheetsError),
}

/// One fetch-parse attempt. Issues the two range requests concurrently and
/// joins both before building the snapshot; either failing fails the whole
/// cycle. The credential is checked before any network call.
pub async fn poll_ranges(
    sheets: &dyn SheetsApi,
    config: &Config,
    seq: u64,
) -> Result<PollSnapshot, PollError> {
    if !config.is_configured() {
        return Err(PollError::NotConfigured);
    }

    let (sensors, actuators) = futures::join!(
        sheets.get_values(&config.spreadsheet_id, sheet::SENSOR_RANGE, &config.api_key),
        sheets.get_values(
            &config.spreadsheet_id,
            sheet::ACTUATOR_RANGE,
            &config.api_key,
        ),
    );
    let sensors = sensors?;
    let actuators = actuators?;

    Ok(PollSnapshot::from_ranges(
        seq,
        &sensors,
        &actuators,
        Local::now(),
    ))
}

/// Fetches both telemetry ranges and publishes the outcome of every cycle.
pub struct Poller {
    sheets: Box<dyn SheetsApi>,
    config: Config,
    interval: Duration,
    max_polls: Option<u32>,
    classifier: ErrorClassifier,
    event_sender: mpsc::Sender<Event>,
    status_sender: watch::Sender<PollStatus>,
    shutdown_sender: broadcast::Sender<()>,
    seq: u64,
}

impl Poller {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sheets: Box<dyn SheetsApi>,
        config: Config,
        interval: Duration,
        max_polls: Option<u32>,
        event_sender: mpsc::Sender<Event>,
        status_sender: watch::Sender<PollStatus>,
        shutdown_sender: broadcast::Sender<()>,
    ) -> Self {
        Self {
            sheets,
            config,
            interval,
            max_polls,
            classifier: ErrorClassifier::new(),
            event_sender,
            status_sender,
            shutdown_sender,
            seq: 0,
        }
    }

    /// One fetch-parse attempt. See [`poll_ranges`].
    pub async fn poll_once(&self, seq: u64) -> Result<PollSnapshot, PollError> {
        poll_ranges(self.sheets.as_ref(), &self.config, seq).await
    }

    /// Poll loop: one cycle at startup, then one per timer tick or refresh
    /// request. Refresh requests arriving mid-cycle stay queued (capacity 1)
    /// and trigger exactly one extra cycle.
    pub async fn run(
        mut self,
        mut shutdown: broadcast::Receiver<()>,
        mut refresh: mpsc::Receiver<()>,
    ) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut completed: u32 = 0;

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                _ = ticker.tick() => {}
                Some(()) = refresh.recv() => {}
            }

            self.run_cycle().await;
            completed += 1;

            if let Some(max) = self.max_polls {
                if completed >= max {
                    let _ = self.shutdown_sender.send(());
                    break;
                }
            }
        }
    }

    async fn run_cycle(&mut self) {
        self.seq += 1;
        let seq = self.seq;

        self.send_event(Event::state_change(
            PollPhase::Fetching,
            "Fetching telemetry ranges".to_string(),
        ))
        .await;
        self.send_event(Event::poller_with_level(
            format!("Poll #{}: fetching sensor and actuator ranges...", seq),
            EventType::Refresh,
            LogLevel::Debug,
        ))
        .await;

        match self.poll_once(seq).await {
            Ok(snapshot) => {
                self.send_event(Event::poller_with_level(
                    format!(
                        "Poll #{}: updated {} slots at {}",
                        seq,
                        snapshot.slots.len(),
                        snapshot.formatted_time()
                    ),
                    EventType::Success,
                    LogLevel::Info,
                ))
                .await;
                let _ = self.status_sender.send(PollStatus::Online(snapshot));
            }
            Err(error) => {
                let banner = self.classifier.classify(&error);
                let log_level = self.classifier.log_level(&error);
                self.send_event(Event::poller_with_level(
                    banner.message(),
                    EventType::Error,
                    log_level,
                ))
                .await;
                let _ = self.status_sender.send(PollStatus::Offline { seq, banner });
            }
        }

        self.send_event(Event::state_change(
            PollPhase::Idle,
            "Waiting for next poll".to_string(),
        ))
        .await;
    }

    async fn send_event(&self, event: Event) {
        let _ = self.event_sender.send(event).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_classifier::Banner;
    use crate::sheets::MockSheetsApi;
    use crate::sheets::types::ValueRange;
    use crate::snapshot::SlotId;
    use serde_json::json;

    fn channels() -> (
        mpsc::Sender<Event>,
        mpsc::Receiver<Event>,
        watch::Sender<PollStatus>,
        broadcast::Sender<()>,
    ) {
        let (event_tx, event_rx) = mpsc::channel(16);
        let (status_tx, _status_rx) = watch::channel(PollStatus::Pending);
        let (shutdown_tx, _) = broadcast::channel(1);
        (event_tx, event_rx, status_tx, shutdown_tx)
    }

    fn poller_with(mock: MockSheetsApi, config: Config) -> Poller {
        let (event_tx, _event_rx, status_tx, shutdown_tx) = channels();
        // Receiver halves are dropped; sends are best-effort in the poller.
        Poller::new(
            Box::new(mock),
            config,
            Duration::from_secs(5),
            None,
            event_tx,
            status_tx,
            shutdown_tx,
        )
    }

    fn range_of(rows: &[&str]) -> ValueRange {
        ValueRange {
            range: None,
            major_dimension: None,
            values: Some(rows.iter().map(|cell| vec![json!(cell)]).collect()),
        }
    }

    #[tokio::test]
    async fn unconfigured_key_skips_network_calls() {
        let mut mock = MockSheetsApi::new();
        mock.expect_get_values().never();

        let poller = poller_with(mock, Config::default());
        let result = poller.poll_once(1).await;
        assert!(matches!(result, Err(PollError::NotConfigured)));
    }

    #[tokio::test]
    async fn successful_cycle_builds_full_snapshot() {
        let mut mock = MockSheetsApi::new();
        mock.expect_get_values()
            .withf(|id, range, key| {
                id == "sheet-1" && range == sheet::SENSOR_RANGE && key == "key-1"
            })
            .times(1)
            .returning(|_, _, _| Ok(range_of(&["10", "20", "30", "40"])));
        mock.expect_get_values()
            .withf(|id, range, key| {
                id == "sheet-1" && range == sheet::ACTUATOR_RANGE && key == "key-1"
            })
            .times(1)
            .returning(|_, _, _| Ok(range_of(&["1", "0", "1", "0"])));

        let config = Config::new("sheet-1".to_string(), "key-1".to_string());
        let poller = poller_with(mock, config);
        let snapshot = poller.poll_once(7).await.unwrap();

        assert_eq!(snapshot.seq, 7);
        assert_eq!(snapshot.slot_text(SlotId::Sensor1), "10.00");
        assert_eq!(snapshot.slot_text(SlotId::Sensor4), "40.00");
        assert_eq!(snapshot.slot_text(SlotId::Actuator1), "1.00");
        assert_eq!(snapshot.slot_text(SlotId::Actuator4), "0.00");
    }

    #[tokio::test]
    async fn either_range_failing_fails_the_cycle() {
        let mut mock = MockSheetsApi::new();
        mock.expect_get_values()
            .withf(|_, range, _| range == sheet::SENSOR_RANGE)
            .returning(|_, _, _| Ok(range_of(&["10"])));
        mock.expect_get_values()
            .withf(|_, range, _| range == sheet::ACTUATOR_RANGE)
            .returning(|_, _, _| {
                Err(SheetsError::Http {
                    status: 403,
                    message: "forbidden".to_string(),
                })
            });

        let config = Config::new("sheet-1".to_string(), "key-1".to_string());
        let poller = poller_with(mock, config);
        let result = poller.poll_once(1).await;
        assert!(matches!(
            result,
            Err(PollError::Sheets(SheetsError::Http { status: 403, .. }))
        ));
    }

    #[tokio::test]
    async fn failed_cycle_publishes_offline_status_with_banner() {
        let mut mock = MockSheetsApi::new();
        mock.expect_get_values().returning(|_, _, _| {
            Err(SheetsError::Api {
                code: 404,
                status: "NOT_FOUND".to_string(),
                message: "Requested entity was not found.".to_string(),
            })
        });

        let (event_tx, mut event_rx, status_tx, shutdown_tx) = channels();
        let status_rx = status_tx.subscribe();
        let config = Config::new("sheet-1".to_string(), "key-1".to_string());
        let mut poller = Poller::new(
            Box::new(mock),
            config,
            Duration::from_secs(5),
            None,
            event_tx,
            status_tx,
            shutdown_tx,
        );

        poller.run_cycle().await;

        assert_eq!(
            *status_rx.borrow(),
            PollStatus::Offline {
                seq: 1,
                banner: Banner::NotFound,
            }
        );

        let mut saw_error_event = false;
        while let Ok(event) = event_rx.try_recv() {
            if event.event_type == EventType::Error {
                assert_eq!(event.msg, Banner::NotFound.message());
                saw_error_event = true;
            }
        }
        assert!(saw_error_event);
    }

    #[tokio::test]
    async fn successful_cycle_publishes_online_status() {
        let mut mock = MockSheetsApi::new();
        mock.expect_get_values()
            .returning(|_, _, _| Ok(range_of(&["10", "20", "30", "40"])));

        let (event_tx, _event_rx, status_tx, shutdown_tx) = channels();
        let status_rx = status_tx.subscribe();
        let config = Config::new("sheet-1".to_string(), "key-1".to_string());
        let mut poller = Poller::new(
            Box::new(mock),
            config,
            Duration::from_secs(5),
            None,
            event_tx,
            status_tx,
            shutdown_tx,
        );

        poller.run_cycle().await;
        poller.run_cycle().await;

        match &*status_rx.borrow() {
            PollStatus::Online(snapshot) => assert_eq!(snapshot.seq, 2),
            other => panic!("unexpected status: {:?}", other),
        }
    }

    #[tokio::test]
    async fn max_polls_stops_the_loop_and_signals_shutdown() {
        let mut mock = MockSheetsApi::new();
        mock.expect_get_values()
            .returning(|_, _, _| Ok(range_of(&["10"])));

        let (event_tx, _event_rx, status_tx, shutdown_tx) = channels();
        let mut completion_rx = shutdown_tx.subscribe();
        let config = Config::new("sheet-1".to_string(), "key-1".to_string());
        let poller = Poller::new(
            Box::new(mock),
            config,
            Duration::from_millis(10),
            Some(2),
            event_tx,
            status_tx,
            shutdown_tx.clone(),
        );

        let (_refresh_tx, refresh_rx) = mpsc::channel(1);
        poller.run(shutdown_tx.subscribe(), refresh_rx).await;

        assert!(completion_rx.try_recv().is_ok());
    }
}
