//! Wiring for the poller task and its channels

use crate::config::Config;
use crate::consts::watch_consts::{EVENT_QUEUE_SIZE, REFRESH_QUEUE_SIZE};
use crate::environment::Environment;
use crate::events::Event;
use crate::poller::Poller;
use crate::sheets::SheetsClient;
use crate::snapshot::PollStatus;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

/// Handles returned to the session layer.
pub struct PollerHandles {
    /// Worker events for the activity log.
    pub event_receiver: mpsc::Receiver<Event>,
    /// Latest poll status; consumers read, never write.
    pub status_receiver: watch::Receiver<PollStatus>,
    /// Requests an immediate extra poll cycle (refresh key, focus regained).
    pub refresh_sender: mpsc::Sender<()>,
    /// Join handles for spawned tasks.
    pub join_handles: Vec<JoinHandle<()>>,
}

/// Start the poller task.
pub fn start_poller(
    config: Config,
    environment: Environment,
    interval: Duration,
    max_polls: Option<u32>,
    shutdown_sender: broadcast::Sender<()>,
) -> PollerHandles {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (status_sender, status_receiver) = watch::channel(PollStatus::Pending);
    let (refresh_sender, refresh_receiver) = mpsc::channel::<()>(REFRESH_QUEUE_SIZE);

    let sheets = SheetsClient::new(environment);
    let poller = Poller::new(
        Box::new(sheets),
        config,
        interval,
        max_polls,
        event_sender,
        status_sender,
        shutdown_sender.clone(),
    );

    let shutdown_receiver = shutdown_sender.subscribe();
    let handle = tokio::spawn(async move {
        poller.run(shutdown_receiver, refresh_receiver).await;
    });

    PollerHandles {
        event_receiver,
        status_receiver,
        refresh_sender,
        join_handles: vec![handle],
    }
}
