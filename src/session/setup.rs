//! Session setup and initialization

use crate::config::Config;
use crate::environment::Environment;
use crate::events::Event;
use crate::runtime::start_poller;
use crate::snapshot::PollStatus;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for poller events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Latest published poll status
    pub status_receiver: watch::Receiver<PollStatus>,
    /// Requests an immediate extra poll cycle
    pub refresh_sender: mpsc::Sender<()>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop the poller
    pub shutdown_sender: broadcast::Sender<()>,
    /// Spreadsheet being watched (for display purposes)
    pub spreadsheet_id: String,
    /// Whether a usable credential was present at startup
    pub configured: bool,
    /// Environment being polled
    pub environment: Environment,
    /// Poll interval (for the header countdown)
    pub interval: Duration,
}

/// Sets up a watch session.
///
/// This function handles the common setup required for both TUI and headless
/// modes: it creates the shutdown channel, starts the poller task, and returns
/// the channel ends for mode-specific handling. An unconfigured credential is
/// not fatal here; the first poll cycle reports it as a configuration error.
pub fn setup_session(
    config: Config,
    environment: Environment,
    interval: Duration,
    max_polls: Option<u32>,
) -> SessionData {
    let spreadsheet_id = config.spreadsheet_id.clone();
    let configured = config.is_configured();

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let handles = start_poller(
        config,
        environment.clone(),
        interval,
        max_polls,
        shutdown_sender.clone(),
    );

    SessionData {
        event_receiver: handles.event_receiver,
        status_receiver: handles.status_receiver,
        refresh_sender: handles.refresh_sender,
        join_handles: handles.join_handles,
        shutdown_sender,
        spreadsheet_id,
        configured,
        environment,
        interval,
    }
}
