//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::snapshot::PollStatus;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc, watch};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub interval: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, interval: Duration) -> Self {
        Self {
            with_background_color,
            interval,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying slot values and connectivity status.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Spreadsheet being watched.
    spreadsheet_id: String,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from the poller task.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Latest published poll status.
    status_receiver: watch::Receiver<PollStatus>,

    /// Requests an immediate extra poll cycle.
    refresh_sender: mpsc::Sender<()>,

    /// Broadcasts shutdown signal to the poller task.
    shutdown_sender: broadcast::Sender<()>,

    /// Receives the completion signal when --max-polls is reached.
    shutdown_receiver: broadcast::Receiver<()>,

    /// UI configuration.
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        spreadsheet_id: String,
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        status_receiver: watch::Receiver<PollStatus>,
        refresh_sender: mpsc::Sender<()>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        let shutdown_receiver = shutdown_sender.subscribe();
        Self {
            start_time: Instant::now(),
            spreadsheet_id,
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            status_receiver,
            refresh_sender,
            shutdown_sender,
            shutdown_receiver,
            ui_config,
        }
    }

    fn dashboard_state(&self) -> DashboardState {
        DashboardState::new(
            self.spreadsheet_id.clone(),
            self.environment.clone(),
            self.start_time,
            self.ui_config.clone(),
        )
    }

    /// Queue a refresh request. A request already queued is equivalent; the
    /// poller coalesces them.
    fn request_refresh(&self) {
        let _ = self.refresh_sender.try_send(());
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Check for poller completion signal (non-blocking)
        if app.shutdown_receiver.try_recv().is_ok() {
            return Ok(());
        }

        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Apply the latest poll status and advance animations
        if let Screen::Dashboard(state) = &mut app.current_screen {
            if app.status_receiver.has_changed().unwrap_or(false) {
                let status = app.status_receiver.borrow_and_update().clone();
                state.apply_status(&status);
            }
            state.update();
        }

        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.current_screen = Screen::Dashboard(Box::new(app.dashboard_state()));
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Skip events that are not KeyEventKind::Press
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }

                    // Handle exit events
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                        // Send shutdown signal to the poller
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }

                    match &mut app.current_screen {
                        Screen::Splash => {
                            // Any key press will skip the splash screen
                            app.current_screen = Screen::Dashboard(Box::new(app.dashboard_state()));
                        }
                        Screen::Dashboard(_) => {
                            if key.code == KeyCode::Char('r') {
                                app.request_refresh();
                            }
                        }
                    }
                }
                // Terminal regained focus: poll right away, like the original
                // page did when its tab became visible again.
                Event::FocusGained => {
                    app.request_refresh();
                }
                _ => {}
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
