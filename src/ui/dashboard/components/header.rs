//! Dashboard header component
//!
//! Renders the title and the poll-cycle gauge

use super::super::state::DashboardState;
use crate::events::PollPhase;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and poll progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!("SHEETWATCH v{} - IOT TELEMETRY", version);

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge logic: an in-flight fetch takes priority, then the countdown to
    // the next timer tick.
    let (progress_text, gauge_color, progress_percent) = match state.poll_phase() {
        PollPhase::Fetching => {
            // Animated fetch gauge - loops every 20 ticks
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                "FETCHING - Reading telemetry ranges".to_string(),
                Color::Yellow,
                progress,
            )
        }
        PollPhase::Idle => {
            let percent = (state.interval_progress() * 100.0) as u16;
            (
                format!("NEXT POLL in {}s", state.seconds_until_next_poll()),
                Color::Cyan,
                percent,
            )
        }
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::NONE))
        .gauge_style(Style::default().fg(gauge_color))
        .percent(progress_percent.min(100))
        .label(progress_text);
    f.render_widget(gauge, header_chunks[1]);
}
