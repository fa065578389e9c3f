//! Dashboard info panel component
//!
//! Renders watch session information

use crate::environment::Environment;

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the info panel.
pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut info_lines = Vec::new();

    // Spreadsheet id, truncated to fit the panel
    let sheet_text = if state.spreadsheet_id.len() > 16 {
        format!("Sheet: {}...", &state.spreadsheet_id[..16])
    } else {
        format!("Sheet: {}", state.spreadsheet_id)
    };
    info_lines.push(Line::from(vec![Span::styled(
        sheet_text,
        Style::default().fg(Color::LightBlue),
    )]));

    // Environment with color coding
    let env_color = match state.environment {
        Environment::Production => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };
    info_lines.push(Line::from(vec![Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(env_color),
    )]));

    // Version info
    let version = env!("CARGO_PKG_VERSION");
    info_lines.push(Line::from(vec![Span::styled(
        format!("Version: {}", version),
        Style::default().fg(Color::Cyan),
    )]));

    // Uptime
    let uptime = state.start_time.elapsed();
    let uptime_string = if uptime.as_secs() >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!(
            "Uptime: {}m {}s",
            uptime.as_secs() / 60,
            uptime.as_secs() % 60
        )
    };
    info_lines.push(Line::from(vec![Span::styled(
        uptime_string,
        Style::default().fg(Color::LightGreen),
    )]));

    // Poll interval
    info_lines.push(Line::from(vec![Span::styled(
        format!("Interval: {}s", state.interval.as_secs()),
        Style::default().fg(Color::LightYellow),
    )]));

    // Last successful update
    info_lines.push(Line::from(vec![Span::styled(
        format!("Last update: {}", state.last_update_text()),
        Style::default().fg(Color::LightMagenta),
    )]));

    // Total memory
    info_lines.push(Line::from(vec![Span::styled(
        format!("Memory: {:.1} GB", state.total_ram_gb),
        Style::default().fg(Color::LightCyan),
    )]));

    let info_block = Block::default()
        .title("SESSION INFO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
