//! Sensor and actuator slot panels
//!
//! Each panel title carries the connectivity indicator; slot rows show the
//! last-known formatted value for each display slot.

use super::super::state::DashboardState;
use crate::snapshot::SlotId;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_slots_section(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_slot_panel(f, chunks[0], state, "SENSORS", &SlotId::SENSORS);
    render_slot_panel(f, chunks[1], state, "ACTUATORS", &SlotId::ACTUATORS);
}

fn render_slot_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
    name: &str,
    slots: &[SlotId],
) {
    let (indicator, indicator_color) = if state.is_online() {
        ("● ONLINE", Color::Green)
    } else {
        ("○ OFFLINE", Color::Red)
    };

    let rows: Vec<Line> = slots
        .iter()
        .map(|slot| {
            let value = state.slot_text(*slot);
            let value_style = if value == "--" || value == "..." {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD)
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<12}", slot.to_string()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(value.to_string(), value_style),
            ])
        })
        .collect();

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                format!("{} ", name),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(indicator, Style::default().fg(indicator_color)),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(Paragraph::new(rows).block(block), area);
}
