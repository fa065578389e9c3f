//! Error banner component
//!
//! A red band shown only while the most recent poll failed.

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_banner(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let Some(banner) = state.banner() else {
        return;
    };

    let paragraph = Paragraph::new(banner.message())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(paragraph, area);
}
