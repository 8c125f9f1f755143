//! Activity log panel
//!
//! Renders recent activity events, newest first.

use super::super::theme::Theme;
use super::super::utils::format_compact_timestamp;
use crate::events::{EventSource, EventType};
use crate::ui::app::App;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn source_color(source: EventSource) -> Color {
    match source {
        EventSource::Router => Color::Cyan,
        EventSource::Drawer => Color::LightBlue,
        EventSource::Storage => Color::Yellow,
        EventSource::Analytics => Color::Green,
        EventSource::Preferences => Color::Magenta,
    }
}

pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    // Borders and padding take three rows
    let log_count = (area.height.saturating_sub(3) as usize).max(1);

    let log_lines: Vec<Line> = app
        .activity()
        .recent(log_count)
        .into_iter()
        .map(|event| {
            let status_icon = match event.event_type {
                EventType::Success => "✅",
                EventType::Error => "❌",
                EventType::Info => "  ",
            };
            Line::from(vec![
                Span::raw(format!("{} ", status_icon)),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    theme.muted(),
                ),
                Span::styled(event.msg, Style::default().fg(source_color(event.source))),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Nothing happened yet")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.accent())
        .padding(Padding::uniform(1));

    f.render_widget(log_paragraph.block(logs_block).wrap(Wrap { trim: true }), area);
}
