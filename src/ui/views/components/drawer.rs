//! Drawer component
//!
//! Lists the navigation links, with the bottom-pinned ones last.

use super::super::theme::Theme;
use crate::ui::app::App;
use crate::ui::sidebar::{SIDEBAR_LINKS, active_link};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_drawer(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let route = app.current_route();
    let active = active_link(&route);

    let mut lines = Vec::new();
    let mut bottom = Vec::new();
    for (i, link) in SIDEBAR_LINKS.iter().enumerate() {
        let marker = if active.map(|a| a.path) == Some(link.path) {
            "▸"
        } else {
            " "
        };
        let style = if i == app.drawer_selection() {
            theme.selected()
        } else {
            theme.text()
        };
        let line = Line::from(vec![
            Span::styled(format!("{} ", marker), theme.accent()),
            Span::styled(format!("{} {}", link.icon.glyph(), link.title), style),
        ]);
        if link.bottom {
            bottom.push(line);
        } else {
            lines.push(line);
        }
    }

    // Push pinned links to the bottom of the panel.
    let inner_height = area.height.saturating_sub(4) as usize;
    let filler = inner_height.saturating_sub(lines.len() + bottom.len());
    lines.extend(std::iter::repeat_n(Line::from(""), filler));
    lines.extend(bottom);

    let block = Block::default()
        .title("MENU")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.accent())
        .padding(Padding::uniform(1));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
