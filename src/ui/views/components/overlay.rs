//! Overlays
//!
//! Renders the topmost modal and the header dropdown menu above the page.

use super::super::theme::Theme;
use crate::ui::app::{App, MenuCommand};
use crate::model::dropdown::DropdownMenu;
use crate::ui::modal::{Modal, ModalSize};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(vertical);
    centered
}

pub fn render_modal(f: &mut Frame, modal: &Modal, theme: &Theme) {
    let width = match modal.size {
        ModalSize::Small => 40,
        ModalSize::Medium => 60,
    };
    let area = centered_rect(f.area(), width, 9);

    let buttons: Vec<Span> = modal
        .footer
        .buttons()
        .into_iter()
        .flat_map(|label| {
            let style = if label == modal.footer.delete_text.as_deref().unwrap_or("Delete") {
                theme.title().fg(theme.danger)
            } else {
                theme.title()
            };
            [Span::styled(format!("[{}]", label), style), Span::raw("  ")]
        })
        .collect();

    let lines = vec![
        Line::from(Span::styled(modal.message.clone(), theme.text())),
        Line::from(""),
        Line::from(buttons).alignment(Alignment::Right),
    ];
    let block = Block::default()
        .title(modal.title.clone())
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(theme.accent())
        .padding(Padding::uniform(1))
        .style(theme.text().bg(theme.background));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

/// Renders the menu as a dropdown hanging from the top right corner of `anchor`.
pub fn render_dropdown(f: &mut Frame, anchor: Rect, menu: &DropdownMenu<MenuCommand>, theme: &Theme) {
    let mut lines = Vec::new();
    for (i, item) in menu.items().iter().enumerate() {
        if item.details.separated {
            lines.push(Line::from(Span::styled("─".repeat(18), theme.muted())));
        }
        let icon = item.details.icon.map(|icon| icon.glyph()).unwrap_or(" ");
        let style = if i == menu.selected() {
            theme.selected()
        } else {
            theme.text()
        };
        lines.push(Line::from(Span::styled(format!("{} {}", icon, item.name()), style)));
    }

    let height = (lines.len() as u16 + 2).min(anchor.height);
    let width = 22.min(anchor.width);
    let area = Rect {
        x: anchor.x + anchor.width - width,
        y: anchor.y,
        width,
        height,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.accent())
        .style(theme.text().bg(theme.background));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_overlays(f: &mut Frame, content: Rect, app: &App, theme: &Theme) {
    if app.is_menu_open() {
        render_dropdown(f, content, app.menu(), theme);
    }
    if let Some(modal) = app.ui().modals.top() {
        render_modal(f, modal, theme);
    }
}
