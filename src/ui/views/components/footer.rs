//! Footer component
//!
//! Renders the key hints for whatever currently has focus.

use super::super::theme::Theme;
use crate::ui::app::App;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::Modifier;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn footer_hint(app: &App) -> &'static str {
    if !app.ui().modals.is_empty() {
        "[Enter/Y] Confirm | [Esc/N] Cancel"
    } else if app.is_menu_open() {
        "[↑/↓] Select | [Enter] Run | [Esc] Close"
    } else if app.ui().drawer.is_open() {
        "[↑/↓] Select | [Enter] Open | [Esc] Close | [Q] Quit"
    } else if app.is_on_analytics() {
        "[Tab] View | [↑/↓] Select | [Enter] Details | [I] Ignore | [C] Clear | [B] Back | [Q] Quit"
    } else {
        "[M] Menu | [O] Actions | [D] Dark mode | [W] Week start | [B] Back | [Q] Quit"
    }
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let footer = Paragraph::new(footer_hint(app))
        .alignment(Alignment::Center)
        .style(theme.accent().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick)
                .border_style(theme.muted()),
        );
    f.render_widget(footer, area);
}
