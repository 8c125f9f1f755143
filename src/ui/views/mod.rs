//! Screen rendering
//!
//! Lays out the main screen and dispatches to the components.

pub mod components;
pub mod theme;
pub mod utils;

use self::components::{content, drawer, footer, header, logs, overlay};
use self::theme::Theme;
use crate::ui::app::{App, Screen};
use crate::ui::splash::render_splash;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::Style;
use ratatui::widgets::Block;

/// Renders the current screen of `app`.
pub fn render(f: &mut Frame, app: &App) {
    let theme = Theme::for_mode(app.preferences().dark_mode.get());
    if app.with_background_color() {
        f.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            f.area(),
        );
    }

    match app.current_screen() {
        Screen::Splash => render_splash(f, &theme),
        Screen::Main => render_main(f, app, &theme),
    }
}

fn render_main(f: &mut Frame, app: &App, theme: &Theme) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], app, theme);

    let body = if app.ui().drawer.is_open() {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Fill(1)])
            .split(main_chunks[1]);
        drawer::render_drawer(f, chunks[0], app, theme);
        chunks[1]
    } else {
        main_chunks[1]
    };

    content::render_content(f, body, app, theme);
    logs::render_logs_panel(f, main_chunks[2], app, theme);
    footer::render_footer(f, main_chunks[3], app, theme);
    overlay::render_overlays(f, body, app, theme);
}
