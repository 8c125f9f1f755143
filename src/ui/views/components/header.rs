//! Header component
//!
//! Renders the title bar and either the analytics tabs or the route breadcrumb.

use super::super::theme::Theme;
use crate::model::segmented::SegmentedItem;
use crate::ui::app::App;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};

pub fn render_header(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title = Paragraph::new(format!("PERFICE v{}", env!("CARGO_PKG_VERSION")))
        .alignment(Alignment::Center)
        .style(theme.title())
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick)
                .border_style(theme.muted()),
        );
    f.render_widget(title, header_chunks[0]);

    if app.is_on_analytics() {
        render_analytics_tabs(f, header_chunks[1], app, theme);
    } else {
        render_breadcrumb(f, header_chunks[1], app, theme);
    }
}

fn render_analytics_tabs(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let items = app.analytics_items();
    let selected = SegmentedItem::position_of(items, &app.analytics_view()).unwrap_or(0);
    let tabs = Tabs::new(items.iter().map(SegmentedItem::label))
        .select(selected)
        .style(theme.text())
        .highlight_style(theme.selected())
        .divider(Span::styled("|", theme.muted()));
    f.render_widget(tabs, area);
}

fn render_breadcrumb(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let stack = app.ui().router.stack();
    let mut spans = vec![Span::styled("/", theme.muted())];
    for (i, route) in stack.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" > ", theme.muted()));
        }
        let style = if i + 1 == stack.len() {
            theme.accent()
        } else {
            theme.text()
        };
        spans.push(Span::styled(route.clone(), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
