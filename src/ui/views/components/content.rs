//! Routed content
//!
//! Renders the page for the current route.

use super::super::theme::Theme;
use super::super::utils::{format_uptime, gauge_percent};
use crate::consts::cli_consts::DISPLAY_DECIMALS;
use crate::math::{calculate_progress_safe, number_to_max_decimals};
use crate::model::analytics::AnalyticsViewType;
use crate::ui::app::{ANALYTICS_ROUTE, App};
use crate::ui::sidebar::active_link;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph, Wrap};

/// Page shown for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Analytics,
    /// Detail page of one analytics entity, e.g. `correlations:sleep~mood`.
    AnalyticsDetails { entity_type: String, id: String },
    Settings,
    Other(String),
}

impl Page {
    pub fn for_route(route: &str) -> Self {
        if route == "/" {
            return Page::Home;
        }
        if route == "/settings" {
            return Page::Settings;
        }
        if let Some(rest) = route.strip_prefix(ANALYTICS_ROUTE) {
            let rest = rest.trim_start_matches('/');
            if rest.is_empty() {
                return Page::Analytics;
            }
            if let Some((entity_type, id)) = rest.split_once(':') {
                return Page::AnalyticsDetails {
                    entity_type: entity_type.to_string(),
                    id: id.to_string(),
                };
            }
        }
        Page::Other(route.to_string())
    }
}

fn panel<'a>(title: impl Into<String>, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title.into())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.accent())
        .padding(Padding::uniform(1))
}

fn field<'a>(label: &str, value: String, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), theme.muted()),
        Span::styled(value, theme.text()),
    ])
}

pub fn render_content(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    match Page::for_route(&app.current_route()) {
        Page::Home => render_home(f, area, app, theme),
        Page::Analytics => render_analytics(f, area, app, theme),
        Page::AnalyticsDetails { entity_type, id } => {
            render_details(f, area, app, theme, &entity_type, &id)
        }
        Page::Settings => render_settings(f, area, app, theme),
        Page::Other(route) => {
            let title = active_link(&route).map(|l| l.title).unwrap_or("PAGE");
            let text = Paragraph::new(vec![
                Line::from(Span::styled(route, theme.accent())),
                Line::from(""),
                Line::from(Span::styled(
                    "This page is only available in the web client.",
                    theme.muted(),
                )),
            ])
            .block(panel(title.to_uppercase(), theme))
            .wrap(Wrap { trim: true });
            f.render_widget(text, area);
        }
    }
}

fn render_home(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let preferences = app.preferences();
    let lines = vec![
        field("Uptime", format_uptime(app.start_time().elapsed()), theme),
        field("History depth", app.ui().router.depth().to_string(), theme),
        field(
            "Dark mode",
            if preferences.dark_mode.get() { "on" } else { "off" }.to_string(),
            theme,
        ),
        field("Week starts on", preferences.week_start.get().to_string(), theme),
        field(
            "Correlations",
            app.history().all_history().len().to_string(),
            theme,
        ),
        field("Ignored", app.ignores().ignored().len().to_string(), theme),
    ];
    let paragraph = Paragraph::new(lines)
        .block(panel("OVERVIEW", theme))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_analytics(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    if app.analytics_view() != AnalyticsViewType::Correlations {
        let text = Paragraph::new(Line::from(Span::styled(
            format!("{} analytics are computed by the web client.", app.analytics_view()),
            theme.muted(),
        )))
        .block(panel(app.analytics_view().to_string().to_uppercase(), theme));
        f.render_widget(text, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    let visible = app.visible_correlations();
    let total = app.history().all_history().len();
    let ratio = calculate_progress_safe(visible.len() as f64, total as f64);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title("Shown")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.muted()),
        )
        .gauge_style(theme.accent().add_modifier(Modifier::BOLD))
        .percent(gauge_percent(ratio))
        .label(format!(
            "{} of {} ({})",
            visible.len(),
            total,
            number_to_max_decimals(ratio, DISPLAY_DECIMALS)
        ));
    f.render_widget(gauge, chunks[0]);

    let lines: Vec<Line> = if visible.is_empty() {
        vec![Line::from(Span::styled(
            "No significant correlations yet",
            theme.muted(),
        ))]
    } else {
        visible
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == app.correlation_selection() {
                    theme.selected()
                } else {
                    theme.text()
                };
                Line::from(vec![
                    Span::styled(
                        format!("{:>6} ", number_to_max_decimals(entry.coefficient, DISPLAY_DECIMALS)),
                        theme.accent(),
                    ),
                    Span::styled(entry.key.clone(), style),
                ])
            })
            .collect()
    };
    f.render_widget(
        Paragraph::new(lines).block(panel("NEWEST CORRELATIONS", theme)),
        chunks[1],
    );
}

fn render_details(f: &mut Frame, area: Rect, app: &App, theme: &Theme, entity_type: &str, id: &str) {
    let mut lines = vec![field("Type", entity_type.to_string(), theme), field("Id", id.to_string(), theme)];
    if entity_type == AnalyticsViewType::Correlations.slug() {
        match app.history().history_by_key(id) {
            Some(entry) => {
                lines.push(field(
                    "Coefficient",
                    number_to_max_decimals(entry.coefficient, DISPLAY_DECIMALS),
                    theme,
                ));
                let seen = chrono::DateTime::from_timestamp_millis(entry.timestamp)
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| entry.timestamp.to_string());
                lines.push(field("First seen", seen, theme));
            }
            None => lines.push(Line::from(Span::styled(
                "Not in the correlation history",
                theme.muted(),
            ))),
        }
    }
    let paragraph = Paragraph::new(lines)
        .block(panel("DETAILS", theme))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_settings(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let preferences = app.preferences();
    let mut lines = vec![
        field(
            "Dark mode",
            if preferences.dark_mode.get() { "on" } else { "off" }.to_string(),
            theme,
        ),
        field("Week starts on", preferences.week_start.get().to_string(), theme),
        Line::from(""),
        Line::from(Span::styled("Ignored correlations", theme.title())),
    ];
    for (scope, keys) in app.ignores().group_by_time_scope() {
        let value = if keys.is_empty() {
            "none".to_string()
        } else {
            keys.join(", ")
        };
        lines.push(field(&scope.to_string(), value, theme));
    }
    let paragraph = Paragraph::new(lines)
        .block(panel("SETTINGS", theme))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_for_route() {
        assert_eq!(Page::for_route("/"), Page::Home);
        assert_eq!(Page::for_route("/analytics"), Page::Analytics);
        assert_eq!(
            Page::for_route("/analytics/correlations:a~b"),
            Page::AnalyticsDetails {
                entity_type: "correlations".to_string(),
                id: "a~b".to_string()
            }
        );
        assert_eq!(Page::for_route("/settings"), Page::Settings);
        assert_eq!(Page::for_route("/journal"), Page::Other("/journal".to_string()));
    }
}
