//! Main application state and UI loop
//!
//! Contains the App struct, key handling and the terminal event loop.

use crate::config::Config;
use crate::consts::cli_consts::{
    INPUT_POLL_INTERVAL_MS, NEWEST_CORRELATIONS_LIMIT, ROOT_ROUTE, SPLASH_DURATION_SECS,
};
use crate::events::{Event as ActivityEvent, EventSource};
use crate::model::analytics::{
    AnalyticsViewType, analytics_details_link, analytics_segmented_items,
};
use crate::model::dropdown::{DropdownMenu, DropdownMenuItem};
use crate::model::icon::Icon;
use crate::model::segmented::SegmentedItem;
use crate::services::{
    AnalyticsHistoryEntry, AnalyticsHistoryService, CorrelationIgnoreService, IgnoredCorrelation,
    Preferences, SimpleTimeScopeType,
};
use crate::storage::LocalStorage;
use crate::store::Writable;
use crate::ui::activity::ActivityLog;
use crate::ui::context_menu::MenuHandle;
use crate::ui::modal::{Modal, ModalFooterProps, ModalPurpose, ModalSize, ModalType};
use crate::ui::router::get_current_route;
use crate::ui::sidebar::{SIDEBAR_LINKS, active_link};
use crate::ui::state::UiState;
use crate::ui::views::render;
use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Route of the analytics screen.
pub const ANALYTICS_ROUTE: &str = "/analytics";

const HEADER_INITIATOR: &str = "header";
const DRAWER_INITIATOR: &str = "drawer";

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Routed content with drawer, header and activity log.
    Main,
}

/// Entries of the header dropdown menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    ToggleDrawer,
    GoHome,
    OpenAnalytics,
    ToggleDarkMode,
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,
    current_screen: Screen,
    ui: UiState,
    preferences: Preferences,
    history: AnalyticsHistoryService,
    ignores: CorrelationIgnoreService,
    analytics_view: Writable<AnalyticsViewType>,
    analytics_items: Vec<SegmentedItem<AnalyticsViewType>>,
    menu: DropdownMenu<MenuCommand>,
    menu_open: Writable<bool>,
    menu_handle: Option<MenuHandle>,
    /// Highlighted link while the drawer is open.
    drawer_selection: usize,
    /// Highlighted row in the correlations list.
    correlation_selection: usize,
    activity: ActivityLog,
    with_background_color: bool,
    should_quit: bool,
}

impl App {
    /// Creates the application on top of `storage`.
    pub fn new(storage: Rc<dyn LocalStorage>, config: &Config) -> Self {
        let ui = UiState::new();
        let activity = ActivityLog::new();
        let preferences = Preferences::load(Rc::clone(&storage));

        let mut history = AnalyticsHistoryService::new(
            Rc::clone(&storage),
            config.correlation_confidence_threshold,
            config.correlation_change_threshold,
        );
        history.load();
        let mut ignores = CorrelationIgnoreService::new(storage);
        ignores.load();

        let analytics_view = Writable::new(AnalyticsViewType::Trackables);
        let analytics_items = analytics_segmented_items()
            .into_iter()
            .map(|item| {
                let view = analytics_view.clone();
                let value = item.value;
                item.on_click(Rc::new(move || {
                    if let Some(value) = value {
                        view.set(value);
                    }
                }))
            })
            .collect();

        let log = activity.clone();
        ui.drawer.subscribe(move |open| {
            let msg = if *open { "Drawer opened" } else { "Drawer closed" };
            log.push(ActivityEvent::debug(EventSource::Drawer, msg));
        });
        let log = activity.clone();
        ui.router.subscribe(move |stack| {
            log.push(ActivityEvent::info(
                EventSource::Router,
                format!("Now at {}", get_current_route(stack)),
            ));
        });
        let log = activity.clone();
        preferences.dark_mode.subscribe(move |enabled| {
            let msg = if *enabled { "Dark mode on" } else { "Dark mode off" };
            log.push(ActivityEvent::debug(EventSource::Preferences, msg));
        });

        activity.push(ActivityEvent::success(
            EventSource::Storage,
            format!(
                "Loaded {} correlations, {} ignored",
                history.all_history().len(),
                ignores.ignored().len()
            ),
        ));

        let menu = build_menu(&ui, &preferences);
        Self {
            start_time: Instant::now(),
            current_screen: Screen::Splash,
            ui,
            preferences,
            history,
            ignores,
            analytics_view,
            analytics_items,
            menu,
            menu_open: Writable::new(false),
            menu_handle: None,
            drawer_selection: 0,
            correlation_selection: 0,
            activity,
            with_background_color: config.with_background_color,
            should_quit: false,
        }
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn analytics_view(&self) -> AnalyticsViewType {
        self.analytics_view.get()
    }

    pub fn analytics_items(&self) -> &[SegmentedItem<AnalyticsViewType>] {
        &self.analytics_items
    }

    pub fn menu(&self) -> &DropdownMenu<MenuCommand> {
        &self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn drawer_selection(&self) -> usize {
        self.drawer_selection
    }

    pub fn correlation_selection(&self) -> usize {
        self.correlation_selection
    }

    pub fn with_background_color(&self) -> bool {
        self.with_background_color
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn history(&self) -> &AnalyticsHistoryService {
        &self.history
    }

    pub fn ignores(&self) -> &CorrelationIgnoreService {
        &self.ignores
    }

    pub fn current_route(&self) -> String {
        self.ui.router.current_route()
    }

    pub fn is_on_analytics(&self) -> bool {
        self.current_route().starts_with(ANALYTICS_ROUTE)
    }

    /// Newest correlations, minus the ones ignored on the daily scope.
    pub fn visible_correlations(&self) -> Vec<AnalyticsHistoryEntry> {
        let now = Utc::now().timestamp_millis();
        self.history
            .newest_correlations(NEWEST_CORRELATIONS_LIMIT, now)
            .into_iter()
            .filter(|e| !self.ignores.is_ignored(&e.key, SimpleTimeScopeType::Daily))
            .collect()
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.current_screen == Screen::Splash {
            self.current_screen = Screen::Main;
            return;
        }
        if !self.ui.modals.is_empty() {
            self.handle_modal_key(code);
        } else if self.menu_open.get() {
            self.handle_menu_key(code);
        } else if self.ui.drawer.is_open() {
            self.handle_drawer_key(code);
        } else {
            self.handle_content_key(code);
        }
    }

    fn handle_content_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('m') => self.toggle_drawer(),
            KeyCode::Char('o') => self.open_menu(),
            KeyCode::Backspace | KeyCode::Char('b') => {
                self.ui.router.back();
                self.correlation_selection = 0;
            }
            KeyCode::Tab if self.is_on_analytics() => self.next_analytics_view(),
            KeyCode::Up => {
                self.correlation_selection = self.correlation_selection.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.correlation_selection + 1 < self.visible_correlations().len() {
                    self.correlation_selection += 1;
                }
            }
            KeyCode::Enter => self.open_selected_correlation(),
            KeyCode::Char('i') => self.ignore_selected_correlation(),
            KeyCode::Char('c') => self.ui.modals.open(clear_history_modal()),
            KeyCode::Char('d') => self.preferences.toggle_dark_mode(),
            KeyCode::Char('w') => self.preferences.week_start.update(|w| w.next()),
            KeyCode::Char('q') | KeyCode::Esc => self.ui.modals.open(quit_modal()),
            _ => {}
        }
    }

    fn handle_drawer_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.drawer_selection = self.drawer_selection.saturating_sub(1),
            KeyCode::Down => {
                self.drawer_selection = (self.drawer_selection + 1).min(SIDEBAR_LINKS.len() - 1);
            }
            KeyCode::Enter => {
                let link = &SIDEBAR_LINKS[self.drawer_selection];
                self.ui.context_menus.close_all(DRAWER_INITIATOR);
                self.ui.router.jump_to_route(link.path);
                self.ui.drawer.close();
                self.correlation_selection = 0;
            }
            KeyCode::Char('m') => self.toggle_drawer(),
            KeyCode::Esc => self.ui.drawer.close(),
            KeyCode::Char('q') => self.ui.modals.open(quit_modal()),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.menu.select_previous(),
            KeyCode::Down => self.menu.select_next(),
            KeyCode::Enter => {
                self.close_menu();
                let Some(item) = self.menu.activate() else {
                    return;
                };
                let (name, command) = (item.name().to_string(), *item.value());
                self.activity
                    .push(ActivityEvent::debug(EventSource::Router, format!("Menu: {}", name)));
                if command == MenuCommand::ToggleDrawer {
                    self.sync_drawer_selection();
                }
            }
            KeyCode::Char('m') => self.toggle_drawer(),
            KeyCode::Esc | KeyCode::Char('o') => self.close_menu(),
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char('y') => {
                if let Some(modal) = self.ui.modals.close_top() {
                    self.confirm_modal(modal.purpose);
                }
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                self.ui.modals.close_top();
            }
            _ => {}
        }
    }

    fn confirm_modal(&mut self, purpose: ModalPurpose) {
        match purpose {
            ModalPurpose::Quit => self.should_quit = true,
            ModalPurpose::ClearHistory => match self.history.clear() {
                Ok(()) => {
                    self.correlation_selection = 0;
                    self.activity.push(ActivityEvent::success(
                        EventSource::Analytics,
                        "Correlation history cleared",
                    ));
                }
                Err(e) => self.activity.push(ActivityEvent::error(
                    EventSource::Storage,
                    format!("Failed to clear history: {}", e),
                )),
            },
            ModalPurpose::Info => {}
        }
    }

    fn toggle_drawer(&mut self) {
        // Interacting with the drawer closes menus opened elsewhere.
        self.ui.context_menus.close_all(DRAWER_INITIATOR);
        self.menu_handle = None;
        self.ui.drawer.toggle();
        self.sync_drawer_selection();
    }

    fn sync_drawer_selection(&mut self) {
        let route = self.current_route();
        self.drawer_selection = active_link(&route)
            .and_then(|active| SIDEBAR_LINKS.iter().position(|l| l.path == active.path))
            .unwrap_or(0);
    }

    fn open_menu(&mut self) {
        self.menu_open.set(true);
        let flag = self.menu_open.clone();
        let handle = self
            .ui
            .context_menus
            .open(HEADER_INITIATOR, Rc::new(move || flag.set(false)));
        self.menu_handle = Some(handle);
    }

    fn close_menu(&mut self) {
        if let Some(handle) = self.menu_handle.take() {
            self.ui.context_menus.remove(handle);
        }
        self.menu_open.set(false);
    }

    fn next_analytics_view(&mut self) {
        let current = self.analytics_view.get();
        let position = SegmentedItem::position_of(&self.analytics_items, &current).unwrap_or(0);
        let next = (position + 1) % self.analytics_items.len();
        self.analytics_items[next].click();
        self.correlation_selection = 0;
    }

    fn correlations_active(&self) -> bool {
        self.is_on_analytics() && self.analytics_view.get() == AnalyticsViewType::Correlations
    }

    fn selected_correlation(&self) -> Option<AnalyticsHistoryEntry> {
        if !self.correlations_active() {
            return None;
        }
        self.visible_correlations()
            .into_iter()
            .nth(self.correlation_selection)
    }

    fn open_selected_correlation(&mut self) {
        if let Some(entry) = self.selected_correlation() {
            let link = analytics_details_link(AnalyticsViewType::Correlations.slug(), &entry.key);
            self.ui.router.navigate(link);
        }
    }

    fn ignore_selected_correlation(&mut self) {
        let Some(entry) = self.selected_correlation() else {
            return;
        };
        let ignored = IgnoredCorrelation {
            key: entry.key.clone(),
            time_scope: SimpleTimeScopeType::Daily,
        };
        match self.ignores.ignore(ignored) {
            Ok(()) => self.activity.push(ActivityEvent::success(
                EventSource::Analytics,
                format!("Ignoring {}", entry.key),
            )),
            Err(e) => self.activity.push(ActivityEvent::error(
                EventSource::Storage,
                format!("Failed to ignore {}: {}", entry.key, e),
            )),
        }
        let remaining = self.visible_correlations().len();
        self.correlation_selection = self.correlation_selection.min(remaining.saturating_sub(1));
    }
}

fn build_menu(ui: &UiState, preferences: &Preferences) -> DropdownMenu<MenuCommand> {
    let drawer = ui.drawer.clone();
    let home_router = ui.router.clone();
    let analytics_router = ui.router.clone();
    let preferences = preferences.clone();

    DropdownMenu::new(vec![
        DropdownMenuItem::new("Toggle drawer", MenuCommand::ToggleDrawer)
            .with_icon(Icon::Bars)
            .with_action(Rc::new(move || drawer.toggle())),
        DropdownMenuItem::new("Home", MenuCommand::GoHome)
            .with_icon(Icon::Home)
            .with_action(Rc::new(move || home_router.jump_to_route(ROOT_ROUTE))),
        DropdownMenuItem::new("Analytics", MenuCommand::OpenAnalytics)
            .with_icon(Icon::LineChart)
            .with_action(Rc::new(move || analytics_router.jump_to_route(ANALYTICS_ROUTE))),
        DropdownMenuItem::new("Dark mode", MenuCommand::ToggleDarkMode)
            .with_icon(Icon::Moon)
            .separated()
            .with_action(Rc::new(move || preferences.toggle_dark_mode())),
    ])
}

fn quit_modal() -> Modal {
    Modal {
        title: "Quit".to_string(),
        message: "Leave Perfice?".to_string(),
        size: ModalSize::Small,
        footer: ModalFooterProps::new(ModalType::ConfirmCancel).with_confirm_text("Quit"),
        purpose: ModalPurpose::Quit,
    }
}

fn clear_history_modal() -> Modal {
    Modal {
        title: "Clear history".to_string(),
        message: "Forget every recorded correlation? Ignored correlations are kept.".to_string(),
        size: ModalSize::Medium,
        footer: ModalFooterProps::new(ModalType::DeleteConfirmCancel),
        purpose: ModalPurpose::ClearHistory,
    }
}

/// Runs the application UI in a loop, handling events and rendering the current screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(SPLASH_DURATION_SECS);

    loop {
        terminal.draw(|f| render(f, &app))?;
        if app.should_quit() {
            return Ok(());
        }

        // Handle splash-to-main transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Main;
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(INPUT_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }
                app.handle_key(key.code);
            }
        }
    }
}
