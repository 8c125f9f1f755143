//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::storage::LocalStorage;
use crate::ui;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::rc::Rc;
use std::{error::Error, io};

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored even when the UI loop fails.
///
/// # Arguments
/// * `session` - Session data from setup
/// * `with_background` - Paint the theme background, overriding the config when set
pub fn run_tui_mode(session: SessionData, with_background: bool) -> Result<(), Box<dyn Error>> {
    print_session_starting("terminal UI", session.storage.path());

    let mut config = session.config;
    config.with_background_color |= with_background;
    let storage: Rc<dyn LocalStorage> = session.storage;
    let app = ui::App::new(storage, &config);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = ui::run(&mut terminal, app);

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    print_session_exit_success();
    Ok(())
}
