//! UI state for one session.
//!
//! Built per session (or per test) and handed to whatever needs it; there is no
//! global instance.

use super::context_menu::ContextMenuRegistry;
use super::drawer::DrawerState;
use super::modal::ModalStack;
use super::router::RouterState;

#[derive(Debug, Default)]
pub struct UiState {
    pub drawer: DrawerState,
    pub router: RouterState,
    pub modals: ModalStack,
    pub context_menus: ContextMenuRegistry,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}
