//! Registry of open context menus.
//!
//! Every open menu registers a close callback together with the id of the element
//! that opened it. Interacting with another element closes all other menus.

use crate::model::Action;

/// Identifies the element a context menu was opened from.
pub type InitiatorId = &'static str;

/// Identifies a registration so it can be removed without closing it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MenuHandle(u64);

struct OpenedContextMenu {
    handle: MenuHandle,
    initiator: InitiatorId,
    close: Action,
}

#[derive(Default)]
pub struct ContextMenuRegistry {
    opened: Vec<OpenedContextMenu>,
    next_handle: u64,
}

impl ContextMenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an open menu and the callback that closes it.
    pub fn open(&mut self, initiator: InitiatorId, close: Action) -> MenuHandle {
        let handle = MenuHandle(self.next_handle);
        self.next_handle += 1;
        self.opened.push(OpenedContextMenu {
            handle,
            initiator,
            close,
        });
        handle
    }

    /// Forgets a menu without calling its close callback.
    pub fn remove(&mut self, handle: MenuHandle) {
        self.opened.retain(|menu| menu.handle != handle);
    }

    /// Closes every menu not opened by `initiator`, then forgets all menus.
    pub fn close_all(&mut self, initiator: InitiatorId) {
        let opened = std::mem::take(&mut self.opened);
        for menu in opened.iter().filter(|menu| menu.initiator != initiator) {
            (menu.close)();
        }
    }

    pub fn open_count(&self) -> usize {
        self.opened.len()
    }
}

impl std::fmt::Debug for ContextMenuRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextMenuRegistry")
            .field("open", &self.opened.len())
            .finish()
    }
}
