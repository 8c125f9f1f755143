//! Dropdown menu items.

use super::Action;
use super::icon::Icon;
use std::fmt;

/// Height of a dropdown button in the web client, in pixels.
pub const DROPDOWN_BUTTON_HEIGHT: u16 = 40;

/// What a dropdown entry shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownMenuItemDetails<T> {
    pub name: String,
    pub value: T,
    pub icon: Option<Icon>,
    /// Draw a separator above this entry.
    pub separated: bool,
}

/// A dropdown entry with the action it triggers.
#[derive(Clone)]
pub struct DropdownMenuItem<T> {
    pub details: DropdownMenuItemDetails<T>,
    pub action: Option<Action>,
}

impl<T> DropdownMenuItem<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            details: DropdownMenuItemDetails {
                name: name.into(),
                value,
                icon: None,
                separated: false,
            },
            action: None,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.details.icon = Some(icon);
        self
    }

    pub fn separated(mut self) -> Self {
        self.details.separated = true;
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn value(&self) -> &T {
        &self.details.value
    }

    /// Runs the bound action. Items without one do nothing.
    pub fn invoke(&self) {
        if let Some(action) = &self.action {
            action();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DropdownMenuItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownMenuItem")
            .field("details", &self.details)
            .field("action", &self.action.is_some())
            .finish()
    }
}

/// A list of dropdown items with a highlighted entry.
#[derive(Debug, Clone)]
pub struct DropdownMenu<T> {
    items: Vec<DropdownMenuItem<T>>,
    selected: usize,
}

impl<T> DropdownMenu<T> {
    pub fn new(items: Vec<DropdownMenuItem<T>>) -> Self {
        Self { items, selected: 0 }
    }

    pub fn items(&self) -> &[DropdownMenuItem<T>] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }

    /// Invokes the highlighted item and returns it.
    pub fn activate(&self) -> Option<&DropdownMenuItem<T>> {
        let item = self.items.get(self.selected)?;
        item.invoke();
        Some(item)
    }
}
