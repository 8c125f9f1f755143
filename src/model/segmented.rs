//! Segmented control items.

use super::Action;
use super::icon::Icon;
use std::fmt;

/// One segment of a segmented control.
#[derive(Clone)]
pub struct SegmentedItem<T> {
    pub name: String,
    pub value: Option<T>,
    pub prefix: Option<Icon>,
    pub suffix: Option<Icon>,
    pub on_click: Option<Action>,
}

impl<T> SegmentedItem<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            prefix: None,
            suffix: None,
            on_click: None,
        }
    }

    pub fn with_prefix(mut self, icon: Icon) -> Self {
        self.prefix = Some(icon);
        self
    }

    pub fn with_suffix(mut self, icon: Icon) -> Self {
        self.suffix = Some(icon);
        self
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    /// Runs the click handler, if any.
    pub fn click(&self) {
        if let Some(action) = &self.on_click {
            action();
        }
    }

    /// Text shown for the segment, including its icons.
    pub fn label(&self) -> String {
        let mut label = String::new();
        if let Some(prefix) = self.prefix {
            label.push_str(prefix.glyph());
            label.push(' ');
        }
        label.push_str(&self.name);
        if let Some(suffix) = self.suffix {
            label.push(' ');
            label.push_str(suffix.glyph());
        }
        label
    }
}

impl<T: PartialEq> SegmentedItem<T> {
    /// Index of the segment holding `value`.
    pub fn position_of(items: &[SegmentedItem<T>], value: &T) -> Option<usize> {
        items
            .iter()
            .position(|item| item.value.as_ref() == Some(value))
    }
}

impl<T: fmt::Debug> fmt::Debug for SegmentedItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentedItem")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}
