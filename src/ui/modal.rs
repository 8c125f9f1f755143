//! Modal dialogs and the stack of currently open ones.

use strum::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum ModalType {
    ConfirmCancel,
    Cancel,
    DeleteConfirmCancel,
    None,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ModalSize {
    #[default]
    Small,
    Medium,
}

/// Returns true if the modal should render the confirm button
pub fn should_modal_render_confirm(modal_type: ModalType) -> bool {
    modal_type != ModalType::Cancel
}

/// Returns true if the modal should render the delete button
pub fn should_modal_render_delete(modal_type: ModalType) -> bool {
    modal_type == ModalType::DeleteConfirmCancel
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalFooterProps {
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub delete_text: Option<String>,
    pub modal_type: ModalType,
}

impl ModalFooterProps {
    pub fn new(modal_type: ModalType) -> Self {
        Self {
            confirm_text: None,
            cancel_text: None,
            delete_text: None,
            modal_type,
        }
    }

    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    /// Button labels in display order, with defaults for unset texts.
    pub fn buttons(&self) -> Vec<&str> {
        let mut buttons = Vec::new();
        if should_modal_render_delete(self.modal_type) {
            buttons.push(self.delete_text.as_deref().unwrap_or("Delete"));
        }
        if self.modal_type == ModalType::None {
            return buttons;
        }
        buttons.push(self.cancel_text.as_deref().unwrap_or("Cancel"));
        if should_modal_render_confirm(self.modal_type) {
            buttons.push(self.confirm_text.as_deref().unwrap_or("Confirm"));
        }
        buttons
    }
}

/// What an open modal is asking for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ModalPurpose {
    Quit,
    ClearHistory,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub message: String,
    pub size: ModalSize,
    pub footer: ModalFooterProps,
    pub purpose: ModalPurpose,
}

/// Open modals, most recent last.
#[derive(Debug, Clone, Default)]
pub struct ModalStack {
    open: Vec<Modal>,
}

impl ModalStack {
    pub fn open(&mut self, modal: Modal) {
        self.open.push(modal);
    }

    /// Closes the topmost modal and returns it.
    pub fn close_top(&mut self) -> Option<Modal> {
        self.open.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.open.last()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rules() {
        assert!(should_modal_render_confirm(ModalType::ConfirmCancel));
        assert!(!should_modal_render_confirm(ModalType::Cancel));
        assert!(should_modal_render_confirm(ModalType::DeleteConfirmCancel));
        assert!(should_modal_render_confirm(ModalType::None));

        assert!(should_modal_render_delete(ModalType::DeleteConfirmCancel));
        assert!(!should_modal_render_delete(ModalType::ConfirmCancel));
        assert!(!should_modal_render_delete(ModalType::Cancel));
        assert!(!should_modal_render_delete(ModalType::None));
    }

    #[test]
    fn test_footer_buttons() {
        assert_eq!(
            ModalFooterProps::new(ModalType::ConfirmCancel)
                .with_confirm_text("Quit")
                .buttons(),
            vec!["Cancel", "Quit"]
        );
        assert_eq!(ModalFooterProps::new(ModalType::Cancel).buttons(), vec!["Cancel"]);
        assert_eq!(
            ModalFooterProps::new(ModalType::DeleteConfirmCancel).buttons(),
            vec!["Delete", "Cancel", "Confirm"]
        );
        assert!(ModalFooterProps::new(ModalType::None).buttons().is_empty());
    }

    #[test]
    fn test_stack_order() {
        let modal = |title: &str| Modal {
            title: title.to_string(),
            message: String::new(),
            size: ModalSize::default(),
            footer: ModalFooterProps::new(ModalType::Cancel),
            purpose: ModalPurpose::Info,
        };
        let mut stack = ModalStack::default();
        stack.open(modal("first"));
        stack.open(modal("second"));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top().unwrap().title, "second");
        assert_eq!(stack.close_top().unwrap().title, "second");
        assert_eq!(stack.close_top().unwrap().title, "first");
        assert!(stack.close_top().is_none());
        assert!(stack.is_empty());
    }
}
