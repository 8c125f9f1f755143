//! Navigation drawer visibility.

use crate::store::{SubscriptionId, Writable};

/// Whether the navigation drawer is open. Starts closed.
#[derive(Debug, Clone, Default)]
pub struct DrawerState {
    open: Writable<bool>,
}

impl DrawerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Closes the drawer. Closing a closed drawer does nothing.
    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn toggle(&self) {
        self.open.update(|open| !open);
    }

    pub fn subscribe(&self, subscriber: impl Fn(&bool) + 'static) -> SubscriptionId {
        self.open.subscribe(subscriber)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.open.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_starts_closed() {
        assert!(!DrawerState::new().is_open());
    }

    #[test]
    fn test_toggle_twice_returns_to_closed() {
        let drawer = DrawerState::new();
        drawer.toggle();
        assert!(drawer.is_open());
        drawer.toggle();
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let drawer = DrawerState::new();
        drawer.close();
        assert!(!drawer.is_open());

        drawer.toggle();
        for _ in 0..3 {
            drawer.close();
            assert!(!drawer.is_open());
        }
    }

    #[test]
    fn test_subscribers_see_changes() {
        let drawer = DrawerState::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = drawer.subscribe(move |open| sink.borrow_mut().push(*open));

        drawer.toggle();
        drawer.close();
        drawer.close();
        assert_eq!(*seen.borrow(), vec![false, true, false]);

        assert!(drawer.unsubscribe(id));
        drawer.toggle();
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    // Clones are handles to the same flag.
    fn test_clones_share_flag() {
        let drawer = DrawerState::new();
        let handle = drawer.clone();
        handle.toggle();
        assert!(drawer.is_open());
    }
}
