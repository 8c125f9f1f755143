//! Bounded activity log shared between the UI and its store subscribers.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    events: Rc<RefCell<VecDeque<Event>>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event to activity logs with size limit
    pub fn push(&self, event: Event) {
        let mut events = self.events.borrow_mut();
        if events.len() >= MAX_ACTIVITY_LOGS {
            events.pop_front();
        }
        events.push_back(event);
    }

    /// Displayable events, newest first.
    pub fn recent(&self, limit: usize) -> Vec<Event> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.should_display())
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}
