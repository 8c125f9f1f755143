//! Routing stack.

use crate::consts::cli_consts::ROOT_ROUTE;
use crate::store::{SubscriptionId, Writable};

/// The route on top of `stack`, or the root route when the stack is empty.
pub fn get_current_route(stack: &[String]) -> &str {
    stack.last().map(String::as_str).unwrap_or(ROOT_ROUTE)
}

/// Ordered history of visited routes. The last entry is the current route.
#[derive(Debug, Clone, Default)]
pub struct RouterState {
    stack: Writable<Vec<String>>,
}

impl RouterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_route(&self) -> String {
        self.stack.with(|stack| get_current_route(stack).to_string())
    }

    pub fn stack(&self) -> Vec<String> {
        self.stack.get()
    }

    pub fn depth(&self) -> usize {
        self.stack.with(Vec::len)
    }

    /// Pushes `route` onto the stack.
    pub fn navigate(&self, route: impl Into<String>) {
        let route = route.into();
        log::debug!("Navigating to {}", route);
        self.stack.update(|stack| {
            let mut next = stack.clone();
            next.push(route);
            next
        });
    }

    /// Pops the current route and returns it. Returns `None` at the root.
    pub fn back(&self) -> Option<String> {
        let popped = self.stack.with(|stack| stack.last().cloned())?;
        self.stack.update(|stack| stack[..stack.len() - 1].to_vec());
        Some(popped)
    }

    /// Drops the whole history and navigates to `route`.
    pub fn jump_to_route(&self, route: impl Into<String>) {
        self.stack.set(Vec::new());
        self.navigate(route);
    }

    pub fn subscribe(&self, subscriber: impl Fn(&Vec<String>) + 'static) -> SubscriptionId {
        self.stack.subscribe(subscriber)
    }
}
