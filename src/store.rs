//! Reactive store primitive.
//!
//! A [`Writable`] is a shared cell whose subscribers are told about every change.
//! Clones are handles to the same cell, so a component can hold one handle for
//! mutation while the renderer or a persistence hook holds another.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Identifies a subscription so it can be removed again.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

pub struct Writable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Writable")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Default + Clone + PartialEq + 'static> Default for Writable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Runs `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replaces the value, notifying subscribers if it changed.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
        }
        self.notify();
    }

    /// Replaces the value with `f(current)`.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.inner.borrow().value);
        self.set(next);
    }

    /// Registers `subscriber` and immediately calls it with the current value.
    pub fn subscribe(&self, subscriber: impl Fn(&T) + 'static) -> SubscriptionId {
        let subscriber: Subscriber<T> = Rc::new(subscriber);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = SubscriptionId(inner.next_id);
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::clone(&subscriber)));
            (id, inner.value.clone())
        };
        subscriber(&current);
        id
    }

    /// Removes a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
        inner.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    // The borrow is released before subscribers run so they can read or write the store.
    fn notify(&self) {
        let (value, subscribers) = {
            let inner = self.inner.borrow();
            let subscribers: Vec<Subscriber<T>> = inner
                .subscribers
                .iter()
                .map(|(_, s)| Rc::clone(s))
                .collect();
            (inner.value.clone(), subscribers)
        };
        for subscriber in subscribers {
            subscriber(&value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_subscribe_receives_current_value() {
        let store = Writable::new(5);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |v| sink.borrow_mut().push(*v));

        store.set(6);
        store.update(|v| v * 2);
        assert_eq!(*seen.borrow(), vec![5, 6, 12]);
    }

    #[test]
    fn test_unchanged_value_does_not_notify() {
        let store = Writable::new(false);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move |_| counter.set(counter.get() + 1));

        store.set(false);
        store.update(|v| *v);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store = Writable::new(String::from("a"));
        let handle = store.clone();
        handle.set("b".to_string());
        assert_eq!(store.get(), "b");
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = Writable::new(0);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(1);
        assert_eq!(calls.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    // Subscribers may read the store while being notified.
    fn test_subscriber_can_read_store() {
        let store = Writable::new(vec![1]);
        let reader = store.clone();
        let lengths = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&lengths);
        store.subscribe(move |_| sink.borrow_mut().push(reader.with(|v| v.len())));

        store.update(|v| {
            let mut next = v.clone();
            next.push(2);
            next
        });
        assert_eq!(*lengths.borrow(), vec![1, 2]);
    }
}
