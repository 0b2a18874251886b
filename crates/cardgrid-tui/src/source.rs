//! Key-event subscription.
//!
//! Navigation code never reads the terminal directly. It subscribes to a
//! [`KeyEventSource`], which is the real terminal pump in the binary and a
//! plain [`KeyBus`] in tests.

use crossterm::event::KeyEvent;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Listener invoked for every key event. Returns true if it consumed the event.
pub type KeyListener = Rc<dyn Fn(&KeyEvent) -> bool>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

pub trait KeyEventSource {
    fn subscribe(&self, listener: KeyListener) -> ListenerId;

    /// Remove a listener. Returns false if it was not registered.
    fn unsubscribe(&self, id: ListenerId) -> bool;
}

/// In-process key event dispatcher.
#[derive(Default)]
pub struct KeyBus {
    listeners: RefCell<Vec<(ListenerId, KeyListener)>>,
}

impl KeyBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a key to every listener in subscription order.
    ///
    /// Listeners removed while the event is being delivered are skipped.
    /// Returns true if any listener consumed the event.
    pub fn dispatch(&self, key: &KeyEvent) -> bool {
        let snapshot: Vec<(ListenerId, KeyListener)> = self
            .listeners
            .borrow()
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        let mut consumed = false;
        for (id, listener) in snapshot {
            if !self.is_subscribed(id) {
                continue;
            }
            consumed |= listener(key);
        }
        consumed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_subscribed(&self, id: ListenerId) -> bool {
        self.listeners.borrow().iter().any(|(known, _)| *known == id)
    }
}

impl KeyEventSource for KeyBus {
    fn subscribe(&self, listener: KeyListener) -> ListenerId {
        let id = ListenerId::new();
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(known, _)| *known != id);
        listeners.len() != before
    }
}
