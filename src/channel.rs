//! Single-threaded publish/subscribe channels.
//!
//! Every subscriber owns an inbox that the publisher appends to; consumers drain
//! it from their own event handlers (typically once per frame). Delivery rules:
//!
//! - [`StateChannel`] keeps a current value and replays it into the inbox of each
//!   new subscriber at subscribe time. Later values arrive in publish order.
//! - [`EventChannel`] has no current value and no replay; late subscribers only
//!   see future events.
//!
//! [`Subscription::unsubscribe`] is idempotent and also runs on drop, so a view
//! that is torn down never keeps receiving.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

type Inbox<T> = Rc<RefCell<VecDeque<T>>>;

struct Registry<T> {
    next_id: u64,
    inboxes: Vec<(u64, Weak<RefCell<VecDeque<T>>>)>,
}

impl<T> Registry<T> {
    fn new() -> Self {
        Self {
            next_id: 0,
            inboxes: Vec::new(),
        }
    }

    fn contains(&self, id: u64) -> bool {
        self.inboxes.iter().any(|(i, _)| *i == id)
    }
}

/// Fan-out core shared by both channel kinds
struct Broadcast<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: Clone> Broadcast<T> {
    fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::new())),
        }
    }

    fn subscribe(&self, replay: Option<T>) -> Subscription<T> {
        let inbox: Inbox<T> = Rc::new(RefCell::new(VecDeque::new()));
        if let Some(value) = replay {
            inbox.borrow_mut().push_back(value);
        }

        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.inboxes.push((id, Rc::downgrade(&inbox)));

        Subscription {
            id,
            inbox,
            registry: Rc::downgrade(&self.registry),
            active: Cell::new(true),
        }
    }

    fn send(&self, value: &T) {
        let mut registry = self.registry.borrow_mut();
        // Inboxes whose subscription was dropped without unsubscribing are pruned here
        registry.inboxes.retain(|(_, weak)| match weak.upgrade() {
            Some(inbox) => {
                inbox.borrow_mut().push_back(value.clone());
                true
            }
            None => false,
        });
    }

    fn subscriber_count(&self) -> usize {
        self.registry
            .borrow()
            .inboxes
            .iter()
            .filter(|(_, weak)| weak.strong_count() > 0)
            .count()
    }

    fn close(&self) {
        self.registry.borrow_mut().inboxes.clear();
    }
}

/// Receiving end of a channel
pub struct Subscription<T> {
    id: u64,
    inbox: Inbox<T>,
    registry: Weak<RefCell<Registry<T>>>,
    active: Cell<bool>,
}

impl<T> Subscription<T> {
    /// Pop the oldest undelivered value
    pub fn try_recv(&self) -> Option<T> {
        self.inbox.borrow_mut().pop_front()
    }

    /// Take every undelivered value, oldest first
    pub fn drain(&self) -> Vec<T> {
        self.inbox.borrow_mut().drain(..).collect()
    }

    /// Drain the inbox and keep only the newest value
    pub fn latest(&self) -> Option<T> {
        self.inbox.borrow_mut().drain(..).last()
    }

    /// Number of values waiting in the inbox
    pub fn pending(&self) -> usize {
        self.inbox.borrow().len()
    }

    /// True while the channel still delivers to this subscription
    pub fn is_active(&self) -> bool {
        self.active.get()
            && self
                .registry
                .upgrade()
                .map(|registry| registry.borrow().contains(self.id))
                .unwrap_or(false)
    }

    /// Stop receiving. Safe to call any number of times.
    pub fn unsubscribe(&self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().inboxes.retain(|(id, _)| *id != self.id);
        }
        self.inbox.borrow_mut().clear();
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Channel with a current value, replayed on subscribe
pub struct StateChannel<T: Clone> {
    current: T,
    broadcast: Broadcast<T>,
}

impl<T: Clone> StateChannel<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            broadcast: Broadcast::new(),
        }
    }

    /// Current value snapshot
    pub fn value(&self) -> &T {
        &self.current
    }

    /// Subscribe; the current value is already in the returned inbox
    pub fn subscribe(&self) -> Subscription<T> {
        self.broadcast.subscribe(Some(self.current.clone()))
    }

    /// Replace the current value and deliver it to every subscriber
    pub fn publish(&mut self, value: T) {
        self.broadcast.send(&value);
        self.current = value;
    }

    pub fn subscriber_count(&self) -> usize {
        self.broadcast.subscriber_count()
    }

    /// Detach every subscriber; the channel keeps working for new ones
    pub fn close(&self) {
        self.broadcast.close();
    }
}

impl<T: Clone + PartialEq> StateChannel<T> {
    /// Publish only if `value` differs from the current one.
    /// Returns whether anything was delivered.
    pub fn publish_distinct(&mut self, value: T) -> bool {
        if self.current == value {
            return false;
        }
        self.publish(value);
        true
    }
}

/// Channel for pure events, no replay
pub struct EventChannel<T: Clone> {
    broadcast: Broadcast<T>,
}

impl<T: Clone> EventChannel<T> {
    pub fn new() -> Self {
        Self {
            broadcast: Broadcast::new(),
        }
    }

    pub fn subscribe(&self) -> Subscription<T> {
        self.broadcast.subscribe(None)
    }

    pub fn emit(&self, value: T) {
        self.broadcast.send(&value);
    }

    pub fn subscriber_count(&self) -> usize {
        self.broadcast.subscriber_count()
    }

    pub fn close(&self) {
        self.broadcast.close();
    }
}

impl<T: Clone> Default for EventChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}
