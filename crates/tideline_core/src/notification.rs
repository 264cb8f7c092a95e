//! Synchronous multi-subscriber change signal.
//!
//! # Responsibility
//! - Let external code observe attribute changes on one entity model.
//! - Dispatch to every listener, in subscription order, before `fire` returns.
//!
//! # Invariants
//! - `fire` carries no payload; listeners re-read the entity they observe.
//!   Entity models hold no borrow while firing, so that read always succeeds.
//! - Listeners may subscribe/unsubscribe while a dispatch is running; such
//!   changes take effect from the next `fire`.
//! - There is no cycle guard. A listener that causes the same notification to
//!   fire again recurses; callers own that hazard.

use std::cell::{Cell, RefCell};
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Handle returned by [`Notification::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn()>;

/// Payload-less event channel owned by every entity model.
#[derive(Default)]
pub struct Notification {
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_id: Cell<u64>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener; it runs on every subsequent `fire`.
    pub fn on(&self, listener: impl Fn() + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when the id is not registered.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Removes every listener.
    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }

    /// Invokes every registered listener once.
    pub fn fire(&self) {
        // Dispatch over a copy so listeners can touch this channel.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
}

impl Debug for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notification")
            .field("listeners", &self.len())
            .finish()
    }
}
