//! Subscription handles returned by [`Store::subscribe`](super::Store::subscribe).

use std::fmt;
use std::rc::{Rc, Weak};

use super::listeners::{ListenerSet, SubscriptionId};

/// Handle to one listener registration.
///
/// Dropping the handle does not unsubscribe; the listener stays registered
/// for as long as the store lives. Call [`Subscription::unsubscribe`] to
/// remove it.
pub struct Subscription {
    id: SubscriptionId,
    store: Rc<str>,
    listeners: Weak<ListenerSet>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, listeners: &Rc<ListenerSet>) -> Self {
        Self {
            id,
            store: Rc::clone(listeners.store()),
            listeners: Rc::downgrade(listeners),
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Removes this registration from its store.
    ///
    /// Returns `true` the first time. Later calls, and calls after the store
    /// has been dropped, return `false` and do nothing.
    pub fn unsubscribe(&self) -> bool {
        self.listeners
            .upgrade()
            .is_some_and(|listeners| listeners.remove(self.id))
    }

    /// Whether the registration is still present in a live store.
    pub fn is_active(&self) -> bool {
        self.listeners
            .upgrade()
            .is_some_and(|listeners| listeners.contains(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("store", &self.store)
            .field("active", &self.is_active())
            .finish()
    }
}
