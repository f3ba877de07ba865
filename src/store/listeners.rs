//! Ordered listener registry.
//!
//! Every notification pass works on a snapshot of the registrations taken
//! when the pass starts, so listeners added during the pass wait for the
//! next dispatch. Removal flips the registration's `active` flag, which the
//! pass checks right before each call: a listener removed before its turn
//! is skipped, one that already ran is unaffected.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ids are drawn process-wide so an id from one store never matches a
/// registration in another.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies one registration. Unique across all stores, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Registration {
    id: SubscriptionId,
    active: Cell<bool>,
    callback: Box<dyn Fn()>,
}

pub(crate) struct ListenerSet {
    store: Rc<str>,
    entries: RefCell<Vec<Rc<Registration>>>,
}

impl ListenerSet {
    pub(crate) fn new(store: Rc<str>) -> Self {
        Self {
            store,
            entries: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn store(&self) -> &Rc<str> {
        &self.store
    }

    pub(crate) fn insert(&self, callback: Box<dyn Fn()>) -> SubscriptionId {
        let id = SubscriptionId(NEXT_ID.fetch_add(1, Ordering::Relaxed));

        self.entries.borrow_mut().push(Rc::new(Registration {
            id,
            active: Cell::new(true),
            callback,
        }));
        tracing::debug!(store = %self.store, id = %id, "Listener subscribed");
        id
    }

    /// Removes exactly one registration. Returns `false` if it was already gone.
    pub(crate) fn remove(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let Some(pos) = entries.iter().position(|r| r.id == id) else {
            return false;
        };
        let removed = entries.remove(pos);
        removed.active.set(false);
        tracing::debug!(store = %self.store, id = %id, "Listener unsubscribed");
        true
    }

    pub(crate) fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.borrow().iter().any(|r| r.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Runs one notification pass and returns how many listeners were called.
    ///
    /// No borrow of the registry is held while a callback runs, so callbacks
    /// may subscribe, unsubscribe or dispatch freely.
    pub(crate) fn notify(&self) -> usize {
        let snapshot: Vec<Rc<Registration>> = self.entries.borrow().clone();

        let mut called = 0;
        for registration in snapshot {
            if !registration.active.get() {
                continue;
            }
            (registration.callback)();
            called += 1;
        }
        called
    }
}
