//! The store: state, reducer and listeners behind one shared handle.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::{ConfigError, StoreConfig};

use super::error::DispatchError;
use super::listeners::{ListenerSet, SubscriptionId};
use super::reducer::Reducer;
use super::subscription::Subscription;

struct Shared<S, A, E> {
    config: StoreConfig,
    name: Rc<str>,
    reducer: Box<dyn Reducer<S, A, Error = E>>,
    state: RefCell<Option<S>>,
    listeners: Rc<ListenerSet>,
    /// Set while the reducer runs.
    reducing: Cell<bool>,
    /// Nesting level of the dispatch currently on the stack, 0 when idle.
    depth: Cell<u32>,
    dispatches: Cell<u64>,
}

/// Single-threaded state container.
///
/// `Store` is a cheap handle: clones share the same state and listeners.
/// Listeners that need to reach their own store should capture a
/// [`WeakStore`] to avoid a reference cycle.
pub struct Store<S, A, E = Infallible> {
    shared: Rc<Shared<S, A, E>>,
}

impl<S, A, E> Store<S, A, E> {
    /// Creates a store with no state. The reducer receives `None` on the
    /// first dispatch.
    pub fn new<R>(reducer: R) -> Self
    where
        R: Reducer<S, A, Error = E> + 'static,
    {
        Self::from_parts(StoreConfig::default(), Box::new(reducer), None)
    }

    /// Creates a store holding `initial`.
    pub fn with_state<R>(reducer: R, initial: S) -> Self
    where
        R: Reducer<S, A, Error = E> + 'static,
    {
        Self::from_parts(StoreConfig::default(), Box::new(reducer), Some(initial))
    }

    /// Starts a configured store. See [`StoreBuilder`].
    pub fn builder<R>(reducer: R) -> StoreBuilder<S, A, E>
    where
        R: Reducer<S, A, Error = E> + 'static,
    {
        StoreBuilder {
            reducer: Box::new(reducer),
            config: StoreConfig::default(),
            initial: None,
        }
    }

    fn from_parts(
        config: StoreConfig,
        reducer: Box<dyn Reducer<S, A, Error = E>>,
        initial: Option<S>,
    ) -> Self {
        let name: Rc<str> = Rc::from(config.name.as_str());
        tracing::debug!(
            store = %name,
            has_initial_state = initial.is_some(),
            max_dispatch_depth = ?config.max_dispatch_depth,
            "Store created"
        );

        Self {
            shared: Rc::new(Shared {
                config,
                listeners: Rc::new(ListenerSet::new(Rc::clone(&name))),
                name,
                reducer,
                state: RefCell::new(initial),
                reducing: Cell::new(false),
                depth: Cell::new(0),
                dispatches: Cell::new(0),
            }),
        }
    }

    /// Runs the reducer on the current state, stores its result, then
    /// notifies every listener registered when the notification pass starts.
    ///
    /// Listeners may dispatch again; the nested dispatch completes, including
    /// its own notification pass, before the outer pass moves on.
    ///
    /// A panicking reducer or listener unwinds through this call. The state
    /// is only replaced after the reducer returned, and the store stays
    /// usable afterwards.
    pub fn dispatch(&self, action: A) -> Result<(), DispatchError<E>> {
        let shared = &*self.shared;

        if shared.reducing.get() {
            tracing::warn!(store = %shared.name, "Dispatch from inside reducer rejected");
            return Err(DispatchError::DispatchInReducer);
        }

        let depth = shared.depth.get() + 1;
        if let Some(limit) = shared.config.max_dispatch_depth {
            if depth > limit {
                tracing::warn!(store = %shared.name, limit, "Dispatch depth limit exceeded");
                return Err(DispatchError::DepthExceeded { limit });
            }
        }

        if shared.state.try_borrow_mut().is_err() {
            tracing::warn!(store = %shared.name, "Dispatch while state is borrowed rejected");
            return Err(DispatchError::StateBorrowed);
        }

        shared.depth.set(depth);
        let _depth = scopeguard::guard((), |_| shared.depth.set(depth - 1));

        let reduced = {
            shared.reducing.set(true);
            let _reducing = scopeguard::guard((), |_| shared.reducing.set(false));
            let state = shared.state.borrow();
            shared.reducer.reduce(state.as_ref(), &action)
        };

        let next = match reduced {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(store = %shared.name, depth, "Reducer returned an error");
                return Err(DispatchError::Reducer(err));
            }
        };

        *shared.state.borrow_mut() = Some(next);
        shared.dispatches.set(shared.dispatches.get() + 1);

        let listeners = shared.listeners.notify();
        tracing::debug!(store = %shared.name, depth, listeners, "Dispatched");

        Ok(())
    }

    /// Registers `listener` to run after every dispatch, after those already
    /// registered. Subscribing the same closure twice registers it twice.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let listeners = &self.shared.listeners;
        let id = listeners.insert(Box::new(listener));
        Subscription::new(id, listeners)
    }

    /// Removes the registration `id`. Same as [`Subscription::unsubscribe`].
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.shared.listeners.remove(id)
    }

    /// Borrows the current state without cloning it.
    ///
    /// The store rejects dispatches issued from inside `f`.
    pub fn with_state_ref<T>(&self, f: impl FnOnce(Option<&S>) -> T) -> T {
        let state = self.shared.state.borrow();
        f(state.as_ref())
    }

    pub fn listener_count(&self) -> usize {
        self.shared.listeners.len()
    }

    /// Number of dispatches that replaced the state.
    pub fn dispatch_count(&self) -> u64 {
        self.shared.dispatches.get()
    }

    /// Whether a dispatch is on the stack, i.e. called from a listener or reducer.
    pub fn is_dispatching(&self) -> bool {
        self.shared.depth.get() > 0
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    pub fn config(&self) -> &StoreConfig {
        &self.shared.config
    }

    pub fn downgrade(&self) -> WeakStore<S, A, E> {
        WeakStore {
            shared: Rc::downgrade(&self.shared),
        }
    }
}

impl<S: Clone, A, E> Store<S, A, E> {
    /// Returns a copy of the current state, `None` if nothing was dispatched
    /// yet and no initial state was given.
    pub fn state(&self) -> Option<S> {
        self.shared.state.borrow().clone()
    }
}

impl<S, A, E> Clone for Store<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<S, A, E> fmt::Debug for Store<S, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.shared.name)
            .field("listeners", &self.listener_count())
            .field("dispatches", &self.dispatch_count())
            .field("depth", &self.shared.depth.get())
            .finish_non_exhaustive()
    }
}

/// Non-owning handle to a [`Store`].
pub struct WeakStore<S, A, E = Infallible> {
    shared: Weak<Shared<S, A, E>>,
}

impl<S, A, E> WeakStore<S, A, E> {
    /// Returns the store if any strong handle is still alive.
    pub fn upgrade(&self) -> Option<Store<S, A, E>> {
        self.shared.upgrade().map(|shared| Store { shared })
    }
}

impl<S, A, E> Clone for WeakStore<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<S, A, E> fmt::Debug for WeakStore<S, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakStore")
            .field("alive", &(self.shared.strong_count() > 0))
            .finish()
    }
}

/// Configured construction of a [`Store`].
///
/// ```
/// use unistate::store::Store;
///
/// fn count(state: Option<&u32>, _: &()) -> u32 {
///     state.copied().unwrap_or(0) + 1
/// }
///
/// let store = Store::builder(count)
///     .name("clicks")
///     .max_dispatch_depth(4)
///     .initial_state(10)
///     .build()
///     .unwrap();
/// store.dispatch(()).unwrap();
/// assert_eq!(store.state(), Some(11));
/// ```
pub struct StoreBuilder<S, A, E = Infallible> {
    reducer: Box<dyn Reducer<S, A, Error = E>>,
    config: StoreConfig,
    initial: Option<S>,
}

impl<S, A, E> StoreBuilder<S, A, E> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    pub fn max_dispatch_depth(mut self, limit: u32) -> Self {
        self.config.max_dispatch_depth = Some(limit);
        self
    }

    /// Replaces name and depth limit with `config`.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn initial_state(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Validates the configuration and creates the store.
    pub fn build(self) -> Result<Store<S, A, E>, ConfigError> {
        self.config.validate()?;
        Ok(Store::from_parts(self.config, self.reducer, self.initial))
    }
}
