//! Minimal unidirectional state container.
//!
//! A [`Store`] owns one state value, replaces it only with what its
//! [`Reducer`] returns for a dispatched action, and notifies subscribed
//! listeners after every dispatch.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use unistate::demo::counter::{Counter, CounterAction, CounterReducer};
//! use unistate::Store;
//!
//! let store = Store::new(CounterReducer);
//! let seen = Rc::new(Cell::new(0));
//! let sub = {
//!     let seen = Rc::clone(&seen);
//!     store.subscribe(move || seen.set(seen.get() + 1))
//! };
//!
//! store.dispatch(CounterAction::Increment).unwrap();
//! sub.unsubscribe();
//! store.dispatch(CounterAction::Increment).unwrap();
//!
//! assert_eq!(store.state(), Some(Counter::new(2)));
//! assert_eq!(seen.get(), 1);
//! ```

pub mod config;
pub mod demo;
pub mod logging;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use store::{DispatchError, Fallible, Reducer, Store, Subscription, SubscriptionId};
