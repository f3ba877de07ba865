//! Unidirectional state container.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Listeners
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: the whole application state, owned by the [`Store`]
//! - **Action**: caller-defined value, never inspected by the store
//! - **Reducer**: pure function `(state, action) -> state`, the only way
//!   state changes
//! - **Listeners**: zero-argument callbacks run after every dispatch, in
//!   subscription order
//!
//! Everything is synchronous and single-threaded. Listeners may subscribe,
//! unsubscribe and dispatch while a notification pass is running; see
//! [`Store::dispatch`] for the exact ordering.

mod container;
mod error;
mod listeners;
mod reducer;
mod subscription;

pub use container::{Store, StoreBuilder, WeakStore};
pub use error::DispatchError;
pub use listeners::SubscriptionId;
pub use reducer::{Fallible, Reducer};
pub use subscription::Subscription;
