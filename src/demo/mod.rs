//! Example domains built on [`Store`](crate::store::Store).
//!
//! Each feature module follows the same layout:
//! - `state.rs` - the state value
//! - `action.rs` - the closed set of actions, with an `Unrecognized` fallback
//! - `reducer.rs` - state transitions (pure, no side effects)

pub mod counter;
pub mod tamagotchi;
