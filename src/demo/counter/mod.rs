//! Integer counter.
//!
//! The counter starts absent; the reducer treats that as zero.

mod action;
mod reducer;
mod state;

pub use action::CounterAction;
pub use reducer::CounterReducer;
pub use state::Counter;
