//! Error types for dispatch.

use thiserror::Error;

/// Errors that can occur during [`Store::dispatch`](super::Store::dispatch).
///
/// In every case the state is left exactly as it was before the call and no
/// listener has been notified for the failed dispatch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError<E> {
    /// The reducer rejected the action.
    #[error("Reducer failed: {0}")]
    Reducer(#[source] E),

    /// The reducer tried to dispatch into its own store.
    #[error("Reducers may not dispatch actions")]
    DispatchInReducer,

    /// Re-entrant dispatch nested deeper than the configured limit.
    #[error("Dispatch depth limit of {limit} exceeded")]
    DepthExceeded { limit: u32 },

    /// Dispatch was issued while the state was borrowed through
    /// [`Store::with_state_ref`](super::Store::with_state_ref).
    #[error("State is borrowed by a reader")]
    StateBorrowed,
}

impl<E> DispatchError<E> {
    /// Returns the reducer's error, if that is what failed.
    pub fn into_reducer_error(self) -> Option<E> {
        match self {
            DispatchError::Reducer(err) => Some(err),
            _ => None,
        }
    }

    /// Short machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchError::Reducer(_) => "reducer",
            DispatchError::DispatchInReducer => "dispatch_in_reducer",
            DispatchError::DepthExceeded { .. } => "depth_exceeded",
            DispatchError::StateBorrowed => "state_borrowed",
        }
    }
}
