//! Reducer trait for the state container.

use std::convert::Infallible;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
///
/// `state` is `None` until the first successful dispatch of a store that
/// was built without an initial state. Supplying the default is the
/// reducer's job, the store never invents a state of its own.
pub trait Reducer<S, A> {
    /// Error returned by a fallible reducer. `Infallible` for plain closures.
    type Error;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(&self, state: Option<&S>, action: &A) -> Result<S, Self::Error>;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(Option<&S>, &A) -> S,
{
    type Error = Infallible;

    fn reduce(&self, state: Option<&S>, action: &A) -> Result<S, Self::Error> {
        Ok(self(state, action))
    }
}

/// Adapter turning a `Result`-returning closure into a [`Reducer`].
///
/// ```
/// use unistate::store::{Fallible, Store};
///
/// let store = Store::new(Fallible(|state: Option<&u8>, by: &u8| {
///     state.copied().unwrap_or(0).checked_add(*by).ok_or("overflow")
/// }));
/// assert!(store.dispatch(200).is_ok());
/// assert!(store.dispatch(100).is_err());
/// assert_eq!(store.state(), Some(200));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<S, A, E, F> Reducer<S, A> for Fallible<F>
where
    F: Fn(Option<&S>, &A) -> Result<S, E>,
{
    type Error = E;

    fn reduce(&self, state: Option<&S>, action: &A) -> Result<S, Self::Error> {
        (self.0)(state, action)
    }
}
