//! Reducer for the counter.

use std::convert::Infallible;

use crate::store::Reducer;

use super::action::CounterAction;
use super::state::Counter;

pub struct CounterReducer;

impl Reducer<Counter, CounterAction> for CounterReducer {
    type Error = Infallible;

    fn reduce(&self, state: Option<&Counter>, action: &CounterAction) -> Result<Counter, Infallible> {
        let current = state.copied().unwrap_or_default();

        Ok(match action {
            CounterAction::Increment => Counter::new(current.value.saturating_add(1)),
            CounterAction::Decrement => Counter::new(current.value.saturating_sub(1)),
            CounterAction::Unrecognized(_) => current,
        })
    }
}
