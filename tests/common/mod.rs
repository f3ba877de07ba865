//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::cell::RefCell;
use std::rc::Rc;

use unistate::demo::counter::{Counter, CounterAction, CounterReducer};
use unistate::Store;

/// Ordered record of listener calls.
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Listener that appends `name` to `log` each time it runs.
pub fn recorder(log: &CallLog, name: &str) -> impl Fn() + 'static {
    let log = Rc::clone(log);
    let name = name.to_string();
    move || log.borrow_mut().push(name.clone())
}

pub fn entries(log: &CallLog) -> Vec<String> {
    log.borrow().clone()
}

/// Sums integer actions; absent state counts as 0.
pub fn sum(state: Option<&i64>, action: &i64) -> i64 {
    state.copied().unwrap_or(0) + action
}

pub fn counter_store() -> Store<Counter, CounterAction> {
    Store::new(CounterReducer)
}
