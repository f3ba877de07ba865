//! Actions for the counter.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    /// Add one.
    Increment,

    /// Subtract one.
    Decrement,

    /// Anything else. The reducer leaves the state unchanged.
    Unrecognized(String),
}

impl FromStr for CounterAction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for CounterAction {
    fn from(s: &str) -> Self {
        match s {
            "inc" | "increment" => CounterAction::Increment,
            "dec" | "decrement" => CounterAction::Decrement,
            other => CounterAction::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for CounterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterAction::Increment => f.write_str("inc"),
            CounterAction::Decrement => f.write_str("dec"),
            CounterAction::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!(CounterAction::from("inc"), CounterAction::Increment);
        assert_eq!(CounterAction::from("increment"), CounterAction::Increment);
        assert_eq!(CounterAction::from("dec"), CounterAction::Decrement);
    }

    #[test]
    fn unknown_words_are_kept_verbatim() {
        let action: CounterAction = "reset".parse().unwrap();
        assert_eq!(action, CounterAction::Unrecognized("reset".to_string()));
        assert_eq!(action.to_string(), "reset");
    }
}
