//! Actions for the pet.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TamagotchiAction {
    Feed,
    Play,
    Sleep,
    Wake,

    /// Anything else. The reducer leaves the state unchanged.
    Unrecognized(String),
}

impl FromStr for TamagotchiAction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for TamagotchiAction {
    fn from(s: &str) -> Self {
        match s {
            "feed" => TamagotchiAction::Feed,
            "play" => TamagotchiAction::Play,
            "sleep" => TamagotchiAction::Sleep,
            "wake" => TamagotchiAction::Wake,
            other => TamagotchiAction::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for TamagotchiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TamagotchiAction::Feed => f.write_str("feed"),
            TamagotchiAction::Play => f.write_str("play"),
            TamagotchiAction::Sleep => f.write_str("sleep"),
            TamagotchiAction::Wake => f.write_str("wake"),
            TamagotchiAction::Unrecognized(raw) => f.write_str(raw),
        }
    }
}
