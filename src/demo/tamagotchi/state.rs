//! State for the pet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound for `hunger` and `happiness`.
pub const STAT_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tamagotchi {
    /// 0 is full, `STAT_MAX` is starving.
    pub hunger: u8,
    pub happiness: u8,
    pub sleeping: bool,
}

impl Default for Tamagotchi {
    fn default() -> Self {
        Self {
            hunger: 50,
            happiness: 50,
            sleeping: false,
        }
    }
}

impl Tamagotchi {
    pub fn is_awake(&self) -> bool {
        !self.sleeping
    }
}

impl fmt::Display for Tamagotchi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hunger={} happiness={} sleeping={}",
            self.hunger, self.happiness, self.sleeping
        )
    }
}
