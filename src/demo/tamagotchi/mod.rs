//! Tamagotchi-style virtual pet.
//!
//! A pet gets hungry and wants attention. Feeding lowers hunger, playing
//! raises happiness at the cost of some hunger. While asleep the pet
//! ignores food and play until it wakes up.

mod action;
mod reducer;
mod state;

pub use action::TamagotchiAction;
pub use reducer::{TamagotchiReducer, FEED_AMOUNT, PLAY_HAPPINESS, PLAY_HUNGER};
pub use state::{Tamagotchi, STAT_MAX};
