//! Reducer for the pet.

use std::convert::Infallible;

use crate::store::Reducer;

use super::action::TamagotchiAction;
use super::state::{Tamagotchi, STAT_MAX};

/// Hunger removed by one meal.
pub const FEED_AMOUNT: u8 = 20;
/// Happiness gained by one play session.
pub const PLAY_HAPPINESS: u8 = 10;
/// Hunger added by one play session.
pub const PLAY_HUNGER: u8 = 5;

/// Pure pet transitions. An absent state is the default pet.
pub struct TamagotchiReducer;

impl Reducer<Tamagotchi, TamagotchiAction> for TamagotchiReducer {
    type Error = Infallible;

    fn reduce(
        &self,
        state: Option<&Tamagotchi>,
        action: &TamagotchiAction,
    ) -> Result<Tamagotchi, Infallible> {
        let pet = state.copied().unwrap_or_default();

        Ok(match action {
            TamagotchiAction::Feed if pet.is_awake() => Tamagotchi {
                hunger: pet.hunger.saturating_sub(FEED_AMOUNT),
                ..pet
            },
            TamagotchiAction::Play if pet.is_awake() => Tamagotchi {
                happiness: pet.happiness.saturating_add(PLAY_HAPPINESS).min(STAT_MAX),
                hunger: pet.hunger.saturating_add(PLAY_HUNGER).min(STAT_MAX),
                ..pet
            },
            // Food and play are ignored while asleep
            TamagotchiAction::Feed | TamagotchiAction::Play => pet,
            TamagotchiAction::Sleep => Tamagotchi {
                sleeping: true,
                ..pet
            },
            TamagotchiAction::Wake => Tamagotchi {
                sleeping: false,
                ..pet
            },
            TamagotchiAction::Unrecognized(_) => pet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: Tamagotchi, action: TamagotchiAction) -> Tamagotchi {
        match TamagotchiReducer.reduce(Some(&state), &action) {
            Ok(next) => next,
            Err(never) => match never {},
        }
    }

    fn asleep() -> Tamagotchi {
        Tamagotchi {
            sleeping: true,
            ..Tamagotchi::default()
        }
    }

    #[test]
    fn feed_lowers_hunger() {
        let pet = reduce(Tamagotchi::default(), TamagotchiAction::Feed);
        assert_eq!(pet.hunger, 30);
        assert_eq!(pet.happiness, 50);
    }

    #[test]
    fn feed_stops_at_zero() {
        let pet = Tamagotchi {
            hunger: 5,
            ..Tamagotchi::default()
        };
        assert_eq!(reduce(pet, TamagotchiAction::Feed).hunger, 0);
    }

    #[test]
    fn play_trades_hunger_for_happiness() {
        let pet = reduce(Tamagotchi::default(), TamagotchiAction::Play);
        assert_eq!(pet.happiness, 60);
        assert_eq!(pet.hunger, 55);
    }

    #[test]
    fn play_caps_at_max() {
        let pet = Tamagotchi {
            hunger: 98,
            happiness: 95,
            sleeping: false,
        };
        let pet = reduce(pet, TamagotchiAction::Play);
        assert_eq!(pet.happiness, STAT_MAX);
        assert_eq!(pet.hunger, STAT_MAX);
    }

    #[test]
    fn sleeping_pet_ignores_feed_and_play() {
        assert_eq!(reduce(asleep(), TamagotchiAction::Feed), asleep());
        assert_eq!(reduce(asleep(), TamagotchiAction::Play), asleep());
    }

    #[test]
    fn wake_after_sleep() {
        let pet = reduce(asleep(), TamagotchiAction::Wake);
        assert!(pet.is_awake());
        assert_eq!(reduce(pet, TamagotchiAction::Feed).hunger, 30);
    }

    #[test]
    fn absent_state_is_default_pet() {
        let next = TamagotchiReducer.reduce(None, &TamagotchiAction::from("dance"));
        assert_eq!(next, Ok(Tamagotchi::default()));
    }
}
