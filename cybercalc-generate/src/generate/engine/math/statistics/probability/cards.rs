/*
 *
 * DES: One card drawn from a standard 52-card deck.
 * ASK: Probability of a given suit, or of a given colour
 *
 */

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Scenario;
use crate::generate::{formatter, helper};

pub const DECK_SIZE: i32 = 52;
pub const SUIT_SIZE: i32 = 13;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }
    pub fn singular(&self) -> &'static str {
        match self {
            Suit::Hearts => "heart",
            Suit::Diamonds => "diamond",
            Suit::Clubs => "club",
            Suit::Spades => "spade",
        }
    }
    pub fn colour(&self) -> &'static str {
        if self.is_red() { "red" } else { "black" }
    }
}

pub fn suit_scenario(suit: Suit) -> Scenario {
    Scenario {
        prompt: format!("What is the probability of drawing a card of {} from a standard deck?", suit.name()),
        formula: format!("P({}) = {}", formatter::text(suit.name()), formatter::format_i32_fraction_raw(SUIT_SIZE, DECK_SIZE)),
        event: format!("drawing a {}", suit.singular()),
        favorable: SUIT_SIZE,
        total: DECK_SIZE,
    }
}

pub fn colour_scenario(suit: Suit) -> Scenario {
    let colour = suit.colour();
    let favorable = 2 * SUIT_SIZE;
    Scenario {
        prompt: format!("What is the probability of drawing a {colour} card from a standard deck?"),
        formula: format!("P({}) = {}", formatter::text(colour), formatter::format_i32_fraction_raw(favorable, DECK_SIZE)),
        event: format!("drawing a {colour} card"),
        favorable,
        total: DECK_SIZE,
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Scenario {
    let suit = *helper::choose(rng, &Suit::ALL);
    if helper::coin_flip(rng) {
        suit_scenario(suit)
    } else {
        colour_scenario(suit)
    }
}
