/*
 *
 * DES: An urn of red, blue and green balls, one to five of each.
 * ASK: Probability of drawing a ball of one colour
 *
 */

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Scenario;
use crate::generate::{formatter, helper};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Red,
    Blue,
    Green,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Urn {
    pub red: i32,
    pub blue: i32,
    pub green: i32,
}

impl Colour {
    pub const ALL: [Colour; 3] = [Colour::Red, Colour::Blue, Colour::Green];

    pub fn name(&self) -> &'static str {
        match self {
            Colour::Red => "red",
            Colour::Blue => "blue",
            Colour::Green => "green",
        }
    }
}

impl Urn {
    pub fn total(&self) -> i32 {
        self.red + self.blue + self.green
    }
    pub fn count(&self, colour: Colour) -> i32 {
        match colour {
            Colour::Red => self.red,
            Colour::Blue => self.blue,
            Colour::Green => self.green,
        }
    }
}

pub fn scenario(urn: Urn, colour: Colour) -> Scenario {
    let favorable = urn.count(colour);
    let total = urn.total();
    let name = colour.name();
    Scenario {
        prompt: format!(
            "An urn holds {} red balls, {} blue balls and {} green balls. What is the probability of drawing a {name} ball?",
            urn.red, urn.blue, urn.green
        ),
        formula: format!("P({}) = {}", formatter::text(name), formatter::format_i32_fraction_raw(favorable, total)),
        event: format!("drawing a {name} ball"),
        favorable,
        total,
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Scenario {
    let urn = Urn {
        red: helper::gen_range_i32(rng, 1, 5),
        blue: helper::gen_range_i32(rng, 1, 5),
        green: helper::gen_range_i32(rng, 1, 5),
    };
    let colour = *helper::choose(rng, &Colour::ALL);
    scenario(urn, colour)
}
