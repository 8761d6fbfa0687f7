/*
 *
 * DES: Fair six-sided dice, one to three of them.
 * ASK: Probability that the dice show (or sum to) a target value
 *
 */

use rand::Rng;

use super::Scenario;
use crate::generate::{formatter, helper};

pub const FACES: i32 = 6;
pub const MAX_DICE: i32 = 3;

/// Number of the `FACES^dice` equally likely outcomes whose faces sum to `target`.
pub fn favorable_outcomes(dice: i32, target: i32) -> i32 {
    let dice = dice.clamp(1, MAX_DICE);
    let mut ways = vec![0_i32; (dice * FACES + 1) as usize];
    ways[0] = 1;
    for _ in 0..dice {
        let mut next = vec![0_i32; ways.len()];
        for (sum, count) in ways.iter().enumerate().filter(|(_, count)| **count > 0) {
            for face in 1..=FACES as usize {
                if sum + face < next.len() {
                    next[sum + face] += count;
                }
            }
        }
        ways = next;
    }
    usize::try_from(target)
        .ok()
        .and_then(|target| ways.get(target).copied())
        .unwrap_or(0)
}

pub fn total_outcomes(dice: i32) -> i32 {
    FACES.pow(dice.clamp(1, MAX_DICE) as u32)
}

pub fn scenario(dice: i32, target: i32) -> Scenario {
    let dice = dice.clamp(1, MAX_DICE);
    let favorable = favorable_outcomes(dice, target);
    let total = total_outcomes(dice);
    let (prompt, event) = match dice {
        1 => (
            format!("What is the probability of rolling a {target} with one die?"),
            format!("rolling a {target} with one die"),
        ),
        2 => (
            format!("What is the probability of rolling a sum of {target} with two dice?"),
            format!("rolling a sum of {target} with two dice"),
        ),
        _ => (
            format!("What is the probability of rolling a sum of {target} with three dice?"),
            format!("rolling a sum of {target} with three dice"),
        ),
    };
    Scenario {
        prompt,
        formula: format!("P(X = {target}) = {}", formatter::format_i32_fraction_raw(favorable, total)),
        event,
        favorable,
        total,
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Scenario {
    let dice = helper::gen_range_i32(rng, 1, MAX_DICE);
    let target = helper::gen_range_i32(rng, dice, dice * FACES);
    scenario(dice, target)
}
