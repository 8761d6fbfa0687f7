use rand::Rng;
use common_types::Generate::Difficulty;

pub mod checker;
pub mod engine;
pub mod evaluator;
pub mod formatter;
pub mod helper;
pub mod options;
pub mod paper;
pub mod question;
pub mod session;

use engine::math;
use question::{ChallengeQuestion, Question};

/// Picks a generator by game level: 1 arithmetic, 2 probability, 3 derivatives. Anything else
/// falls back to arithmetic.
pub fn generate_question<R: Rng + ?Sized>(rng: &mut R, level: i32) -> Question {
    match level {
        1 => math::arithmetic::generate(rng),
        2 => math::statistics::generate(rng),
        3 => math::pure::generate(rng),
        _ => {
            tracing::debug!("No generator for level {level}, using arithmetic");
            math::arithmetic::generate(rng)
        },
    }
}

pub fn generate_for_difficulty<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Question {
    match difficulty {
        Difficulty::Easy => math::arithmetic::generate(rng),
        Difficulty::Medium => math::statistics::generate(rng),
        Difficulty::Hard => math::pure::generate(rng),
    }
}

pub fn generate_challenge_question<R: Rng + ?Sized>(rng: &mut R, level: i32) -> ChallengeQuestion {
    let level = level.clamp(1, engine::CHALLENGE_LEVELS);
    ChallengeQuestion {
        level,
        points: engine::points_for_challenge_level(level),
        question: generate_for_difficulty(rng, Difficulty::from_level(level)),
    }
}
