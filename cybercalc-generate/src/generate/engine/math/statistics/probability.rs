use rand::Rng;
use serde::{Deserialize, Serialize};
use common_types::Generate::Difficulty;

use crate::generate::{
    checker,
    formatter,
    helper,
    options::{self, OptionMatch, MAX_DISTRACTOR_ATTEMPTS},
    question::Question,
};

pub mod cards;
pub mod dice;
pub mod urns;

const MAX_OFFSET: f64 = 0.15;
const MIN_SEPARATION: f64 = 0.01;
const FALLBACK_STEP: f64 = 0.05;

/// A counting problem: `favorable` out of `total` equally likely outcomes.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub prompt: String,
    pub formula: String,
    pub event: String,
    pub favorable: i32,
    pub total: i32,
}

impl Scenario {
    pub fn probability(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.favorable as f64 / self.total as f64
    }

    pub fn explanation(&self) -> String {
        format!(
            "The probability of {} is {}/{} = {}",
            self.event,
            self.favorable,
            self.total,
            formatter::format_probability_raw(self.probability())
        )
    }
}

fn generators<R: Rng + ?Sized>() -> [fn(&mut R) -> Scenario; 3] {
    [dice::generate::<R>, cards::generate::<R>, urns::generate::<R>]
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let generator = *helper::choose(rng, &generators::<R>());
    let scenario = generator(rng);
    question_from_scenario(rng, scenario)
}

// +0.05, -0.05, +0.10, -0.10, ... around the answer, skipping values the clamp pulls too close
fn fallback_distractor(probability: f64, step: usize) -> String {
    let value = (1_usize..)
        .map(|n| {
            let magnitude = FALLBACK_STEP * ((n + 1) / 2) as f64;
            let offset = if n % 2 == 1 { magnitude } else { -magnitude };
            (probability + offset).clamp(0.0, 1.0)
        })
        .filter(|candidate| (candidate - probability).abs() > MIN_SEPARATION)
        .nth(step.saturating_sub(1))
        .unwrap_or(probability);
    formatter::format_probability_raw(value)
}

pub fn question_from_scenario<R: Rng + ?Sized>(rng: &mut R, scenario: Scenario) -> Question {
    let matcher = OptionMatch::probability();
    let probability = scenario.probability();
    if !checker::is_valid_frac_i32(scenario.favorable, scenario.total) {
        tracing::error!("Scenario {:?} is not a valid probability", scenario);
    }
    let correct = formatter::format_probability_raw(probability);

    let incorrect = {
        let candidates = (0..MAX_DISTRACTOR_ATTEMPTS)
            .map(|_| (probability + helper::gen_range_f64(rng, -MAX_OFFSET, MAX_OFFSET)).clamp(0.0, 1.0))
            .filter(|candidate| (candidate - probability).abs() > MIN_SEPARATION)
            .map(formatter::format_probability_raw);
        options::collect_distractors(&correct, candidates, matcher, |step| fallback_distractor(probability, step))
    };

    let (options, correct_option_id) = options::shuffle_options(rng, &correct, incorrect, matcher);
    let question = Question {
        id: helper::question_id(rng),
        explanation: scenario.explanation(),
        prompt: scenario.prompt,
        formula: scenario.formula,
        options,
        correct_option_id,
        difficulty: Difficulty::Medium,
    };
    checker::verify(&question, &correct, matcher);
    tracing::debug!("Generated probability question {}", question.id);
    question
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn single_die_rolling_a_four() {
        let mut rng = StdRng::seed_from_u64(4);
        let question = question_from_scenario(&mut rng, dice::scenario(1, 4));
        assert_eq!(question.formula, r#"P(X = 4) = \frac{1}{6}"#);
        assert_eq!(question.difficulty, Difficulty::Medium);
        assert_eq!(question.correct_option().unwrap().formula, "0.1667");
        assert_eq!(question.options.iter().filter(|o| o.formula == "0.1667").count(), 1);
    }

    #[test]
    fn distractors_are_near_but_separated() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..300 {
            let question = generate(&mut rng);
            let answer: f64 = question.correct_option().unwrap().formula.parse().unwrap();
            for option in question.options.iter().filter(|o| o.id != question.correct_option_id) {
                let value: f64 = option.formula.parse().unwrap();
                assert!(checker::is_valid_probability(value));
                assert!((value - answer).abs() > MIN_SEPARATION - 1e-4);
                assert!((value - answer).abs() <= MAX_OFFSET + 1e-4);
            }
            assert!(checker::is_well_formed(&question, &formatter::format_probability_raw(answer), OptionMatch::probability()));
        }
    }

    #[test]
    fn fallback_alternates_around_the_answer() {
        assert_eq!(fallback_distractor(0.5, 1), "0.5500");
        assert_eq!(fallback_distractor(0.5, 2), "0.4500");
        assert_eq!(fallback_distractor(0.5, 3), "0.6000");
        assert_eq!(fallback_distractor(0.98, 1), "1.0000");
    }

    #[test]
    fn fallback_keeps_its_distance_near_the_bounds() {
        let rare = 1.0 / 216.0;
        assert_eq!(fallback_distractor(rare, 1), "0.0546");
        assert_eq!(fallback_distractor(rare, 2), "0.1046");
        assert_eq!(fallback_distractor(1.0, 1), "0.9500");

        for p in [0.0, rare, 0.5, 0.995, 1.0] {
            for step in 1..=12 {
                let value: f64 = fallback_distractor(p, step).parse().unwrap();
                assert!(checker::is_valid_probability(value));
                assert!((value - p).abs() > MIN_SEPARATION, "p={p} step={step} gave {value}");
            }
        }
    }

    #[test]
    fn explanation_shows_the_fraction() {
        let scenario = cards::suit_scenario(cards::Suit::Spades);
        assert_eq!(scenario.explanation(), "The probability of drawing a spade is 13/52 = 0.2500");
    }
}
