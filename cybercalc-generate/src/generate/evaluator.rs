use serde::{Deserialize, Serialize};
use common_types::Generate::OptionId;

use super::engine;
use super::question::Question;

/// How a correct answer is scored, depending on where the question was asked.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ScoreRule {
    Quiz,
    Game { level: i32, seconds_left: u32 },
    Challenge { points: u32 },
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub correct: bool,
    pub score_delta: u32,
}

impl ScoreRule {
    pub fn points(&self, question: &Question) -> u32 {
        match *self {
            ScoreRule::Quiz => engine::points_for_difficulty(question.difficulty),
            // half a point per second left on the clock
            ScoreRule::Game { level, seconds_left } => (level.max(1) as u32).saturating_mul(10).saturating_add(seconds_left / 2),
            ScoreRule::Challenge { points } => points,
        }
    }
}

pub fn evaluate(question: &Question, chosen: OptionId, rule: ScoreRule) -> Evaluation {
    let correct = question.is_correct(chosen);
    let score_delta = if correct { rule.points(question) } else { 0 };
    tracing::debug!("Question {} answered {chosen}: correct={correct}, +{score_delta}", question.id);
    Evaluation { correct, score_delta }
}
