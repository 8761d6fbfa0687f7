use rand::Rng;
use serde::{Deserialize, Serialize};
use common_types::Generate::{Difficulty, OptionId};

use super::engine;
use super::evaluator::{self, ScoreRule};
use super::question::Question;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum AnswerOutcome {
    Correct { points: u32 },
    Incorrect { lives_left: u32 },
    GameOver,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    level: i32,
    score: u32,
    lives: u32,
    current: Option<Question>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(engine::STARTING_LIVES)
    }
}

impl GameSession {
    pub fn new(lives: u32) -> Self {
        Self { level: 1, score: 0, lives, current: None }
    }

    pub fn level(&self) -> i32 {
        self.level
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn lives(&self) -> u32 {
        self.lives
    }
    pub fn is_over(&self) -> bool {
        self.lives == 0
    }
    pub fn time_limit_secs(&self) -> u32 {
        engine::QUESTION_TIME_LIMIT_SECS
    }
    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Question> {
        if self.is_over() {
            return None;
        }
        if self.current.is_none() {
            let question = super::generate_for_difficulty(rng, Difficulty::from_level(self.level));
            self.current = Some(question);
        }
        self.current.as_ref()
    }

    // None is a timeout
    pub fn answer(&mut self, chosen: Option<OptionId>, seconds_left: u32) -> Option<AnswerOutcome> {
        if self.is_over() {
            return Some(AnswerOutcome::GameOver);
        }
        let question = self.current.take()?;
        let seconds_left = seconds_left.min(engine::QUESTION_TIME_LIMIT_SECS);
        let rule = ScoreRule::Game { level: self.level, seconds_left };

        let correct = chosen.map(|chosen| evaluator::evaluate(&question, chosen, rule));
        match correct {
            Some(evaluation) if evaluation.correct => {
                self.score = self.score.saturating_add(evaluation.score_delta);
                self.level = self.level.saturating_add(1);
                Some(AnswerOutcome::Correct { points: evaluation.score_delta })
            },
            _ => {
                self.lives = self.lives.saturating_sub(1);
                if self.is_over() {
                    tracing::info!("Game over at level {} with score {}", self.level, self.score);
                    Some(AnswerOutcome::GameOver)
                } else {
                    Some(AnswerOutcome::Incorrect { lives_left: self.lives })
                }
            },
        }
    }
}
