use chrono::{NaiveDateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use common_types::Generate::{Difficulty, OptionId};

use super::engine;
use super::evaluator::{self, ScoreRule};
use super::helper;
use super::question::Question;

/// A fixed set of questions at one difficulty, handed out as a single quiz.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuizPaper {
    token: String,
    questions: Vec<Question>,
    created_by: i64,
    created_on: NaiveDateTime,
    difficulty: Difficulty,
}

impl QuizPaper {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, created_by: i64, difficulty: Difficulty) -> Self {
        Self {
            token: helper::random_token(rng),
            created_by,
            difficulty,
            created_on: Utc::now().naive_utc(),
            questions: Vec::new(),
        }
    }

    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions = (0..engine::GENERATE_QUESTIONS_PER_QUIZ)
            .map(|_| super::generate_for_difficulty(rng, self.difficulty))
            .collect();
        tracing::info!("Populated quiz {} with {} {} questions", self.token, self.questions.len(), self.difficulty);
    }

    pub fn token(&self) -> &str {
        &self.token
    }
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
    pub fn created_by(&self) -> i64 {
        self.created_by
    }
    pub fn created_on(&self) -> NaiveDateTime {
        self.created_on
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Total quiz score for one answer per question, in order. Missing answers count as wrong.
    pub fn score(&self, answers: &[OptionId]) -> u32 {
        self.questions.iter()
            .zip(answers)
            .map(|(question, chosen)| evaluator::evaluate(question, *chosen, ScoreRule::Quiz).score_delta)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn populated_paper_has_five_questions_at_its_difficulty() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut paper = QuizPaper::new(&mut rng, 7, Difficulty::Medium);
        assert!(paper.questions().is_empty());
        paper.populate(&mut rng);
        assert_eq!(paper.questions().len(), engine::GENERATE_QUESTIONS_PER_QUIZ);
        assert!(paper.questions().iter().all(|q| q.difficulty == Difficulty::Medium));
        assert_eq!(paper.created_by(), 7);
        assert_eq!(paper.token().len(), helper::TOKEN_LENGTH);
    }

    #[test]
    fn scoring_counts_only_correct_answers() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut paper = QuizPaper::new(&mut rng, 1, Difficulty::Hard);
        paper.populate(&mut rng);

        let perfect: Vec<OptionId> = paper.questions().iter().map(|q| q.correct_option_id).collect();
        assert_eq!(paper.score(&perfect), 150);

        let mut two_right = perfect.clone();
        for chosen in two_right.iter_mut().skip(2) {
            *chosen = OptionId::ALL.into_iter().find(|id| *id != *chosen).unwrap();
        }
        assert_eq!(paper.score(&two_right), 60);
        assert_eq!(paper.score(&perfect[..1]), 30);
    }

    #[test]
    fn paper_serializes_to_json() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut paper = QuizPaper::new(&mut rng, 3, Difficulty::Easy);
        paper.populate(&mut rng);
        let json = serde_json::to_value(&paper).unwrap();
        assert_eq!(json["createdBy"], 3);
        assert_eq!(json["difficulty"], "easy");
        assert_eq!(json["questions"].as_array().unwrap().len(), 5);
    }
}
