pub mod generate;

pub use generate::{
    generate_challenge_question,
    generate_for_difficulty,
    generate_question,
    evaluator::{evaluate, Evaluation, ScoreRule},
    paper::QuizPaper,
    question::{ChallengeQuestion, Question, QuestionOption},
    session::{AnswerOutcome, GameSession},
};
