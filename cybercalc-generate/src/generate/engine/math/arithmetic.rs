/*
 *
 * DES: Four-operator integer arithmetic. Operands are picked so the result is always a
 *      whole number (no negative differences, no remainders).
 * ASK: Compute the result of the operation
 *
 */

use rand::Rng;
use serde::{Deserialize, Serialize};
use common_types::Generate::Difficulty;

use crate::generate::{
    checker,
    formatter::{self, LABEL_OPERATOR_ADD, LABEL_OPERATOR_DIV, LABEL_OPERATOR_MUL, LABEL_OPERATOR_SUB},
    helper,
    options::{self, OptionMatch, MAX_DISTRACTOR_ATTEMPTS},
    question::Question,
};

pub const PROMPT: &'static str = "Compute the result of the operation:";
const MAX_OFFSET: i32 = 10;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub lhs: i32,
    pub rhs: i32,
    pub operator: Operator,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn label(&self) -> &'static str {
        match self {
            Operator::Add => LABEL_OPERATOR_ADD,
            Operator::Sub => LABEL_OPERATOR_SUB,
            Operator::Mul => LABEL_OPERATOR_MUL,
            Operator::Div => LABEL_OPERATOR_DIV,
        }
    }
}

impl Operation {
    pub fn new(lhs: i32, rhs: i32, operator: Operator) -> Self {
        Self { lhs, rhs, operator }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let operator = *helper::choose(rng, &Operator::ALL);
        match operator {
            Operator::Add => {
                let lhs = helper::gen_range_i32(rng, 1, 100);
                let rhs = helper::gen_range_i32(rng, 1, 100);
                Self::new(lhs, rhs, operator)
            },
            Operator::Sub => {
                let lhs = helper::gen_range_i32(rng, 10, 100);
                let rhs = helper::gen_range_i32(rng, 1, lhs);
                Self::new(lhs, rhs, operator)
            },
            Operator::Mul => {
                let lhs = helper::gen_range_i32(rng, 1, 12);
                let rhs = helper::gen_range_i32(rng, 1, 12);
                Self::new(lhs, rhs, operator)
            },
            Operator::Div => {
                // dividend is built from the quotient so the division is exact
                let divisor = helper::gen_range_i32(rng, 1, 12);
                let quotient = helper::gen_range_i32(rng, 1, 10);
                Self::new(divisor * quotient, divisor, operator)
            },
        }
    }

    pub fn result(&self) -> i32 {
        match self.operator {
            Operator::Add => self.lhs + self.rhs,
            Operator::Sub => self.lhs - self.rhs,
            Operator::Mul => self.lhs * self.rhs,
            Operator::Div if self.rhs != 0 => self.lhs / self.rhs,
            Operator::Div => 0,
        }
    }

    pub fn formula(&self) -> String {
        format!("{} {} {}", self.lhs, self.operator.label(), self.rhs)
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let operation = Operation::random(rng);
    question_from_operation(rng, operation)
}

pub fn question_from_operation<R: Rng + ?Sized>(rng: &mut R, operation: Operation) -> Question {
    let result = operation.result();
    let formula = operation.formula();
    let correct = formatter::format_i32_raw(result);

    let incorrect = {
        let candidates = (0..MAX_DISTRACTOR_ATTEMPTS)
            .filter_map(|_| helper::gen_range_i32_except(rng, -MAX_OFFSET, MAX_OFFSET, 0, MAX_DISTRACTOR_ATTEMPTS))
            .map(|offset| result + offset)
            .filter(|value| *value > 0)
            .map(formatter::format_i32_raw);
        // past the offset range, so never a repeat of a random pick
        options::collect_distractors(&correct, candidates, OptionMatch::Exact, |step| {
            formatter::format_i32_raw(result.max(0) + MAX_OFFSET + step as i32)
        })
    };

    let (options, correct_option_id) = options::shuffle_options(rng, &correct, incorrect, OptionMatch::Exact);
    let question = Question {
        id: helper::question_id(rng),
        prompt: PROMPT.to_string(),
        explanation: format!("The correct answer is {result} because {formula} = {result}"),
        formula,
        options,
        correct_option_id,
        difficulty: Difficulty::Easy,
    };
    checker::verify(&question, &correct, OptionMatch::Exact);
    tracing::debug!("Generated arithmetic question {}", question.id);
    question
}
