use serde::{Deserialize, Serialize};
use common_types::Generate::{Difficulty, OptionId};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub id: OptionId,
    pub formula: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub formula: String,
    pub options: [QuestionOption; 4],
    pub correct_option_id: OptionId,
    pub explanation: String,
    pub difficulty: Difficulty,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChallengeQuestion {
    pub level: i32,
    pub points: u32,
    #[serde(flatten)]
    pub question: Question,
}

impl QuestionOption {
    pub fn new<T>(id: OptionId, formula: T) -> Self
    where
        T: ToString
    {
        Self { id, formula: formula.to_string() }
    }
}

impl Question {
    pub fn option(&self, id: OptionId) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.id == id)
    }
    pub fn correct_option(&self) -> Option<&QuestionOption> {
        self.option(self.correct_option_id)
    }
    pub fn is_correct(&self, chosen: OptionId) -> bool {
        chosen == self.correct_option_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            id: 1234,
            prompt: "Compute the result of the operation:".to_string(),
            formula: "7 + 3".to_string(),
            options: [
                QuestionOption::new(OptionId::A, 12),
                QuestionOption::new(OptionId::B, 10),
                QuestionOption::new(OptionId::C, 9),
                QuestionOption::new(OptionId::D, 4),
            ],
            correct_option_id: OptionId::B,
            explanation: String::new(),
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn correct_option_resolves() {
        let question = sample();
        assert_eq!(question.correct_option().map(|o| o.formula.as_str()), Some("10"));
        assert!(question.is_correct(OptionId::B));
        assert!(!question.is_correct(OptionId::A));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["correctOptionId"], "B");
        assert_eq!(json["difficulty"], "easy");
        assert_eq!(json["options"][0]["id"], "A");
    }
}
