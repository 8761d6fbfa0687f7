use chrono::NaiveDateTime;
use garde::Validate;
use serde::{Deserialize, Serialize};
use common_types::Generate::Difficulty;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub points: i64,
    pub lives: u32,
}

/// A leaderboard row: the user without their password.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub points: i64,
    pub lives: u32,
}

#[derive(Deserialize, Debug, Validate)]
pub struct NewUser {
    #[garde(length(min=3))]
    pub username: String,
    #[garde(length(min=6))]
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: i64,
    pub user_id: i64,
    pub score: i64,
    pub date: NaiveDateTime,
    pub difficulty: Difficulty,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewQuiz {
    pub user_id: i64,
    pub score: i64,
    pub date: NaiveDateTime,
    pub difficulty: Difficulty,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: i64,
    pub user_id: i64,
    pub score: i64,
    pub completed: bool,
    pub date: NaiveDateTime,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewChallenge {
    pub user_id: i64,
    pub score: i64,
    pub completed: bool,
    pub date: NaiveDateTime,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub user_id: i64,
    pub points: i64,
    pub lives: u32,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            points: user.points,
            lives: user.lives,
        }
    }
}

impl From<&User> for UserProgress {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            points: user.points,
            lives: user.lives,
        }
    }
}

impl NewQuiz {
    pub fn into_quiz(self, id: i64) -> Quiz {
        Quiz {
            id,
            user_id: self.user_id,
            score: self.score,
            date: self.date,
            difficulty: self.difficulty,
        }
    }
}

impl NewChallenge {
    pub fn into_challenge(self, id: i64) -> Challenge {
        Challenge {
            id,
            user_id: self.user_id,
            score: self.score,
            completed: self.completed,
            date: self.date,
        }
    }
}

/// Anything persisted as a JSON array of records with a numeric id.
pub trait Record {
    fn id(&self) -> i64;
}

impl Record for User {
    fn id(&self) -> i64 {
        self.id
    }
}
impl Record for Quiz {
    fn id(&self) -> i64 {
        self.id
    }
}
impl Record for Challenge {
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_credentials_fail_validation() {
        let ok = NewUser { username: "ada".into(), password: "secret".into() };
        assert!(ok.validate(&()).is_ok());
        let short_name = NewUser { username: "al".into(), password: "secret".into() };
        assert!(short_name.validate(&()).is_err());
        let short_password = NewUser { username: "alan".into(), password: "12345".into() };
        assert!(short_password.validate(&()).is_err());
    }

    #[test]
    fn public_user_drops_the_password() {
        let user = User { id: 2, username: "ada".into(), password: "secret".into(), points: 40, lives: 3 };
        let json = serde_json::to_value(PublicUser::from(user)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["points"], 40);
    }
}
