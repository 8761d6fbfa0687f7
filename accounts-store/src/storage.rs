use garde::Validate;
use parking_lot::Mutex;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    Constants,
    Keys,
    Models::{Challenge, NewChallenge, NewQuiz, NewUser, PublicUser, Quiz, Record, User, UserProgress},
    Store::KeyValueStore,
    StoreError,
    StoreResult,
};

/// Users, quizzes, challenges and the signed-in user, kept as JSON arrays in a key-value store.
pub struct Storage<S> {
    store: S,
    // held across each read-modify-write so concurrent callers never lose an update
    write_lock: Mutex<()>,
}

fn next_id<T: Record>(records: &[T]) -> i64 {
    records.iter().map(Record::id).max().map_or(1, |id| id + 1)
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store, write_lock: Mutex::new(()) }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        match self.store.get(key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| {
                tracing::error!("Failed to parse records under {key}: {source}");
                StoreError::Malformed { key: key.to_string(), source }
            }),
            None => Ok(Vec::new()),
        }
    }

    fn save<T: Serialize>(&self, key: &str, records: &[T]) -> StoreResult<()> {
        self.store.set(key, serde_json::to_string(records)?)
    }

    fn replace<T: Record + Serialize + DeserializeOwned + Clone>(&self, key: &str, record: &T) -> StoreResult<bool> {
        let mut records: Vec<T> = self.load(key)?;
        let Some(slot) = records.iter_mut().find(|r| r.id() == record.id()) else {
            return Ok(false);
        };
        *slot = record.clone();
        self.save(key, &records)?;
        Ok(true)
    }

    // Users

    pub fn get_users(&self) -> StoreResult<Vec<User>> {
        self.load(Keys::USERS)
    }

    pub fn get_user_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        Ok(self.get_users()?.into_iter().find(|user| user.id == id))
    }

    pub fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self.get_users()?.into_iter().find(|user| user.username == username))
    }

    pub fn create_user(&self, new_user: NewUser) -> StoreResult<User> {
        if let Err(err) = new_user.validate(&()) {
            tracing::info!("Validation failed with reason: {err}");
            return Err(StoreError::Validation(err.to_string()));
        }

        let _guard = self.write_lock.lock();
        let mut users = self.get_users()?;
        if users.iter().any(|user| user.username == new_user.username) {
            tracing::info!("Username {} already taken", new_user.username);
            return Err(StoreError::UsernameTaken(new_user.username));
        }

        let user = User {
            id: next_id(&users),
            username: new_user.username,
            password: new_user.password,
            points: Constants::STARTING_POINTS,
            lives: Constants::STARTING_LIVES,
        };
        users.push(user.clone());
        self.save(Keys::USERS, &users)?;
        tracing::info!("Created user {} ({})", user.id, user.username);
        Ok(user)
    }

    /// Passwords are stored and compared as given.
    pub fn authenticate(&self, username: &str, password: &str) -> StoreResult<User> {
        match self.get_user_by_username(username)? {
            Some(user) if user.password == password => Ok(user),
            _ => {
                tracing::info!("Rejected sign in for {username}");
                Err(StoreError::InvalidCredentials)
            },
        }
    }

    pub fn update_user(&self, user: &User) -> StoreResult<User> {
        let _guard = self.write_lock.lock();
        if !self.replace(Keys::USERS, user)? {
            return Err(StoreError::UserNotFound(user.id));
        }
        Ok(user.clone())
    }

    fn modify_user<F: FnOnce(&mut User)>(&self, id: i64, modify: F) -> StoreResult<User> {
        let _guard = self.write_lock.lock();
        let mut users = self.get_users()?;
        let user = users.iter_mut()
            .find(|user| user.id == id)
            .ok_or(StoreError::UserNotFound(id))?;
        modify(user);
        let updated = user.clone();
        self.save(Keys::USERS, &users)?;
        Ok(updated)
    }

    /// Adds `delta` (possibly negative) to the user's points.
    pub fn update_user_points(&self, id: i64, delta: i64) -> StoreResult<User> {
        self.modify_user(id, |user| user.points = user.points.saturating_add(delta))
    }

    pub fn update_user_lives(&self, id: i64, lives: u32) -> StoreResult<User> {
        self.modify_user(id, |user| user.lives = lives)
    }

    // Signed-in user

    pub fn current_user(&self) -> StoreResult<Option<User>> {
        let Some(raw) = self.store.get(Keys::CURRENT_USER)? else {
            return Ok(None);
        };
        match raw.trim().parse::<i64>() {
            Ok(id) => self.get_user_by_id(id),
            Err(err) => {
                tracing::warn!("Ignoring current user '{raw}': {err}");
                Ok(None)
            },
        }
    }

    pub fn set_current_user(&self, id: Option<i64>) -> StoreResult<()> {
        match id {
            Some(id) => self.store.set(Keys::CURRENT_USER, id.to_string()),
            None => self.store.remove(Keys::CURRENT_USER),
        }
    }

    // Quizzes

    pub fn get_quizzes(&self) -> StoreResult<Vec<Quiz>> {
        self.load(Keys::QUIZZES)
    }

    pub fn get_quizzes_by_user_id(&self, user_id: i64) -> StoreResult<Vec<Quiz>> {
        Ok(self.get_quizzes()?.into_iter().filter(|quiz| quiz.user_id == user_id).collect())
    }

    pub fn create_quiz(&self, new_quiz: NewQuiz) -> StoreResult<Quiz> {
        let _guard = self.write_lock.lock();
        let mut quizzes = self.get_quizzes()?;
        let quiz = new_quiz.into_quiz(next_id(&quizzes));
        quizzes.push(quiz.clone());
        self.save(Keys::QUIZZES, &quizzes)?;
        tracing::info!("Recorded quiz {} for user {}", quiz.id, quiz.user_id);
        Ok(quiz)
    }

    pub fn update_quiz(&self, quiz: &Quiz) -> StoreResult<Quiz> {
        let _guard = self.write_lock.lock();
        if !self.replace(Keys::QUIZZES, quiz)? {
            return Err(StoreError::QuizNotFound(quiz.id));
        }
        Ok(quiz.clone())
    }

    // Challenges

    pub fn get_challenges(&self) -> StoreResult<Vec<Challenge>> {
        self.load(Keys::CHALLENGES)
    }

    pub fn get_challenges_by_user_id(&self, user_id: i64) -> StoreResult<Vec<Challenge>> {
        Ok(self.get_challenges()?.into_iter().filter(|challenge| challenge.user_id == user_id).collect())
    }

    pub fn create_challenge(&self, new_challenge: NewChallenge) -> StoreResult<Challenge> {
        let _guard = self.write_lock.lock();
        let mut challenges = self.get_challenges()?;
        let challenge = new_challenge.into_challenge(next_id(&challenges));
        challenges.push(challenge.clone());
        self.save(Keys::CHALLENGES, &challenges)?;
        tracing::info!("Recorded challenge {} for user {}", challenge.id, challenge.user_id);
        Ok(challenge)
    }

    pub fn update_challenge(&self, challenge: &Challenge) -> StoreResult<Challenge> {
        let _guard = self.write_lock.lock();
        if !self.replace(Keys::CHALLENGES, challenge)? {
            return Err(StoreError::ChallengeNotFound(challenge.id));
        }
        Ok(challenge.clone())
    }

    // Progress and leaderboard

    pub fn get_user_progress(&self, id: i64) -> StoreResult<Option<UserProgress>> {
        Ok(self.get_user_by_id(id)?.as_ref().map(UserProgress::from))
    }

    /// Highest points first; ties keep registration order.
    pub fn get_top_users(&self, limit: usize) -> StoreResult<Vec<PublicUser>> {
        let mut users = self.get_users()?;
        users.sort_by(|a, b| b.points.cmp(&a.points));
        Ok(users.into_iter().take(limit).map(PublicUser::from).collect())
    }

    pub fn clear_all(&self) -> StoreResult<()> {
        let _guard = self.write_lock.lock();
        for key in Keys::ALL {
            self.store.remove(key)?;
        }
        tracing::info!("Cleared all stored records");
        Ok(())
    }
}
