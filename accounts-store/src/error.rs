use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("User {0} does not exist")]
    UserNotFound(i64),
    #[error("Quiz {0} does not exist")]
    QuizNotFound(i64),
    #[error("Challenge {0} does not exist")]
    ChallengeNotFound(i64),
    #[error("Malformed record under '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
}
