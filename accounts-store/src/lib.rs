mod error;
mod models;
mod storage;
mod store;

pub use error::StoreError;

pub type StoreResult<T> = Result<T, StoreError>;

#[allow(non_snake_case)]
pub mod Models {
    pub use crate::models::*;
}

#[allow(non_snake_case)]
pub mod Store {
    pub use crate::store::*;
}

#[allow(non_snake_case)]
pub mod Keys {
    pub const USERS: &'static str = "cybercalc_users";
    pub const QUIZZES: &'static str = "cybercalc_quizzes";
    pub const CHALLENGES: &'static str = "cybercalc_challenges";
    pub const CURRENT_USER: &'static str = "cybercalc_current_user";

    pub const ALL: [&'static str; 4] = [USERS, QUIZZES, CHALLENGES, CURRENT_USER];
}

#[allow(non_snake_case)]
pub mod Constants {
    pub const STARTING_LIVES: u32 = 3;
    pub const STARTING_POINTS: i64 = 0;
}

pub use storage::Storage;
