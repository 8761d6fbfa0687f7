use common_types::Generate::Difficulty;

pub mod math;

pub const GENERATE_QUESTIONS_PER_QUIZ: usize = 5;
pub const STARTING_LIVES: u32 = 3;
pub const QUESTION_TIME_LIMIT_SECS: u32 = 30;
pub const CHALLENGE_LEVELS: i32 = 10;

pub fn points_for_difficulty(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 10,
        Difficulty::Medium => 20,
        Difficulty::Hard => 30,
    }
}

pub fn points_for_challenge_level(level: i32) -> u32 {
    let level = level.max(1) as u32;
    let per_level = match level {
        l if l <= 3 => 10,
        l if l <= 7 => 15,
        _ => 25,
    };
    level.saturating_mul(per_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_points_scale_by_band() {
        assert_eq!(points_for_challenge_level(1), 10);
        assert_eq!(points_for_challenge_level(3), 30);
        assert_eq!(points_for_challenge_level(4), 60);
        assert_eq!(points_for_challenge_level(7), 105);
        assert_eq!(points_for_challenge_level(8), 200);
        assert_eq!(points_for_challenge_level(10), 250);
        assert_eq!(points_for_challenge_level(0), 10);
    }

    #[test]
    fn challenge_points_saturate_for_huge_levels() {
        assert_eq!(points_for_challenge_level(i32::MAX), u32::MAX);
        assert_eq!(points_for_challenge_level(i32::MIN), 10);
    }

    #[test]
    fn quiz_points_by_difficulty() {
        assert_eq!(points_for_difficulty(Difficulty::Easy), 10);
        assert_eq!(points_for_difficulty(Difficulty::Medium), 20);
        assert_eq!(points_for_difficulty(Difficulty::Hard), 30);
    }
}
