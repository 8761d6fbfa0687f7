#[allow(non_snake_case)]
pub mod Generate {
    use ::std::fmt;
    use ::std::str;
    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum ParseError {
        #[error("'{0}' is not a valid Difficulty")]
        InvalidDifficulty(String),
        #[error("'{0}' is not a valid OptionId")]
        InvalidOptionId(String),
    }

    #[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[serde(rename_all = "lowercase")]
    pub enum Difficulty {
        Easy,
        Medium,
        Hard,
    }

    impl Difficulty {
        // Game and challenge levels climb through the tiers at 4 and 8.
        pub fn from_level(level: i32) -> Self {
            match level {
                l if l >= 8 => Difficulty::Hard,
                l if l >= 4 => Difficulty::Medium,
                _ => Difficulty::Easy,
            }
        }

        pub fn as_str(&self) -> &'static str {
            match self {
                Difficulty::Easy => "easy",
                Difficulty::Medium => "medium",
                Difficulty::Hard => "hard",
            }
        }
    }

    impl fmt::Display for Difficulty {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{}", self.as_str())
        }
    }

    impl str::FromStr for Difficulty {
        type Err = ParseError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "easy" => Ok(Difficulty::Easy),
                "medium" => Ok(Difficulty::Medium),
                "hard" => Ok(Difficulty::Hard),
                _ => Err(ParseError::InvalidDifficulty(s.to_string())),
            }
        }
    }

    #[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum OptionId {
        A,
        B,
        C,
        D,
    }

    impl OptionId {
        pub const ALL: [OptionId; 4] = [OptionId::A, OptionId::B, OptionId::C, OptionId::D];

        pub fn as_str(&self) -> &'static str {
            match self {
                OptionId::A => "A",
                OptionId::B => "B",
                OptionId::C => "C",
                OptionId::D => "D",
            }
        }
    }

    impl fmt::Display for OptionId {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{}", self.as_str())
        }
    }

    impl str::FromStr for OptionId {
        type Err = ParseError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim() {
                "A" | "a" => Ok(OptionId::A),
                "B" | "b" => Ok(OptionId::B),
                "C" | "c" => Ok(OptionId::C),
                "D" | "d" => Ok(OptionId::D),
                _ => Err(ParseError::InvalidOptionId(s.to_string())),
            }
        }
    }

    pub fn str_to_difficulty<T: AsRef<str>>(difficulty: T) -> Result<Difficulty, ParseError> {
        difficulty.as_ref().parse()
    }
}

#[cfg(test)]
mod tests {
    use super::Generate::*;

    #[test]
    fn difficulty_from_level_thresholds() {
        assert_eq!(Difficulty::from_level(1), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(3), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(4), Difficulty::Medium);
        assert_eq!(Difficulty::from_level(7), Difficulty::Medium);
        assert_eq!(Difficulty::from_level(8), Difficulty::Hard);
        assert_eq!(Difficulty::from_level(-2), Difficulty::Easy);
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!(str_to_difficulty("Medium"), Ok(Difficulty::Medium));
        assert_eq!(str_to_difficulty(" hard "), Ok(Difficulty::Hard));
        assert_eq!(
            str_to_difficulty("extreme"),
            Err(ParseError::InvalidDifficulty("extreme".to_string()))
        );
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Easy).unwrap();
        assert_eq!(json, r#""easy""#);
        let back: Difficulty = serde_json::from_str(r#""hard""#).unwrap();
        assert_eq!(back, Difficulty::Hard);
    }

    #[test]
    fn option_id_round_trips_through_str() {
        for id in OptionId::ALL {
            assert_eq!(id.as_str().parse::<OptionId>(), Ok(id));
        }
        assert!("E".parse::<OptionId>().is_err());
    }
}
