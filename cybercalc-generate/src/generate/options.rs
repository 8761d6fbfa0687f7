use rand::{Rng, seq::SliceRandom};
use common_types::Generate::OptionId;

use super::formatter;
use super::question::QuestionOption;

pub const DISTRACTOR_COUNT: usize = 3;
pub const MAX_DISTRACTOR_ATTEMPTS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMatch {
    Exact,
    Rounded { places: usize },
}

impl OptionMatch {
    pub fn probability() -> Self {
        OptionMatch::Rounded { places: formatter::PROBABILITY_PLACES }
    }

    pub fn normalize(&self, formula: &str) -> String {
        let trimmed = formula.trim();
        match self {
            OptionMatch::Exact => trimmed.to_string(),
            OptionMatch::Rounded { places } => match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() => formatter::format_f64_places_raw(value, *places),
                _ => trimmed.to_string(),
            },
        }
    }

    pub fn matches(&self, a: &str, b: &str) -> bool {
        self.normalize(a) == self.normalize(b)
    }
}

// short candidate lists are topped up from fallback(1), fallback(2), ...
pub fn collect_distractors<I, F>(correct: &str, candidates: I, matcher: OptionMatch, mut fallback: F) -> [String; DISTRACTOR_COUNT]
where
    I: IntoIterator<Item = String>,
    F: FnMut(usize) -> String,
{
    let mut accepted: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT);
    let accept = |accepted: &mut Vec<String>, candidate: String| -> bool {
        if matcher.matches(correct, &candidate) || accepted.iter().any(|a| matcher.matches(a, &candidate)) {
            return false;
        }
        accepted.push(candidate);
        true
    };

    for candidate in candidates {
        if accepted.len() == DISTRACTOR_COUNT {
            break;
        }
        accept(&mut accepted, candidate);
    }

    if accepted.len() < DISTRACTOR_COUNT {
        tracing::warn!("Only {} distractors for {correct}, topping up from fallback", accepted.len());
        let mut step = 1;
        while accepted.len() < DISTRACTOR_COUNT && step <= MAX_DISTRACTOR_ATTEMPTS {
            accept(&mut accepted, fallback(step));
            step += 1;
        }
        // Each of these is distinct from the others and from `correct`.
        let mut step = 1;
        while accepted.len() < DISTRACTOR_COUNT {
            accept(&mut accepted, format!("{correct} + {step}"));
            step += 1;
        }
    }

    let mut distractors: [String; DISTRACTOR_COUNT] = Default::default();
    for (slot, distractor) in distractors.iter_mut().zip(accepted) {
        *slot = distractor;
    }
    distractors
}

pub fn shuffle_options<R: Rng + ?Sized>(rng: &mut R, correct: &str, incorrect: [String; DISTRACTOR_COUNT], matcher: OptionMatch) -> ([QuestionOption; 4], OptionId) {
    let [b, c, d] = incorrect;
    let mut options = [
        QuestionOption::new(OptionId::A, correct),
        QuestionOption::new(OptionId::B, b),
        QuestionOption::new(OptionId::C, c),
        QuestionOption::new(OptionId::D, d),
    ];
    options.shuffle(rng);
    for (option, id) in options.iter_mut().zip(OptionId::ALL) {
        option.id = id;
    }

    let correct_option_id = locate_correct(&options, correct, matcher);
    (options, correct_option_id)
}

pub fn locate_correct(options: &[QuestionOption], correct: &str, matcher: OptionMatch) -> OptionId {
    match options.iter().find(|option| matcher.matches(&option.formula, correct)) {
        Some(option) => option.id,
        None => {
            tracing::warn!("Correct answer {correct} not found among options, defaulting to A");
            OptionId::A
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn rounded_match_ignores_trailing_digits() {
        let matcher = OptionMatch::probability();
        assert!(matcher.matches("0.25", "0.2500"));
        assert!(matcher.matches("0.16666", "0.1667"));
        assert!(!matcher.matches("0.1667", "0.1668"));
        assert!(OptionMatch::Exact.matches(" 10", "10"));
        assert!(!OptionMatch::Exact.matches("0.25", "0.2500"));
    }

    #[test]
    fn distractors_skip_duplicates_and_the_answer() {
        let distractors = collect_distractors(
            "10",
            strings(&["10", "12", "12", "8", "15", "3"]),
            OptionMatch::Exact,
            |n| (100 + n).to_string(),
        );
        assert_eq!(distractors, ["12".to_string(), "8".to_string(), "15".to_string()]);
    }

    #[test]
    fn distractors_fall_back_when_candidates_run_out() {
        let distractors = collect_distractors("1", strings(&["1", "2"]), OptionMatch::Exact, |n| (1 + n).to_string());
        // fallback(1) is "2" again and gets skipped
        assert_eq!(distractors, ["2".to_string(), "3".to_string(), "4".to_string()]);
    }

    #[test]
    fn distractors_survive_a_useless_fallback() {
        let distractors = collect_distractors("x", Vec::new(), OptionMatch::Exact, |_| "x".to_string());
        assert_eq!(distractors, ["x + 1".to_string(), "x + 2".to_string(), "x + 3".to_string()]);
    }

    #[test]
    fn shuffled_options_keep_every_formula() {
        let mut rng = StdRng::seed_from_u64(42);
        let (options, correct_id) = shuffle_options(&mut rng, "10", ["11".into(), "9".into(), "4".into()], OptionMatch::Exact);
        let mut formulas: Vec<_> = options.iter().map(|o| o.formula.clone()).collect();
        formulas.sort();
        assert_eq!(formulas, strings(&["10", "11", "4", "9"]));
        let ids: Vec<_> = options.iter().map(|o| o.id).collect();
        assert_eq!(ids, OptionId::ALL.to_vec());
        assert_eq!(options.iter().find(|o| o.id == correct_id).unwrap().formula, "10");
    }

    #[test]
    fn missing_answer_defaults_to_a() {
        let options = [
            QuestionOption::new(OptionId::A, "1"),
            QuestionOption::new(OptionId::B, "2"),
        ];
        assert_eq!(locate_correct(&options, "3", OptionMatch::Exact), OptionId::A);
    }

    #[test]
    fn shuffle_positions_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let labels = ["w", "x", "y", "z"];
        let mut counts = [[0usize; 4]; 4];
        for _ in 0..1000 {
            let (options, _) = shuffle_options(&mut rng, "w", ["x".into(), "y".into(), "z".into()], OptionMatch::Exact);
            for (position, option) in options.iter().enumerate() {
                let label = labels.iter().position(|l| *l == option.formula).unwrap();
                counts[label][position] += 1;
            }
        }
        for row in counts.iter() {
            for &count in row.iter() {
                assert!((170..=330).contains(&count), "skewed position counts: {counts:?}");
            }
        }
    }
}
