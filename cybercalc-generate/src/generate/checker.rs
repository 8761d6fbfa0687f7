use common_types::Generate::OptionId;

use super::options::OptionMatch;
use super::question::Question;

pub fn is_i32_zero(v: i32) -> bool {
    v == 0
}

pub fn is_valid_frac_i32(numerator: i32, denominator: i32) -> bool {
    !is_i32_zero(denominator) && numerator >= 0 && numerator <= denominator
}

pub fn is_valid_probability(p: f64) -> bool {
    p.is_finite() && (0.0..=1.0).contains(&p)
}

pub fn has_unique_ids(question: &Question) -> bool {
    OptionId::ALL.iter().all(|id| question.options.iter().filter(|o| o.id == *id).count() == 1)
}

pub fn has_distinct_formulas(question: &Question, matcher: OptionMatch) -> bool {
    let options = &question.options;
    options.iter().enumerate().all(|(i, a)| {
        options[i + 1..].iter().all(|b| !matcher.matches(&a.formula, &b.formula))
    })
}

pub fn has_single_correct(question: &Question, correct: &str, matcher: OptionMatch) -> bool {
    let mut matching = question.options.iter().filter(|o| matcher.matches(&o.formula, correct));
    match (matching.next(), matching.next()) {
        (Some(option), None) => option.id == question.correct_option_id,
        _ => false,
    }
}

pub fn is_well_formed(question: &Question, correct: &str, matcher: OptionMatch) -> bool {
    has_unique_ids(question)
        && has_distinct_formulas(question, matcher)
        && has_single_correct(question, correct, matcher)
}

pub fn verify(question: &Question, correct: &str, matcher: OptionMatch) {
    let well_formed = is_well_formed(question, correct, matcher);
    if !well_formed {
        tracing::error!("Generated malformed question {}: {:?}", question.id, question);
    }
    debug_assert!(well_formed, "malformed question {question:?}");
}
