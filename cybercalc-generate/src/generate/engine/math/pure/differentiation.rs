/*
 *
 * DES: Differentiate a polynomial (degree 1-3), an exponential (base e or 2-5) or a
 *      trigonometric function (sin, cos, tan), each with a small integer coefficient.
 * ASK: Compute the derivative of the function
 *
 * Wrong answers model common slips: an inflated coefficient, a flipped sign, an exponent left
 * alone, or the identity for a neighbouring function.
 *
 */

use rand::Rng;
use common_types::Generate::Difficulty;

use super::expression::{Base, Expression, Function, Term, Trig, TrigFunction};
use crate::generate::{
    checker,
    helper,
    options::{self, OptionMatch},
    question::Question,
};

pub const PROMPT: &'static str = "Compute the derivative of the function:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Polynomial,
    Exponential,
    Trigonometric,
}

impl Family {
    pub const ALL: [Family; 3] = [Family::Polynomial, Family::Exponential, Family::Trigonometric];
}

pub fn random_function<R: Rng + ?Sized>(rng: &mut R, family: Family) -> Function {
    match family {
        Family::Polynomial => {
            let degree = helper::gen_range_i32(rng, 1, 3);
            let mut coefficients: Vec<i32> = (0..=degree).map(|_| helper::gen_range_i32(rng, -5, 5)).collect();
            if coefficients[0] == 0 {
                coefficients[0] = helper::gen_range_i32(rng, 1, 5);
            }
            Function::Polynomial { coefficients }
        },
        Family::Exponential => {
            let base = if helper::coin_flip(rng) {
                Base::E
            } else {
                Base::Integer(helper::gen_range_i32(rng, 2, 5))
            };
            Function::exponential(helper::gen_range_i32(rng, 1, 5), base)
        },
        Family::Trigonometric => {
            let function = *helper::choose(rng, &Trig::ALL);
            Function::trigonometric(helper::gen_range_i32(rng, 1, 5), function)
        },
    }
}

/// Three wrong derivatives for `function`, built from its correct derivative.
pub fn distractors<R: Rng + ?Sized>(rng: &mut R, function: &Function) -> [Expression; 3] {
    let derivative = function.derivative();
    match function {
        Function::Polynomial { coefficients } => {
            let terms = derivative.terms();
            let Some((first, rest)) = terms.split_first() else {
                return [Expression::single(Term::Constant(1)), Expression::single(Term::Constant(-1)), Expression::single(Term::Power { coefficient: 1, exponent: 1 })];
            };

            // coefficient off by a little, same sign
            let bump = helper::gen_range_i32(rng, 1, 3) * first.coefficient().signum();
            let mut inflated = vec![first.with_coefficient(first.coefficient() + bump)];
            inflated.extend_from_slice(rest);

            // last term's sign flipped
            let mut flipped = terms.to_vec();
            if let Some(last) = flipped.last_mut() {
                *last = last.negated();
            }

            // multiplied down but the exponent never decremented
            let degree = coefficients.len().saturating_sub(1);
            let stale_exponent = coefficients.iter().enumerate()
                .map(|(i, &c)| (c, (degree - i) as u32))
                .filter(|(_, exponent)| *exponent >= 1)
                .map(|(c, exponent)| Term::Power { coefficient: c * exponent as i32, exponent })
                .collect();

            [Expression::new(inflated), Expression::new(flipped), Expression::new(stale_exponent)]
        },
        Function::Exponential { coefficient, base: Base::E } => {
            let c = *coefficient;
            [
                Expression::single(Term::PowerRuleExponential { coefficient: c, base: Base::E }),
                Expression::single(Term::Exponential { coefficient: c + 1, base: Base::E, log_scaled: false }),
                Expression::single(Term::Exponential { coefficient: -c, base: Base::E, log_scaled: false }),
            ]
        },
        Function::Exponential { coefficient, base } => {
            let c = *coefficient;
            [
                Expression::single(Term::PowerRuleExponential { coefficient: c, base: *base }),
                Expression::single(Term::Exponential { coefficient: c, base: *base, log_scaled: false }),
                Expression::single(Term::Exponential { coefficient: c + 1, base: *base, log_scaled: true }),
            ]
        },
        Function::Trigonometric { coefficient, function } => {
            let c = *coefficient;
            let trig = |coefficient: i32, function: TrigFunction| Expression::single(Term::Trig { coefficient, function });
            match function {
                Trig::Sin => [
                    trig(-c, TrigFunction::Cos),
                    trig(c, TrigFunction::Sin),
                    trig(c, TrigFunction::Tan),
                ],
                Trig::Cos => [
                    trig(c, TrigFunction::Sin),
                    trig(-c, TrigFunction::Cos),
                    trig(-c, TrigFunction::Tan),
                ],
                Trig::Tan => [
                    trig(-c, TrigFunction::SecSquared),
                    trig(c, TrigFunction::SecTan),
                    trig(-c, TrigFunction::CscSquared),
                ],
            }
        },
    }
}

fn explanation(function: &Function, rendered: &str, derivative: &str) -> String {
    let rule = match function {
        Function::Polynomial { .. } => "by the power rule: each exponent multiplies its coefficient and drops by one, and the constant term vanishes".to_string(),
        Function::Exponential { base: Base::E, .. } => "because the derivative of e^x is e^x".to_string(),
        Function::Exponential { base: Base::Integer(a), .. } => format!(r#"because the derivative of {a}^x is \ln({a}) \cdot {a}^x"#),
        Function::Trigonometric { function: Trig::Sin, .. } => r#"because the derivative of \sin(x) is \cos(x)"#.to_string(),
        Function::Trigonometric { function: Trig::Cos, .. } => r#"because the derivative of \cos(x) is -\sin(x)"#.to_string(),
        Function::Trigonometric { function: Trig::Tan, .. } => r#"because the derivative of \tan(x) is \sec^2(x)"#.to_string(),
    };
    format!("The derivative of {rendered} is {derivative} {rule}")
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let family = *helper::choose(rng, &Family::ALL);
    let function = random_function(rng, family);
    question_from_function(rng, function)
}

pub fn question_from_function<R: Rng + ?Sized>(rng: &mut R, function: Function) -> Question {
    let rendered = function.to_expression().render();
    let derivative = function.derivative();
    let correct = derivative.render();

    let candidates = distractors(rng, &function).map(|expression| expression.render());
    // leading coefficient pushed further from zero, so never equal to the derivative
    let incorrect = options::collect_distractors(&correct, candidates, OptionMatch::Exact, |step| {
        let step = step as i32;
        match derivative.terms().split_first() {
            Some((first, rest)) => {
                let mut terms = vec![first.with_coefficient(first.coefficient() + step * first.coefficient().signum())];
                terms.extend_from_slice(rest);
                Expression::new(terms).render()
            },
            None => Expression::single(Term::Constant(step)).render(),
        }
    });

    let (options, correct_option_id) = options::shuffle_options(rng, &correct, incorrect, OptionMatch::Exact);
    let question = Question {
        id: helper::question_id(rng),
        prompt: PROMPT.to_string(),
        formula: format!("f(x) = {rendered}"),
        explanation: explanation(&function, &rendered, &correct),
        options,
        correct_option_id,
        difficulty: Difficulty::Hard,
    };
    checker::verify(&question, &correct, OptionMatch::Exact);
    tracing::debug!("Generated derivative question {}", question.id);
    question
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rendered(expressions: &[Expression; 3]) -> Vec<String> {
        expressions.iter().map(Expression::render).collect()
    }

    // Re-derives a rendered polynomial such as `2x^3-x+4` straight from the markup.
    fn differentiate_markup(markup: &str) -> String {
        let mut terms = Vec::new();
        let mut current = String::new();
        for ch in markup.chars() {
            if (ch == '+' || ch == '-') && !current.is_empty() {
                terms.push(::std::mem::take(&mut current));
            }
            current.push(ch);
        }
        terms.push(current);

        let mut derived = Vec::new();
        for term in terms {
            let Some((coefficient, power)) = term.split_once('x') else {
                continue; // constant
            };
            let coefficient: i32 = match coefficient {
                "" | "+" => 1,
                "-" => -1,
                digits => digits.parse().unwrap(),
            };
            let exponent: u32 = power.strip_prefix('^').map(|e| e.parse().unwrap()).unwrap_or(1);
            derived.push(match exponent - 1 {
                0 => Term::Constant(coefficient),
                reduced => Term::Power { coefficient: coefficient * exponent as i32, exponent: reduced },
            });
        }
        Expression::new(derived).render()
    }

    #[test]
    fn linear_polynomial() {
        let mut rng = StdRng::seed_from_u64(3);
        let question = question_from_function(&mut rng, Function::polynomial(&[3, -2]));
        assert_eq!(question.formula, "f(x) = 3x-2");
        assert_eq!(question.correct_option().unwrap().formula, "3");
        assert_eq!(question.difficulty, Difficulty::Hard);
    }

    #[test]
    fn sine_with_unit_coefficient() {
        let mut rng = StdRng::seed_from_u64(9);
        let function = Function::trigonometric(1, Trig::Sin);
        assert_eq!(rendered(&distractors(&mut rng, &function)), vec![r#"-\cos(x)"#, r#"\sin(x)"#, r#"\tan(x)"#]);

        let question = question_from_function(&mut rng, function);
        assert_eq!(question.formula, r#"f(x) = \sin(x)"#);
        assert_eq!(question.correct_option().unwrap().formula, r#"\cos(x)"#);
        assert!(question.options.iter().any(|o| o.formula == r#"-\cos(x)"#));
    }

    #[test]
    fn cosine_and_tangent_distractors() {
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(
            rendered(&distractors(&mut rng, &Function::trigonometric(2, Trig::Cos))),
            vec![r#"2\sin(x)"#, r#"-2\cos(x)"#, r#"-2\tan(x)"#]
        );
        assert_eq!(
            rendered(&distractors(&mut rng, &Function::trigonometric(1, Trig::Tan))),
            vec![r#"-\sec^2(x)"#, r#"\sec(x)\tan(x)"#, r#"-\csc^2(x)"#]
        );
    }

    #[test]
    fn exponential_distractors() {
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(
            rendered(&distractors(&mut rng, &Function::exponential(2, Base::E))),
            vec!["2xe^{x-1}", "3e^x", "-2e^x"]
        );
        assert_eq!(
            rendered(&distractors(&mut rng, &Function::exponential(3, Base::Integer(2)))),
            vec![r#"3 \cdot x \cdot 2^{x-1}"#, r#"3 \cdot 2^x"#, r#"4 \cdot \ln(2) \cdot 2^x"#]
        );
    }

    #[test]
    fn polynomial_distractors_model_slips() {
        let mut rng = StdRng::seed_from_u64(9);
        let function = Function::polynomial(&[2, 0, -1, 4]);
        let [inflated, flipped, stale] = distractors(&mut rng, &function);
        let bumped = inflated.terms()[0].coefficient();
        assert!((7..=9).contains(&bumped));
        assert_eq!(flipped.render(), "6x^2+1");
        assert_eq!(stale.render(), "6x^3-x");
    }

    #[test]
    fn negative_leading_coefficient_is_inflated_away_from_zero() {
        let mut rng = StdRng::seed_from_u64(10);
        let [inflated, flipped, _] = distractors(&mut rng, &Function::polynomial(&[-1, 3]));
        assert!(inflated.terms()[0].coefficient() <= -2);
        assert_eq!(flipped.render(), "1");
    }

    #[test]
    fn rendered_polynomials_differentiate_back_to_the_answer() {
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..300 {
            let function = random_function(&mut rng, Family::Polynomial);
            let markup = function.to_expression().render();
            assert_eq!(differentiate_markup(&markup), function.derivative().render(), "f(x) = {markup}");
        }
    }

    #[test]
    fn random_functions_respect_their_ranges() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..300 {
            let family = *helper::choose(&mut rng, &Family::ALL);
            match random_function(&mut rng, family) {
                Function::Polynomial { coefficients } => {
                    assert!((2..=4).contains(&coefficients.len()));
                    assert_ne!(coefficients[0], 0);
                    assert!(coefficients.iter().all(|c| (-5..=5).contains(c)));
                },
                Function::Exponential { coefficient, base } => {
                    assert!((1..=5).contains(&coefficient));
                    if let Base::Integer(a) = base {
                        assert!((2..=5).contains(&a));
                    }
                },
                Function::Trigonometric { coefficient, .. } => assert!((1..=5).contains(&coefficient)),
            }
        }
    }

    #[test]
    fn generated_questions_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(55);
        for _ in 0..300 {
            let question = generate(&mut rng);
            let correct = question.correct_option().unwrap().formula.clone();
            assert!(checker::is_well_formed(&question, &correct, OptionMatch::Exact), "{question:?}");
        }
    }
}
