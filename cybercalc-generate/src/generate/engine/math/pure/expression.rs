use serde::{Deserialize, Serialize};

use crate::generate::formatter;

const LABEL_CDOT: &'static str = r#" \cdot "#;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    E,
    Integer(i32),
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trig {
    Sin,
    Cos,
    Tan,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
    SecSquared,
    SecTan,
    CscSquared,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Constant(i32),
    Power { coefficient: i32, exponent: u32 },
    Exponential { coefficient: i32, base: Base, log_scaled: bool },
    // c * x * a^(x-1)
    PowerRuleExponential { coefficient: i32, base: Base },
    Trig { coefficient: i32, function: TrigFunction },
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    terms: Vec<Term>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Function {
    // highest degree first
    Polynomial { coefficients: Vec<i32> },
    Exponential { coefficient: i32, base: Base },
    Trigonometric { coefficient: i32, function: Trig },
}

impl Trig {
    pub const ALL: [Trig; 3] = [Trig::Sin, Trig::Cos, Trig::Tan];

    pub fn as_function(&self) -> TrigFunction {
        match self {
            Trig::Sin => TrigFunction::Sin,
            Trig::Cos => TrigFunction::Cos,
            Trig::Tan => TrigFunction::Tan,
        }
    }
}

impl TrigFunction {
    pub fn markup(&self) -> &'static str {
        match self {
            TrigFunction::Sin => r#"\sin(x)"#,
            TrigFunction::Cos => r#"\cos(x)"#,
            TrigFunction::Tan => r#"\tan(x)"#,
            TrigFunction::SecSquared => r#"\sec^2(x)"#,
            TrigFunction::SecTan => r#"\sec(x)\tan(x)"#,
            TrigFunction::CscSquared => r#"\csc^2(x)"#,
        }
    }
}

impl Term {
    pub fn coefficient(&self) -> i32 {
        match *self {
            Term::Constant(c) => c,
            Term::Power { coefficient, .. }
            | Term::Exponential { coefficient, .. }
            | Term::PowerRuleExponential { coefficient, .. }
            | Term::Trig { coefficient, .. } => coefficient,
        }
    }

    pub fn with_coefficient(&self, coefficient: i32) -> Term {
        match *self {
            Term::Constant(_) => Term::Constant(coefficient),
            Term::Power { exponent, .. } => Term::Power { coefficient, exponent },
            Term::Exponential { base, log_scaled, .. } => Term::Exponential { coefficient, base, log_scaled },
            Term::PowerRuleExponential { base, .. } => Term::PowerRuleExponential { coefficient, base },
            Term::Trig { function, .. } => Term::Trig { coefficient, function },
        }
    }

    pub fn negated(&self) -> Term {
        self.with_coefficient(-self.coefficient())
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient() == 0
    }

    fn write(&self, out: &mut String, leading: bool) {
        let coefficient = self.coefficient();
        match *self {
            Term::Constant(_) | Term::Power { exponent: 0, .. } => {
                formatter::write_coefficient_raw(out, coefficient, leading, false);
            },
            Term::Power { exponent: 1, .. } => {
                formatter::write_coefficient_raw(out, coefficient, leading, true);
                out.push('x');
            },
            Term::Power { exponent, .. } => {
                formatter::write_coefficient_raw(out, coefficient, leading, true);
                out.push_str(&format!("x^{exponent}"));
            },
            Term::Exponential { base: Base::E, .. } => {
                formatter::write_coefficient_raw(out, coefficient, leading, true);
                out.push_str("e^x");
            },
            Term::Exponential { base: Base::Integer(base), log_scaled, .. } => {
                write_scaled(out, coefficient, leading);
                if log_scaled {
                    out.push_str(&format!(r#"\ln({base}){LABEL_CDOT}"#));
                }
                out.push_str(&format!("{base}^x"));
            },
            Term::PowerRuleExponential { base: Base::E, .. } => {
                formatter::write_coefficient_raw(out, coefficient, leading, true);
                out.push_str("xe^{x-1}");
            },
            Term::PowerRuleExponential { base: Base::Integer(base), .. } => {
                write_scaled(out, coefficient, leading);
                out.push_str(&format!("x{LABEL_CDOT}{base}^{{x-1}}"));
            },
            Term::Trig { function, .. } => {
                formatter::write_coefficient_raw(out, coefficient, leading, true);
                out.push_str(function.markup());
            },
        }
    }
}

// `3 \cdot 2^x`, but `2^x` and `-2^x` for unit coefficients
fn write_scaled(out: &mut String, coefficient: i32, leading: bool) {
    formatter::write_coefficient_raw(out, coefficient, leading, true);
    if coefficient.unsigned_abs() != 1 {
        out.push_str(LABEL_CDOT);
    }
}

impl Expression {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn single(term: Term) -> Self {
        Self { terms: vec![term] }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(Term::is_zero)
    }

    pub fn render(&self) -> String {
        let mut result = String::new();
        for term in self.terms.iter().filter(|term| !term.is_zero()) {
            let leading = result.is_empty();
            term.write(&mut result, leading);
        }
        if result.is_empty() {
            result.push('0');
        }
        result
    }
}

impl Function {
    pub fn polynomial(coefficients: &[i32]) -> Self {
        Function::Polynomial { coefficients: coefficients.to_vec() }
    }

    pub fn exponential(coefficient: i32, base: Base) -> Self {
        Function::Exponential { coefficient, base }
    }

    pub fn trigonometric(coefficient: i32, function: Trig) -> Self {
        Function::Trigonometric { coefficient, function }
    }

    fn polynomial_terms(coefficients: &[i32]) -> impl Iterator<Item = (i32, u32)> + '_ {
        let degree = coefficients.len().saturating_sub(1);
        coefficients.iter().enumerate().map(move |(i, &c)| (c, (degree - i) as u32))
    }

    pub fn to_expression(&self) -> Expression {
        match self {
            Function::Polynomial { coefficients } => Expression::new(
                Self::polynomial_terms(coefficients)
                    .map(|(coefficient, exponent)| match exponent {
                        0 => Term::Constant(coefficient),
                        _ => Term::Power { coefficient, exponent },
                    })
                    .collect(),
            ),
            Function::Exponential { coefficient, base } => Expression::single(Term::Exponential {
                coefficient: *coefficient,
                base: *base,
                log_scaled: false,
            }),
            Function::Trigonometric { coefficient, function } => Expression::single(Term::Trig {
                coefficient: *coefficient,
                function: function.as_function(),
            }),
        }
    }

    pub fn derivative(&self) -> Expression {
        match self {
            // power rule, term by term; the constant vanishes
            Function::Polynomial { coefficients } => Expression::new(
                Self::polynomial_terms(coefficients)
                    .filter(|(_, exponent)| *exponent >= 1)
                    .map(|(coefficient, exponent)| match exponent - 1 {
                        0 => Term::Constant(coefficient),
                        reduced => Term::Power { coefficient: coefficient * exponent as i32, exponent: reduced },
                    })
                    .collect(),
            ),
            Function::Exponential { coefficient, base: Base::E } => Expression::single(Term::Exponential {
                coefficient: *coefficient,
                base: Base::E,
                log_scaled: false,
            }),
            Function::Exponential { coefficient, base } => Expression::single(Term::Exponential {
                coefficient: *coefficient,
                base: *base,
                log_scaled: true,
            }),
            Function::Trigonometric { coefficient, function } => Expression::single(match function {
                Trig::Sin => Term::Trig { coefficient: *coefficient, function: TrigFunction::Cos },
                Trig::Cos => Term::Trig { coefficient: -*coefficient, function: TrigFunction::Sin },
                Trig::Tan => Term::Trig { coefficient: *coefficient, function: TrigFunction::SecSquared },
            }),
        }
    }
}
