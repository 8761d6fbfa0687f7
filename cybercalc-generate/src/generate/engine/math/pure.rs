use rand::Rng;

use crate::generate::question::Question;

pub mod differentiation;
pub mod expression;

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Question {
    differentiation::generate(rng)
}
