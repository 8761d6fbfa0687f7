use rand::Rng;

use crate::generate::question::Question;

pub mod probability;

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Question {
    probability::generate(rng)
}
