use rand::{
    Rng,
    distributions::{Alphanumeric, Distribution, Uniform},
};

pub const TOKEN_LENGTH: usize = 7;

struct Filter<Dist, Test> {
    dist: Dist,
    test: Test,
    attempts: usize,
}
impl <Dist, Test> Filter<Dist, Test> {
    fn sample_bounded<T, R>(&self, rng: &mut R) -> Option<T>
    where
        Dist: Distribution<T>,
        Test: Fn(&T) -> bool,
        R: Rng + ?Sized,
    {
        for _ in 0..self.attempts {
            let x = self.dist.sample(rng);
            if (self.test)(&x) {
                return Some(x);
            }
        }
        None
    }
}

/// Uniform integer in `[min, max]`, both ends inclusive.
pub fn gen_range_i32<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(low..=high)
}

/// Uniform integer in `[min, max]` other than `except`. Gives up after `attempts` draws.
pub fn gen_range_i32_except<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32, except: i32, attempts: usize) -> Option<i32> {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let dist = Filter {
        dist: Uniform::new_inclusive(low, high),
        test: |x: &i32| *x != except,
        attempts,
    };
    dist.sample_bounded(rng)
}

/// Uniform float in `[min, max)`.
pub fn gen_range_f64<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..max)
}

pub fn random_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

pub fn question_id<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1000..=9999)
}

pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

pub fn choose<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
