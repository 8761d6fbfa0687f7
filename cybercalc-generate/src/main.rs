// Batch entry point: prints generated questions as JSON lines

use ::std::io::Write;
use lazy_static::lazy_static;
use rand::{rngs::StdRng, SeedableRng};
use common_types::Generate::Difficulty;
use cybercalc_generate::generate;

pub type E = Box<dyn ::std::error::Error + Send + Sync + 'static>;

const DEFAULT_LEVEL: i32 = 1;
const DEFAULT_COUNT: usize = 1;

lazy_static!{
    static ref LEVEL: i32 = {
        parse_var("CYBERCALC_LEVEL").unwrap_or(DEFAULT_LEVEL)
    };
    static ref DIFFICULTY: Option<Difficulty> = {
        parse_var("CYBERCALC_DIFFICULTY")
    };
    static ref COUNT: usize = {
        parse_var("CYBERCALC_COUNT").unwrap_or(DEFAULT_COUNT)
    };
    static ref SEED: Option<u64> = {
        parse_var("CYBERCALC_SEED")
    };
}

fn parse_var<T>(key: &str) -> Option<T>
where
    T: ::std::str::FromStr,
    T::Err: ::std::fmt::Display,
{
    let raw = dotenvy::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("Ignoring {key}={raw}: {err}");
            None
        },
    }
}

fn main() -> Result<(), E> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let mut rng = match *SEED {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!("Generating {} question(s), level {}, difficulty {:?}", *COUNT, *LEVEL, *DIFFICULTY);

    let stdout = ::std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..*COUNT {
        let question = match *DIFFICULTY {
            Some(difficulty) => generate::generate_for_difficulty(&mut rng, difficulty),
            None => generate::generate_question(&mut rng, *LEVEL),
        };
        serde_json::to_writer(&mut out, &question)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
