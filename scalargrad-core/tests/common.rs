use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of random draws used by the property-style tests.
#[allow(dead_code)]
pub const SAMPLES: usize = 200;

// Seeded so failures are reproducible.
#[allow(dead_code)]
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

/// Draws a scalar in `[-bound, bound)`.
#[allow(dead_code)]
pub fn draw(rng: &mut StdRng, bound: f64) -> f64 {
    rng.gen_range(-bound..bound)
}

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
