use std::ops::RangeInclusive;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Picks the secret number for a round.
pub trait TargetSource {
    fn generate(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Uniform over the range. Seeded so a round can be replayed with `SEED`.
pub struct RandomTarget {
    rng: StdRng,
    seed: u64,
}

impl RandomTarget {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
        debug!(target: "target", "Seeding target generator with {}", seed);
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TargetSource for RandomTarget {
    fn generate(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.random_range(range)
    }
}

/// Always the same number.
pub struct FixedTarget(pub u32);

impl TargetSource for FixedTarget {
    fn generate(&mut self, range: RangeInclusive<u32>) -> u32 {
        debug_assert!(range.contains(&self.0));
        self.0
    }
}

pub fn generate(min: u32, max: u32) -> u32 {
    RandomTarget::new(None).generate(min..=max)
}
