use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// All engine randomness flows through one seeded generator so a game can be
/// reproduced from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform sample in `[0, count)`, one grid axis at a time.
    pub fn sample_axis(&mut self, count: i32) -> i32 {
        self.rng.random_range(0..count)
    }
}
