use rand::Rng;

/// Upper bound (exclusive) for generation seeds.
pub const SEED_RANGE: u32 = 1_000_000;

/// Source of generation seeds, injected through the application state so
/// tests can pin the seed the proxy sends upstream.
pub trait SeedSource: Send + Sync {
    fn next_seed(&self) -> u32;
}

/// Production source: uniform draw from the thread RNG.
pub struct ThreadRngSeed;

impl SeedSource for ThreadRngSeed {
    fn next_seed(&self) -> u32 {
        rand::thread_rng().gen_range(0..SEED_RANGE)
    }
}

/// Fixed source for deterministic tests.
pub struct FixedSeed(pub u32);

impl SeedSource for FixedSeed {
    fn next_seed(&self) -> u32 {
        self.0
    }
}
