use rand::Rng;

const MULTIPLIER: i64 = 1103515245;
const INCREMENT: i64 = 12345;
const MODULUS: i64 = i32::MAX as i64;
const DEFAULT_SEED: i64 = 3819201;

/// Source of randomness for agents that pick among legal moves.
pub trait RandomGenerator: Default {
    /// Returns the next non-negative number of the sequence.
    fn next(&mut self) -> i32;

    /// Returns a number in `from..to`, or `from` itself when the range is empty.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks one element of `items` uniformly, `None` when it is empty.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        let len = i32::try_from(items.len()).ok()?;
        if len == 0 {
            return None;
        }
        let index = self.next_range(0, len);
        items.get(usize::try_from(index).ok()?)
    }
}

/// Generator backed by the thread-local `rand` generator.
#[derive(Debug, Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        rand::rng().random_range(0..=i32::MAX)
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        if to <= from {
            return from;
        }
        rand::rng().random_range(from..to)
    }
}

/// Seeded linear congruential generator, for reproducible runs.
///
/// Any `i64` is accepted as a seed; it is first reduced into
/// `0..i32::MAX`, so the state never leaves that range.
#[derive(Debug)]
pub struct CustomNumberGenerator {
    state: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl CustomNumberGenerator {
    /// Creates a generator whose sequence is fully determined by `seed`.
    pub const fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(MODULUS),
        }
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        // state < 2^31 and MULTIPLIER < 2^31, so the product fits in an i64
        self.state = (self.state * MULTIPLIER + INCREMENT).rem_euclid(MODULUS);
        self.state as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        if to <= from {
            return from;
        }
        let span = i64::from(to) - i64::from(from);
        (i64::from(self.next()) % span + i64::from(from)) as i32
    }
}
