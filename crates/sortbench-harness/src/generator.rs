//! Random input generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound for generated values.
pub const VALUE_CEILING: i32 = 100;

/// Source of the random integer sequences the benchmark sorts.
///
/// Values are uniform over `[0, VALUE_CEILING)`. Two generators built
/// from the same seed produce identical sequences, which makes a whole
/// benchmark run reproducible input-wise.
#[derive(Debug)]
pub struct InputGenerator {
    rng: StdRng,
}

impl InputGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a generator with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produces a sequence of `len` values in `[0, VALUE_CEILING)`.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_harness::{InputGenerator, VALUE_CEILING};
    ///
    /// let mut generator = InputGenerator::with_seed(1);
    /// let values = generator.generate(64);
    ///
    /// assert_eq!(values.len(), 64);
    /// assert!(values.iter().all(|&v| (0..VALUE_CEILING).contains(&v)));
    /// ```
    pub fn generate(&mut self, len: usize) -> Vec<i32> {
        (0..len)
            .map(|_| self.rng.random_range(0..VALUE_CEILING))
            .collect()
    }
}

impl Default for InputGenerator {
    fn default() -> Self {
        Self::new()
    }
}
