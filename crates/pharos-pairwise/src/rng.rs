//! Filler value selection for forced cases.
//!
//! The only randomness in the whole pipeline. It is injected behind a trait
//! so a seeded source gives reproducible suites and tests can pin the
//! choice. Same parameters + same seed -> same suite, always.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of filler values for the slots of a forced case that are not
/// pinned by the targeted pair.
///
/// `values` is always a validated, non-empty domain.
pub trait FillerSource {
    /// Pick one value from the domain.
    fn pick<'a>(&mut self, values: &'a [String]) -> &'a str;
}

/// Deterministic filler backed by ChaCha8 with an explicit seed.
pub struct SeededFiller {
    rng: ChaCha8Rng,
}

impl SeededFiller {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl FillerSource for SeededFiller {
    fn pick<'a>(&mut self, values: &'a [String]) -> &'a str {
        &values[self.rng.gen_range(0..values.len())]
    }
}

/// Always picks the first domain value. For tests that need the filler
/// choice pinned without threading a seed through.
pub struct FirstValueFiller;

impl FillerSource for FirstValueFiller {
    fn pick<'a>(&mut self, values: &'a [String]) -> &'a str {
        &values[0]
    }
}
