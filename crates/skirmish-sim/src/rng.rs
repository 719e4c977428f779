//! Deterministic random generator. Every random draw in the engine goes
//! through here.
//!
//! The bit-stream is ChaCha8 seeded with `seed_from_u64`. Each draw takes
//! the next `u64` from the stream and keeps its top 53 bits as a fraction
//! in `[0, 1)`, so the sequence is portable across platforms and can be
//! rebuilt by any implementation of ChaCha8.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// 2^-53, the spacing of the draws in `[0, 1)`.
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

#[derive(Debug, Clone)]
pub struct Drng {
    rng: ChaCha8Rng,
}

impl Drng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Next draw in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        (self.rng.next_u64() >> 11) as f64 * UNIT_SCALE
    }

    /// True with probability `p`. Callers clamp `p` to `[0, 1]`.
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Draw in `[low, high)`.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_unit()
    }
}
