//! Deterministic RNG wrapper using PCG32.
//!
//! Every random draw made while synthesizing a texture goes through this
//! module, so a generator seeded with the same value always reproduces the
//! same layers.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Derive the seed used for the `call_index`-th generation call.
    pub fn derive_call_seed(base_seed: u32, call_index: u64) -> u32 {
        let mut input = Vec::with_capacity(12);
        input.extend_from_slice(&base_seed.to_le_bytes());
        input.extend_from_slice(&call_index.to_le_bytes());
        hash_to_u32(&input)
    }

    /// Derive a seed for a named stream (one per primitive family).
    pub fn derive_stream_seed(base_seed: u32, stream: &str) -> u32 {
        let mut input = Vec::with_capacity(4 + stream.len());
        input.extend_from_slice(&base_seed.to_le_bytes());
        input.extend_from_slice(stream.as_bytes());
        hash_to_u32(&input)
    }

    /// Derive a seed bound to a sample point, so point-local randomness is a
    /// pure function of its coordinates.
    pub fn derive_point_seed(base_seed: u32, x: f64, y: f64, level: u32) -> u32 {
        let mut input = Vec::with_capacity(24);
        input.extend_from_slice(&base_seed.to_le_bytes());
        input.extend_from_slice(&x.to_bits().to_le_bytes());
        input.extend_from_slice(&y.to_bits().to_le_bytes());
        input.extend_from_slice(&level.to_le_bytes());
        hash_to_u32(&input)
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random value in the given range.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }

    /// Generate a value in `[min, max)`; returns `min` when the span is empty.
    #[inline]
    pub fn gen_between(&mut self, min: f64, max: f64) -> f64 {
        min + self.gen_f64() * (max - min)
    }

    /// Pick an element count from an inclusive range.
    #[inline]
    pub fn gen_count(&mut self, range: RangeInclusive<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Return `true` with probability `p`.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.gen_f64() < p
    }

    /// Generate a random f64 in the range [-1.0, 1.0).
    #[inline]
    pub fn gen_signed_f64(&mut self) -> f64 {
        self.gen_f64() * 2.0 - 1.0
    }
}

fn hash_to_u32(input: &[u8]) -> u32 {
    let hash = blake3::hash(input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_output() {
        let mut rng1 = DeterministicRng::new(42);
        let mut rng2 = DeterministicRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_f64(), rng2.gen_f64());
        }
    }

    #[test]
    fn test_different_seeds_produce_different_output() {
        let mut rng1 = DeterministicRng::new(42);
        let mut rng2 = DeterministicRng::new(43);

        let any_different = (0..10).any(|_| rng1.gen_f64() != rng2.gen_f64());
        assert!(any_different);
    }

    #[test]
    fn test_derive_call_seed() {
        let first = DeterministicRng::derive_call_seed(42, 0);
        let second = DeterministicRng::derive_call_seed(42, 1);
        assert_ne!(first, second);
        assert_eq!(first, DeterministicRng::derive_call_seed(42, 0));
    }

    #[test]
    fn test_derive_stream_seed() {
        let veins = DeterministicRng::derive_stream_seed(42, "veins");
        let swirls = DeterministicRng::derive_stream_seed(42, "swirls");
        assert_ne!(veins, swirls);
        assert_eq!(veins, DeterministicRng::derive_stream_seed(42, "veins"));
    }

    #[test]
    fn test_derive_point_seed_depends_on_coordinates() {
        let a = DeterministicRng::derive_point_seed(7, 0.25, 0.5, 0);
        let b = DeterministicRng::derive_point_seed(7, 0.25, 0.5, 1);
        let c = DeterministicRng::derive_point_seed(7, 0.5, 0.25, 0);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, DeterministicRng::derive_point_seed(7, 0.25, 0.5, 0));
    }

    #[test]
    fn test_gen_count_stays_in_range() {
        let mut rng = DeterministicRng::new(9);
        for _ in 0..500 {
            let n = rng.gen_count(2..=5);
            assert!((2..=5).contains(&n));
        }
    }
}
