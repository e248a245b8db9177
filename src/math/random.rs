//! Random number source
//!
//! Particle systems take the source by reference at construction instead of
//! reaching for a process-wide generator, so every simulation can run with
//! its own seed.

use rand::distr::Uniform;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform float generator consumed by particle generation
pub trait RandomSource {
    /// Uniform float in `[min, max]`; bounds may be given in either order.
    /// Infinite bounds are clamped to a finite range and a NaN bound
    /// collapses onto the other one.
    fn random_float(&mut self, min: f32, max: f32) -> f32;
}

/// Largest magnitude a sampled bound is clamped to, so `max - min` stays finite
const BOUND_LIMIT: f32 = f32::MAX / 4.0;

/// Seeded PCG generator
#[derive(Debug, Clone)]
pub struct NumberTheory {
    seed: u64,
    rng: Pcg32,
}

impl NumberTheory {
    /// Deterministic generator for the given seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the thread-local entropy source
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::random();
        log::debug!("Seeding number theory with {}", seed);
        Self::from_seed(seed)
    }

    /// Seed this generator was created from (for reproducing a run)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for NumberTheory {
    fn random_float(&mut self, min: f32, max: f32) -> f32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let lo = lo.clamp(-BOUND_LIMIT, BOUND_LIMIT);
        let hi = hi.clamp(-BOUND_LIMIT, BOUND_LIMIT);
        if lo == hi {
            return lo;
        }
        match Uniform::new_inclusive(lo, hi) {
            Ok(uniform) => self.rng.sample(uniform),
            // NaN bound
            Err(_) => {
                if lo.is_finite() {
                    lo
                } else if hi.is_finite() {
                    hi
                } else {
                    0.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_float_in_range() {
        let mut nt = NumberTheory::from_seed(7);
        for _ in 0..1000 {
            let f = nt.random_float(-50.0, 50.0);
            assert!((-50.0..=50.0).contains(&f));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = NumberTheory::from_seed(42);
        let mut b = NumberTheory::from_seed(42);
        for _ in 0..32 {
            assert_eq!(a.random_float(0.0, 1.0), b.random_float(0.0, 1.0));
        }
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_degenerate_and_reversed_bounds() {
        let mut nt = NumberTheory::from_seed(1);
        assert_eq!(nt.random_float(3.0, 3.0), 3.0);
        let f = nt.random_float(2.0, -2.0);
        assert!((-2.0..=2.0).contains(&f));
    }

    #[test]
    fn test_non_finite_bounds_do_not_panic() {
        let mut nt = NumberTheory::from_seed(3);
        let f = nt.random_float(f32::NEG_INFINITY, f32::INFINITY);
        assert!(f.is_finite());
        let f = nt.random_float(-f32::MAX, f32::MAX);
        assert!(f.is_finite());
        assert_eq!(nt.random_float(f32::INFINITY, f32::INFINITY), BOUND_LIMIT);
        assert_eq!(nt.random_float(f32::NAN, 4.0), 4.0);
        assert_eq!(nt.random_float(f32::NAN, f32::NAN), 0.0);
    }
}
