//! Random draws used by the scorers, behind a small trait so callers can pin outputs.
//!
//! Production code gets a `SeededRandom` per request (OS entropy, or a fixed seed from
//! config for reproducible runs). Unit tests use `FixedRandom`, which maps every draw
//! to a fixed position inside its range.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform float in `[lo, hi]`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
    /// `amount` distinct indices from `0..len`, in random order. `amount` is capped at `len`.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>;
    /// Index drawn proportionally to `weights`. Falls back to 0 if no weight is positive.
    fn weighted(&mut self, weights: &[f64]) -> usize;
}

#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }

    fn weighted(&mut self, weights: &[f64]) -> usize {
        match WeightedIndex::new(weights) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => 0,
        }
    }
}

/// Hands out random sources for each submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFactory {
    seed: Option<u64>,
}

impl RandomFactory {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn fresh(&self) -> SeededRandom {
        match self.seed {
            Some(s) => SeededRandom::with_seed(s),
            None => SeededRandom::from_entropy(),
        }
    }
}

/// Deterministic source: `unit` in `[0,1]` picks the same relative point of every range.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedRandom {
    pub unit: f64,
}

#[cfg(test)]
impl FixedRandom {
    pub fn low() -> Self {
        Self { unit: 0.0 }
    }
    pub fn mid() -> Self {
        Self { unit: 0.5 }
    }
    pub fn high() -> Self {
        Self { unit: 1.0 }
    }
}

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit
    }

    fn pick(&mut self, len: usize) -> usize {
        ((len as f64 * self.unit) as usize).min(len.saturating_sub(1))
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        // unit < 0.5 keeps the head of the pool, otherwise the tail.
        let amount = amount.min(len);
        if self.unit < 0.5 {
            (0..amount).collect()
        } else {
            (len - amount..len).collect()
        }
    }

    fn weighted(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        if total <= 0.0 {
            return 0;
        }
        let target = total * self.unit;
        let mut acc = 0.0;
        for (i, w) in weights.iter().enumerate() {
            acc += w.max(0.0);
            if target < acc {
                return i;
            }
        }
        weights.len() - 1
    }
}
