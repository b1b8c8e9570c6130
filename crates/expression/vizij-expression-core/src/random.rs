//! Injectable uniform random draws for the blink trigger.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[lo, hi)`.
pub trait RandomSource {
    fn uniform(&mut self, lo: f32, hi: f32) -> f32;
}

/// Default source backed by a seedable `StdRng`.
#[derive(Clone, Debug)]
pub struct ThreadRandom {
    rng: StdRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }
}

/// Replays a fixed queue of unit draws, each mapped onto `[lo, hi)`.
///
/// Once the queue is exhausted every draw returns `fallback`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<f32>,
    fallback: f32,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback: 0.0,
        }
    }

    pub fn with_fallback(mut self, fallback: f32) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn push(&mut self, unit: f32) {
        self.draws.push_back(unit);
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        let unit = self.draws.pop_front().unwrap_or(self.fallback);
        lo + (hi - lo) * unit
    }
}
