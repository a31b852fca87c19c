//! The random-number port used by every stochastic decision in the engine.
//!
//! # Determinism strategy
//!
//! Nothing in the engine reaches for a thread-local or global generator.
//! Emission jitter, species selection and barrier outcomes all draw from a
//! [`RandomSource`] owned by the simulation instance, so:
//!
//! - Two side-by-side simulations never perturb each other's sequences.
//! - A seeded [`SimRng`] reproduces a run exactly.
//! - Tests can script exact draws with [`ReplayRng`] to hit probability
//!   boundaries deterministically.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// Source of uniform draws in `[0, 1)`.
///
/// Only [`next_f64`](Self::next_f64) is required; the helpers are expressed
/// in terms of it so every implementation consumes draws identically.
pub trait RandomSource {
    /// A uniformly distributed value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform in `[lo, hi)`.
    #[inline]
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Uniform in `[-width / 2, +width / 2)`.
    #[inline]
    fn spread(&mut self, width: f64) -> f64 {
        self.uniform(-0.5 * width, 0.5 * width)
    }

    /// Index of an entry chosen with probability proportional to its weight.
    ///
    /// Returns `None` if no weight is positive.  Consumes exactly one draw
    /// whenever the total weight is positive.
    fn pick_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        if total <= 0.0 {
            return None;
        }
        let mut target = self.next_f64() * total;
        let mut last = None;
        for (i, &w) in weights.iter().enumerate() {
            if w <= 0.0 {
                continue;
            }
            if target < w {
                return Some(i);
            }
            target -= w;
            last = Some(i);
        }
        // Rounding can leave `target` a hair above the final weight.
        last
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded default generator for a simulation instance.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, used to give
    /// each worker of a parallel experiment its own stream.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        // `Standard` for f64 samples the half-open interval [0, 1).
        self.0.r#gen::<f64>()
    }
}

// ── ReplayRng ─────────────────────────────────────────────────────────────────

/// A scripted source that replays a fixed list of draws, cycling when it
/// reaches the end.
///
/// Values are clamped into `[0, 1)` on construction so a script can never
/// produce an out-of-contract draw.
#[derive(Clone, Debug)]
pub struct ReplayRng {
    values: Vec<f64>,
    cursor: usize,
}

impl ReplayRng {
    /// Replay `values` in order.  An empty script behaves like `[0.0]`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values: Vec<f64> = values.into();
        if values.is_empty() {
            values.push(0.0);
        }
        for v in &mut values {
            *v = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0 - f64::EPSILON) };
        }
        Self { values, cursor: 0 }
    }

    /// Always return `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ReplayRng {
    fn next_f64(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
