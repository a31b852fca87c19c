//! The exponential decay model.
//!
//! ```text
//! activity(t) = 100 · exp(−λ t),   λ = ln 2 / half_life
//! ```
//!
//! Time is unit-agnostic: `t` and `half_life` just have to share a unit
//! (hours for diagnostic isotopes, days for therapeutic ones).

use std::f64::consts::LN_2;

use rad_core::validate;

use crate::{DecayError, DecayResult};

/// Activity at `t = 0`, in percent.
pub const INITIAL_ACTIVITY: f64 = 100.0;

/// Upper bound on the samples one series may produce.
pub const MAX_SAMPLES: usize = 1_000_000;

/// One `(time, activity)` point of a decay curve.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecaySample {
    pub time:     f64,
    /// Remaining activity in percent of the initial value, in `[0, 100]`.
    pub activity: f64,
}

// ── DecayModel ────────────────────────────────────────────────────────────────

/// A validated half-life.  Cheap to copy; holds no mutable state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DecayModel {
    half_life: f64,
    lambda:    f64,
}

impl DecayModel {
    /// Fails unless `half_life` is finite and positive.
    pub fn new(half_life: f64) -> DecayResult<Self> {
        let half_life = validate::positive("half_life", half_life)?;
        Ok(Self::from_validated(half_life))
    }

    pub(crate) fn from_validated(half_life: f64) -> Self {
        Self { half_life, lambda: LN_2 / half_life }
    }

    #[inline]
    pub fn half_life(&self) -> f64 {
        self.half_life
    }

    /// Decay constant `λ = ln 2 / half_life`.
    #[inline]
    pub fn decay_constant(&self) -> f64 {
        self.lambda
    }

    /// Remaining activity in percent after `t`.
    pub fn activity(&self, t: f64) -> DecayResult<f64> {
        check_time(t)?;
        Ok(self.activity_at(t))
    }

    #[inline]
    fn activity_at(&self, t: f64) -> f64 {
        INITIAL_ACTIVITY * (-self.lambda * t).exp()
    }

    /// Lazy curve sampled every `resolution` from `0` up to and including
    /// `horizon` (when `horizon` is a whole number of steps).
    ///
    /// Fails with [`DecayError::TooManySamples`] if the curve would need more
    /// than [`MAX_SAMPLES`] points.  The returned iterator is finite and
    /// `Clone`; call
    /// [`DecaySeries::rewind`] or `series` again to replay it.
    pub fn series(&self, horizon: f64, resolution: f64) -> DecayResult<DecaySeries> {
        let horizon    = validate::non_negative("horizon", horizon)?;
        let resolution = validate::positive("resolution", resolution)?;
        // Tolerate horizons like 0.3 / 0.1 landing a hair under a whole step.
        let steps = (horizon / resolution + 1e-9).floor();
        if !steps.is_finite() || steps >= MAX_SAMPLES as f64 {
            return Err(DecayError::TooManySamples { horizon, resolution, max: MAX_SAMPLES });
        }
        Ok(DecaySeries { model: *self, resolution, next: 0, len: steps as usize + 1 })
    }
}

/// `activity(t, half_life)` as a free function for one-off queries.
pub fn activity(t: f64, half_life: f64) -> DecayResult<f64> {
    DecayModel::new(half_life)?.activity(t)
}

/// Evaluate the curve at caller-chosen times.
///
/// Every time is checked before any result is produced, so a single bad
/// entry rejects the whole query.
pub fn decay_activity<I>(half_life: f64, times: I) -> DecayResult<Vec<DecaySample>>
where
    I: IntoIterator<Item = f64>,
{
    let model = DecayModel::new(half_life)?;
    let times: Vec<f64> = times.into_iter().collect();
    for &t in &times {
        check_time(t)?;
    }
    Ok(times
        .into_iter()
        .map(|time| DecaySample { time, activity: model.activity_at(time) })
        .collect())
}

fn check_time(t: f64) -> DecayResult<()> {
    if t.is_finite() && t >= 0.0 {
        Ok(())
    } else {
        Err(DecayError::NegativeTime(t))
    }
}

// ── DecaySeries ───────────────────────────────────────────────────────────────

/// Iterator over evenly spaced samples of a [`DecayModel`].
#[derive(Clone, Debug)]
pub struct DecaySeries {
    model:      DecayModel,
    resolution: f64,
    next:       usize,
    len:        usize,
}

impl DecaySeries {
    /// Restart from `t = 0`.
    pub fn rewind(&mut self) {
        self.next = 0;
    }

    pub fn model(&self) -> DecayModel {
        self.model
    }
}

impl Iterator for DecaySeries {
    type Item = DecaySample;

    fn next(&mut self) -> Option<DecaySample> {
        if self.next >= self.len {
            return None;
        }
        let time = self.next as f64 * self.resolution;
        self.next += 1;
        Some(DecaySample { time, activity: self.model.activity_at(time) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for DecaySeries {}
