//! Simulation time model.
//!
//! # Design
//!
//! Simulated time is a millisecond counter advanced only by the simulation
//! clock in fixed sub-steps.  It never reads the wall clock: an external
//! driver passes frame deltas in, and the clock converts them into a
//! deterministic sequence of equal steps.
//!
//! Motion is integrated in *seconds* (`base_speed` is units per second), so
//! [`SimTime::secs`] and [`ClockConfig::fixed_step_secs`] exist to keep the
//! unit conversion in one place.

use std::fmt;

use crate::{ConfigResult, validate};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp in milliseconds since the last reset.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn ms(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn secs(self) -> f64 {
        self.0 * 0.001
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs_ms: f64) -> SimTime {
        SimTime(self.0 + rhs_ms)
    }
}

impl std::ops::AddAssign<f64> for SimTime {
    #[inline]
    fn add_assign(&mut self, rhs_ms: f64) {
        self.0 += rhs_ms;
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}ms", self.0)
    }
}

// ── ClockConfig ───────────────────────────────────────────────────────────────

/// Frame-to-step conversion settings for the simulation clock.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClockConfig {
    /// Largest frame delta accepted in one `step` call.  Larger deltas (a
    /// backgrounded host, a debugger pause) are clamped to this.  Default 100.
    pub max_frame_ms: f64,

    /// Size of one physics sub-step.  Default 1000/60 (one display frame).
    pub fixed_step_ms: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            max_frame_ms:  100.0,
            fixed_step_ms: 1000.0 / 60.0,
        }
    }
}

impl ClockConfig {
    /// Fixed sub-step length in seconds.
    #[inline]
    pub fn fixed_step_secs(&self) -> f64 {
        self.fixed_step_ms * 0.001
    }

    pub fn validate(&self) -> ConfigResult<()> {
        validate::positive("max_frame_ms", self.max_frame_ms)?;
        validate::positive("fixed_step_ms", self.fixed_step_ms)?;
        Ok(())
    }
}
