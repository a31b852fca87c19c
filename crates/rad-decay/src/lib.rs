//! `rad-decay` — analytic decay curves for the chart views.
//!
//! Everything here is pure: no shared state, no dependency on the particle
//! engine.  The only randomness (spectrum noise) comes in through a caller
//! supplied [`rad_core::RandomSource`].
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`model`]      | `DecayModel`, lazy `DecaySeries`, `decay_activity`    |
//! | [`isotope`]    | `Isotope` presets, `TimeUnit`, multi-isotope tables   |
//! | [`spectrum`]   | `SpectrumProfile` gamma-line spectra                  |
//!
//! # Quick-start
//!
//! ```
//! use rad_decay::{DecayModel, decay_activity};
//!
//! let model = DecayModel::new(8.0).unwrap();          // I-131, days
//! let half = model.activity(8.0).unwrap();
//! assert!((half - 50.0).abs() < 1e-9);
//!
//! let curve: Vec<_> = model.series(99.0, 1.0).unwrap().collect();
//! assert_eq!(curve.len(), 100);
//!
//! let points = decay_activity(6.0, [0.0, 6.0, 12.0]).unwrap();
//! assert!((points[2].activity - 25.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod isotope;
pub mod model;
pub mod spectrum;

#[cfg(test)]
mod tests;

pub use error::{DecayError, DecayResult};
pub use isotope::{DecayTable, Isotope, TimeUnit};
pub use model::{DecayModel, DecaySample, DecaySeries, activity, decay_activity};
pub use spectrum::{SpectralLine, SpectrumProfile, SpectrumSample};
