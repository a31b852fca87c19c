//! `rad-region` — the material a particle can meet on its way out.
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`probability`]  | `InteractionProbabilities`, `Interaction`                 |
//! | [`barrier`]      | `Barrier` — reflect / transmit / absorb slab              |
//! | [`field`]        | `FieldRegion`, `SpeedPolicy` — per-species deflection     |
//! | [`scene`]        | `Scene` — ordered barriers and fields of one simulation   |
//! | [`experiment`]   | `measure_attenuation` — single-crossing Monte Carlo tally |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `serde`    | `Serialize`/`Deserialize` on scenes, barriers and fields    |
//! | `parallel` | attenuation experiment chunks run on the Rayon pool         |
//!
//! ```
//! use rad_core::{Aabb, Axis, Species, Vec3};
//! use rad_region::{Barrier, Interaction, InteractionProbabilities, measure_attenuation};
//!
//! let lead = Barrier::new(
//!     "lead",
//!     Aabb::from_center(Vec3::ZERO, Vec3::new(0.1, 1.25, 1.25)),
//!     Axis::X,
//!     InteractionProbabilities::new(0.8, 0.15).unwrap(),
//! );
//! let tally = measure_attenuation(&lead, Species::Generic, 10_000, 7).unwrap();
//! assert_eq!(tally.trials, 10_000);
//! assert!(tally.fraction(Interaction::Reflected) > 0.7);
//! ```

pub mod barrier;
pub mod experiment;
pub mod field;
pub mod probability;
pub mod scene;

#[cfg(test)]
mod tests;

pub use barrier::{Barrier, DEFAULT_SURFACE_EPSILON};
pub use experiment::{AttenuationTally, measure_attenuation};
pub use field::{FieldRegion, SpeedPolicy};
pub use probability::{Interaction, InteractionProbabilities};
pub use scene::Scene;
