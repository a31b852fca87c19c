//! `rad-core` — foundational types for the `rad` particle–barrier engine.
//!
//! This crate is a dependency of every other `rad-*` crate.  It has no
//! `rad-*` dependencies and few external ones (`glam`, `rand`, `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ParticleId`, `BarrierId`, `FieldId`                  |
//! | [`geom`]        | `Vec3`, `Axis`, `Aabb`                                |
//! | [`species`]     | `Species` enum                                        |
//! | [`rng`]         | `RandomSource` port, `SimRng`, `ReplayRng`            |
//! | [`time`]        | `SimTime`, `ClockConfig`                              |
//! | [`config`]      | `SimulationConfig` and its policy enums               |
//! | [`validate`]    | field-level checks shared by every config type        |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public config types. |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod species;
pub mod time;
pub mod validate;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Dimensions, OverflowPolicy, SimulationConfig, SpeciesWeight};
pub use error::{ConfigError, ConfigResult};
pub use geom::{Aabb, Axis, Vec3};
pub use ids::{BarrierId, FieldId, ParticleId};
pub use rng::{RandomSource, ReplayRng, SimRng};
pub use species::Species;
pub use time::{ClockConfig, SimTime};
