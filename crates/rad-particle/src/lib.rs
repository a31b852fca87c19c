//! `rad-particle` — particle lifecycle for the rad engine.
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`particle`]    | `Particle`, bounded `Trail`, `ParticleSnapshot`       |
//! | [`source`]      | `ParticleSource` — interval/batch emission            |
//! | [`population`]  | `Population` — cap, FIFO eviction, single-pass sweep  |
//!
//! A particle is born in [`ParticleSource::maybe_emit`], lives in a
//! [`Population`], is mutated once per sub-step inside
//! [`Population::try_sweep`], and leaves the population when it is absorbed,
//! crosses the boundary sphere, or is evicted to make room.
//!
//! ```
//! use rad_core::{SimRng, SimTime, SimulationConfig};
//! use rad_particle::{ParticleSource, Population};
//!
//! let config = SimulationConfig { emission_batch: 3, ..Default::default() };
//! let mut source = ParticleSource::from_config(&config);
//! let mut population = Population::from_config(&config);
//! let mut rng = SimRng::new(1);
//!
//! let emission = source.maybe_emit(SimTime(0.0), &mut population, &mut rng);
//! assert_eq!(emission.emitted, 3);
//! assert_eq!(population.len(), 3);
//! ```

pub mod particle;
pub mod population;
pub mod source;


pub use particle::{Particle, ParticleSnapshot, Trail};
pub use population::{Admission, Population, SweepReport};
pub use source::{Emission, ParticleSource};
