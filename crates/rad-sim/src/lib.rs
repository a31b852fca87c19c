//! `rad-sim` — clock-driven frame loop for the rad particle–barrier engine.
//!
//! # Frame loop
//!
//! ```text
//! step(delta_ms):
//!   not Running          → no-op
//!   delta → clamp(0, max_frame_ms) → accumulator → n fixed sub-steps
//!   stage copies of population, source, clock
//!   for each sub-step:
//!     ① Emit   — source fires if its interval elapsed (cap: evict / reject)
//!     ② Sweep  — per particle, in one pass:
//!                  integrate → first containing barrier → fields →
//!                  trail → drop if absorbed or outside the boundary
//!   commit staged state (or discard all of it on a non-finite particle)
//!   observers / population listeners
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Serde derives on config, scene and report types            |
//! | `parallel` | Attenuation experiments run on Rayon's thread pool         |
//!
//! # Quick-start
//!
//! ```
//! use rad_core::SimulationConfig;
//! use rad_sim::{NoopObserver, Simulation};
//!
//! let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
//! sim.start();
//! let report = sim.run_for(500.0, 16.0, &mut NoopObserver).unwrap();
//! assert!(report.emitted > 0);
//! assert!(sim.active_count() <= sim.config().max_particles);
//! sim.stop();
//! ```

pub mod builder;
pub mod clock;
pub mod driver;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimulationBuilder;
pub use clock::{RunState, SimulationClock};
pub use driver::{CallbackHandle, FrameHandle, RunGuard};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::StepReport;
pub use sim::Simulation;

/// Stateless decay-curve query, re-exported for chart views that sit next
/// to a simulation.
pub use rad_decay::{DecaySample, decay_activity};
