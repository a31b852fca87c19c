//! Simulation observer trait for progress reporting and data collection.

use rad_core::SimTime;
use rad_particle::Population;

use crate::StepReport;

/// Callbacks invoked by [`Simulation::step_with`][crate::Simulation::step_with]
/// and [`Simulation::run_for`][crate::Simulation::run_for].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: absorption counter
///
/// ```
/// use rad_sim::{SimObserver, StepReport};
///
/// #[derive(Default)]
/// struct Absorbed(usize);
///
/// impl SimObserver for Absorbed {
///     fn on_step_end(&mut self, report: &StepReport) {
///         self.0 += report.absorbed;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a running simulation processes a frame delta.
    fn on_step_start(&mut self, _time: SimTime) {}

    /// Called after the frame's sub-steps have been committed.
    fn on_step_end(&mut self, _report: &StepReport) {}

    /// Called after every committed frame that ran at least one sub-step,
    /// with read-only access to the live particles.
    fn on_snapshot(&mut self, _time: SimTime, _population: &Population) {}

    /// Called when the active particle count changes across a frame.
    fn on_population_changed(&mut self, _time: SimTime, _active: usize) {}

    /// Called once when [`run_for`][crate::Simulation::run_for] completes
    /// without error.
    fn on_run_end(&mut self, _report: &StepReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
