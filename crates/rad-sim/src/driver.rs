//! External frame scheduling handles and scoped runs.
//!
//! The engine never schedules itself.  A host (an animation-frame loop, a
//! timer, a test harness) calls [`Simulation::step`] and may register the
//! handle it uses to keep calling.  The simulation cancels that handle
//! exactly once: on `stop()`, `reset()`, replacement, or drop, whichever
//! comes first.

use std::ops::{Deref, DerefMut};

use rad_core::{RandomSource, SimRng};

use crate::Simulation;

/// A host-side registration that keeps frames coming.
pub trait FrameHandle {
    /// Stop delivering frames.  Called at most once per handle.
    fn cancel(&mut self);
}

/// A [`FrameHandle`] backed by a closure.
pub struct CallbackHandle<F: FnMut()> {
    on_cancel: F,
}

impl<F: FnMut()> CallbackHandle<F> {
    pub fn new(on_cancel: F) -> Self {
        Self { on_cancel }
    }
}

impl<F: FnMut()> FrameHandle for CallbackHandle<F> {
    fn cancel(&mut self) {
        (self.on_cancel)();
    }
}

/// Starts a simulation on creation and stops it on drop, so a scoped run
/// always releases its particles and frame handle, including on early
/// return or unwind.
///
/// ```
/// use rad_core::SimulationConfig;
/// use rad_sim::{RunState, Simulation};
///
/// let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
/// {
///     let mut run = sim.run_guard();
///     run.step(100.0).unwrap();
///     assert!(run.active_count() > 0);
/// }
/// assert_eq!(sim.state(), RunState::Stopped);
/// assert_eq!(sim.active_count(), 0);
/// ```
pub struct RunGuard<'a, R: RandomSource = SimRng> {
    sim: &'a mut Simulation<R>,
}

impl<'a, R: RandomSource> RunGuard<'a, R> {
    pub fn new(sim: &'a mut Simulation<R>) -> Self {
        sim.start();
        Self { sim }
    }
}

impl<R: RandomSource> Deref for RunGuard<'_, R> {
    type Target = Simulation<R>;
    fn deref(&self) -> &Simulation<R> {
        self.sim
    }
}

impl<R: RandomSource> DerefMut for RunGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut Simulation<R> {
        self.sim
    }
}

impl<R: RandomSource> Drop for RunGuard<'_, R> {
    fn drop(&mut self) {
        self.sim.stop();
    }
}
