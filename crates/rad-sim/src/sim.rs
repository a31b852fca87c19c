//! The `Simulation` struct and its frame loop.

use rad_core::{ClockConfig, RandomSource, SimRng, SimTime, SimulationConfig, validate};
use rad_particle::{Particle, ParticleSnapshot, ParticleSource, Population, SweepReport};
use rad_region::Scene;
use tracing::{debug, trace, warn};

use crate::{
    FrameHandle, NoopObserver, RunGuard, RunState, SimError, SimObserver, SimResult,
    SimulationBuilder, SimulationClock, StepReport,
};

type PopulationListener = Box<dyn FnMut(usize)>;

// ── Simulation ────────────────────────────────────────────────────────────────

/// One independent particle–barrier simulation.
///
/// Each `step` converts a driver frame delta into fixed sub-steps and runs,
/// per sub-step:
///
/// 1. **Emit**: the source fires if its interval has elapsed, evicting or
///    rejecting at the cap per [`OverflowPolicy`](rad_core::OverflowPolicy).
/// 2. **Sweep**: one pass over the live set that, per particle, integrates
///    position, resolves at most one barrier interaction, applies fields,
///    records the trail, and drops the particle if it was absorbed or
///    crossed the boundary sphere.
///
/// The frame's work is done on a staged copy of the population, source and
/// clock; it replaces the live state only if every sub-step succeeded.
///
/// Every instance owns its config, scene, generator, listeners and frame
/// handle.  Create via [`SimulationBuilder`] or [`Simulation::new`].
pub struct Simulation<R: RandomSource = SimRng> {
    pub(crate) config:     SimulationConfig,
    pub(crate) scene:      Scene,
    pub(crate) clock:      SimulationClock,
    pub(crate) source:     ParticleSource,
    pub(crate) population: Population,
    pub(crate) rng:        R,
    pub(crate) driver:     Option<Box<dyn FrameHandle>>,
    pub(crate) listeners:  Vec<PopulationListener>,
    pub(crate) totals:     StepReport,
}

impl Simulation<SimRng> {
    /// A stopped simulation with an empty scene, the default clock, and a
    /// generator seeded from `config.seed`.
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        SimulationBuilder::new(config).build()
    }

    pub fn builder(config: SimulationConfig) -> SimulationBuilder<SimRng> {
        SimulationBuilder::new(config)
    }
}

impl<R: RandomSource> Simulation<R> {
    // ── Configuration ─────────────────────────────────────────────────────

    /// Validate and apply `config`.  On error nothing changes.
    ///
    /// Live particles keep their state; a lower cap trims the oldest ones.
    /// The injected generator is not reseeded.
    pub fn configure(&mut self, config: SimulationConfig) -> SimResult<()> {
        config.validate()?;
        let dropped = self.population.set_limits(&config);
        self.source.reconfigure(&config);
        debug!(
            max_particles = config.max_particles,
            interval_ms = config.emission_interval_ms,
            dropped = dropped.len(),
            "simulation reconfigured"
        );
        self.config = config;
        self.notify_listeners();
        Ok(())
    }

    /// Validate and replace the barriers and fields.
    pub fn set_scene(&mut self, scene: Scene) -> SimResult<()> {
        scene.validate()?;
        debug!(barriers = scene.barriers.len(), fields = scene.fields.len(), "scene replaced");
        self.scene = scene;
        Ok(())
    }

    /// Validate and replace the frame settings.
    pub fn set_clock(&mut self, clock: ClockConfig) -> SimResult<()> {
        clock.validate()?;
        self.clock.set_config(clock);
        Ok(())
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// `Stopped` or `Paused` → `Running`.
    pub fn start(&mut self) {
        if !self.clock.is_running() {
            self.transition(RunState::Running);
        }
    }

    /// `Running` → `Paused`.
    pub fn pause(&mut self) {
        if self.clock.state() == RunState::Running {
            self.transition(RunState::Paused);
        }
    }

    /// `Paused` → `Running`.
    pub fn resume(&mut self) {
        if self.clock.state() == RunState::Paused {
            self.transition(RunState::Running);
        }
    }

    /// Flip between `Running` and `Paused`.  No effect when stopped.
    pub fn toggle_pause(&mut self) {
        match self.clock.state() {
            RunState::Running => self.transition(RunState::Paused),
            RunState::Paused  => self.transition(RunState::Running),
            RunState::Stopped => {}
        }
    }

    /// Any state → `Stopped`: clear particles, rewind time, release the
    /// frame handle.  Later `step` calls are no-ops until `start`.
    pub fn stop(&mut self) {
        self.transition(RunState::Stopped);
        self.population.clear();
        self.clock.reset();
        self.source.reset_timer();
        self.release_driver();
        self.notify_listeners();
    }

    /// [`stop`](Self::stop), and also zero the cumulative totals.
    pub fn reset(&mut self) {
        self.stop();
        self.totals = StepReport::default();
    }

    /// Start now and stop when the returned guard drops.
    pub fn run_guard(&mut self) -> RunGuard<'_, R> {
        RunGuard::new(self)
    }

    fn transition(&mut self, to: RunState) {
        let from = self.clock.state();
        if self.clock.set_state(to) {
            debug!(%from, %to, time = self.clock.now().ms(), "run state changed");
        }
    }

    // ── Host integration ──────────────────────────────────────────────────

    /// Register the handle the host uses to keep delivering frames.  A
    /// previously attached handle is cancelled first.
    pub fn attach_driver(&mut self, handle: impl FrameHandle + 'static) {
        self.release_driver();
        self.driver = Some(Box::new(handle));
    }

    pub fn has_driver(&self) -> bool {
        self.driver.is_some()
    }

    fn release_driver(&mut self) {
        if let Some(mut handle) = self.driver.take() {
            handle.cancel();
            debug!("frame handle released");
        }
    }

    /// Call `listener` with the active count whenever it changes, and on
    /// every stop, reset and reconfigure.
    pub fn on_population_changed(&mut self, listener: impl FnMut(usize) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify_listeners(&mut self) {
        let active = self.population.len();
        for listener in &mut self.listeners {
            listener(active);
        }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// One driver frame of `delta_ms` wall milliseconds.
    pub fn step(&mut self, delta_ms: f64) -> SimResult<StepReport> {
        self.step_with(delta_ms, &mut NoopObserver)
    }

    /// [`step`](Self::step) with observer callbacks.
    ///
    /// Not running: returns an idle report and touches nothing.  On
    /// [`SimError::NonFiniteState`] the particles, time and source are
    /// exactly as before the call; random draws already taken are not
    /// returned to the generator.
    pub fn step_with<O: SimObserver + ?Sized>(
        &mut self,
        delta_ms: f64,
        observer: &mut O,
    ) -> SimResult<StepReport> {
        let before = self.population.len();
        if !self.clock.is_running() {
            return Ok(StepReport::idle(self.clock.now(), before));
        }
        observer.on_step_start(self.clock.now());

        let mut clock = self.clock.clone();
        let substeps = clock.advance(delta_ms);
        let mut report = StepReport::idle(clock.now(), before);

        if substeps > 0 {
            let mut population = self.population.clone();
            let mut source = self.source.clone();
            let dt_secs = clock.fixed_step_secs() * self.config.time_scale;

            for _ in 0..substeps {
                let now = clock.tick();

                let emission = source.maybe_emit(now, &mut population, &mut self.rng);
                report.emitted += emission.emitted;
                report.evicted += emission.evicted.len();
                report.rejected += emission.rejected;

                match sweep(&self.scene, &mut population, &mut self.rng, dt_secs, now, &mut report) {
                    Ok(swept) => report.escaped += swept.escaped,
                    Err(e) => {
                        warn!(error = %e, "step rejected, live particles unchanged");
                        return Err(e);
                    }
                }
            }

            report.substeps = substeps;
            report.time = clock.now();
            report.active = population.len();
            self.population = population;
            self.source = source;
        }
        self.clock = clock;
        self.totals.merge(&report);

        trace!(
            time = report.time.ms(),
            substeps = report.substeps,
            emitted = report.emitted,
            evicted = report.evicted,
            absorbed = report.absorbed,
            escaped = report.escaped,
            active = report.active,
            "step"
        );

        observer.on_step_end(&report);
        if report.substeps > 0 {
            observer.on_snapshot(report.time, &self.population);
        }
        if report.active != before {
            observer.on_population_changed(report.time, report.active);
            self.notify_listeners();
        }
        Ok(report)
    }

    /// Feed `total_ms` of frames of at most `frame_ms` each and return the
    /// merged report.  Steps are no-ops unless the simulation is running.
    pub fn run_for<O: SimObserver + ?Sized>(
        &mut self,
        total_ms: f64,
        frame_ms: f64,
        observer: &mut O,
    ) -> SimResult<StepReport> {
        validate::non_negative("total_ms", total_ms)?;
        validate::positive("frame_ms", frame_ms)?;

        let mut summary = StepReport::idle(self.clock.now(), self.population.len());
        let mut elapsed = 0.0;
        while elapsed < total_ms {
            let delta = frame_ms.min(total_ms - elapsed);
            summary.merge(&self.step_with(delta, observer)?);
            elapsed += delta;
        }
        observer.on_run_end(&summary);
        Ok(summary)
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn state(&self) -> RunState {
        self.clock.state()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Live particles, oldest first.
    pub fn active_particles(&self) -> impl ExactSizeIterator<Item = &Particle> + '_ {
        self.population.iter()
    }

    pub fn active_count(&self) -> usize {
        self.population.len()
    }

    /// Owned copies of every live particle, oldest first.
    pub fn snapshot(&self) -> Vec<ParticleSnapshot> {
        self.population.iter().map(ParticleSnapshot::from).collect()
    }

    /// Counts accumulated since construction or the last [`reset`](Self::reset).
    pub fn totals(&self) -> &StepReport {
        &self.totals
    }
}

impl<R: RandomSource> Drop for Simulation<R> {
    fn drop(&mut self) {
        self.release_driver();
    }
}

/// One sub-step of motion and interaction over `population`.
fn sweep<Q: RandomSource + ?Sized>(
    scene:      &Scene,
    population: &mut Population,
    rng:        &mut Q,
    dt_secs:    f64,
    now:        SimTime,
    report:     &mut StepReport,
) -> SimResult<SweepReport> {
    population.try_sweep(|p| {
        let before = p.position;
        p.advance(dt_secs);
        if let Some((_, outcome)) = scene.resolve(p, before, rng) {
            report.count(outcome);
        }
        if p.active {
            scene.deflect(p);
        }
        if !p.is_finite() {
            return Err(SimError::NonFiniteState { id: p.id, time: now });
        }
        p.record_trail();
        Ok(())
    })
}
