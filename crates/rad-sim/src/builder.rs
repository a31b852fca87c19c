//! Fluent builder for constructing a [`Simulation`].

use rad_core::{ClockConfig, RandomSource, SimRng, SimulationConfig};
use rad_particle::{ParticleSource, Population};
use rad_region::{Barrier, FieldRegion, Scene};

use crate::{SimResult, Simulation, SimulationClock, StepReport};

/// Fluent builder for [`Simulation<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                              |
/// |-----------------|--------------------------------------|
/// | `.scene(s)`     | empty `Scene`                        |
/// | `.barrier(b)`   | appended to the scene                |
/// | `.field(f)`     | appended to the scene                |
/// | `.clock(c)`     | `ClockConfig::default()`             |
/// | `.rng(r)`       | `SimRng::new(config.seed)`           |
///
/// # Example
///
/// ```
/// use rad_core::{Aabb, Axis, SimulationConfig, Vec3};
/// use rad_region::{Barrier, InteractionProbabilities};
/// use rad_sim::SimulationBuilder;
///
/// let lead = Barrier::new(
///     "lead",
///     Aabb::from_center(Vec3::ZERO, Vec3::new(0.1, 1.25, 1.25)),
///     Axis::X,
///     InteractionProbabilities::new(0.8, 0.15).unwrap(),
/// );
/// let sim = SimulationBuilder::new(SimulationConfig::default())
///     .barrier(lead)
///     .build()
///     .unwrap();
/// assert_eq!(sim.scene().barriers.len(), 1);
/// ```
pub struct SimulationBuilder<R: RandomSource = SimRng> {
    config: SimulationConfig,
    scene:  Scene,
    clock:  ClockConfig,
    rng:    R,
}

impl SimulationBuilder<SimRng> {
    pub fn new(config: SimulationConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self { config, scene: Scene::new(), clock: ClockConfig::default(), rng }
    }
}

impl<R: RandomSource> SimulationBuilder<R> {
    pub fn scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    pub fn barrier(mut self, barrier: Barrier) -> Self {
        self.scene.barriers.push(barrier);
        self
    }

    pub fn field(mut self, field: FieldRegion) -> Self {
        self.scene.fields.push(field);
        self
    }

    pub fn clock(mut self, clock: ClockConfig) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the random source.  `config.seed` is then unused.
    pub fn rng<Q: RandomSource>(self, rng: Q) -> SimulationBuilder<Q> {
        SimulationBuilder { config: self.config, scene: self.scene, clock: self.clock, rng }
    }

    /// Validate every input and return a stopped [`Simulation`].
    pub fn build(self) -> SimResult<Simulation<R>> {
        self.config.validate()?;
        self.clock.validate()?;
        self.scene.validate()?;

        Ok(Simulation {
            source:     ParticleSource::from_config(&self.config),
            population: Population::from_config(&self.config),
            clock:      SimulationClock::new(self.clock),
            config:     self.config,
            scene:      self.scene,
            rng:        self.rng,
            driver:     None,
            listeners:  Vec::new(),
            totals:     StepReport::default(),
        })
    }
}
