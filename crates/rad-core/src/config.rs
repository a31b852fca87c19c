//! Per-instance simulation configuration.
//!
//! A `SimulationConfig` is owned by exactly one simulation.  There is no
//! process-wide "current config": two simulations mounted side by side each
//! hold their own copy, and reconfiguring one never touches the other.

use crate::{ConfigError, ConfigResult, Species, Vec3, validate};

// ── Policy enums ──────────────────────────────────────────────────────────────

/// What the population manager does when an emission would exceed the cap.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverflowPolicy {
    /// Evict the oldest live particle to make room (FIFO).
    #[default]
    EvictOldest,
    /// Refuse the new particle; the live set is left untouched.
    Reject,
}

/// Whether emission directions spread in a plane or a cone.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dimensions {
    /// Canvas-style scene: one spread angle in the x–y plane, `z` fixed at 0.
    Planar,
    /// Two independent spread angles around orthogonal axes.
    #[default]
    Spatial,
}

/// One entry of the emission species mix.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesWeight {
    pub species: Species,
    pub weight:  f64,
}

impl SpeciesWeight {
    pub fn new(species: Species, weight: f64) -> Self {
        Self { species, weight }
    }
}

// ── SimulationConfig ──────────────────────────────────────────────────────────

/// Scalar parameters of one simulation instance.
///
/// Geometry (barriers, fields) is supplied separately; this struct holds
/// only the emission, population and integration settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Minimum simulated milliseconds between emissions.  Must be positive.
    pub emission_interval_ms: f64,

    /// Particles created per emission.  Default 1.
    pub emission_batch: usize,

    /// Population cap.  Must be at least 1.
    pub max_particles: usize,

    /// Behavior when an emission meets a full population.
    pub overflow: OverflowPolicy,

    /// Initial speed in scene units per simulated second.
    pub base_speed: f64,

    /// Extra speed fraction drawn uniformly from `[0, speed_jitter)` at
    /// emission.  `0.0` gives every particle exactly `base_speed`.
    pub speed_jitter: f64,

    /// Full width of the emission fan/cone in degrees.
    pub angular_spread_deg: f64,

    /// Particles farther than this from `boundary_center` are retired.
    pub boundary_radius: f64,

    pub boundary_center: Vec3,

    /// Emission point.  Particles leave along `+X`.
    pub source_origin: Vec3,

    pub dimensions: Dimensions,

    /// Trail capacity in positions.  `0` disables trails.
    pub trail_length: usize,

    /// Simulated seconds per driver second.
    pub time_scale: f64,

    /// Weighted species selection at emission.
    pub species_mix: Vec<SpeciesWeight>,

    /// Seed for the default generator.  Ignored when a generator is injected.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            emission_interval_ms: 5.0,
            emission_batch:       1,
            max_particles:        400,
            overflow:             OverflowPolicy::EvictOldest,
            base_speed:           5.0,
            speed_jitter:         0.0,
            angular_spread_deg:   10.0,
            boundary_radius:      20.0,
            boundary_center:      Vec3::ZERO,
            source_origin:        Vec3::new(-5.0, 0.0, 0.0),
            dimensions:           Dimensions::Spatial,
            trail_length:         20,
            time_scale:           1.0,
            species_mix:          vec![SpeciesWeight::new(Species::Generic, 1.0)],
            seed:                 42,
        }
    }
}

impl SimulationConfig {
    /// Check every invariant.  Called by the simulation at configure time;
    /// nothing is clamped.
    pub fn validate(&self) -> ConfigResult<()> {
        validate::positive("emission_interval_ms", self.emission_interval_ms)?;
        validate::at_least_one("emission_batch", self.emission_batch)?;
        validate::at_least_one("max_particles", self.max_particles)?;
        validate::positive("base_speed", self.base_speed)?;
        validate::non_negative("speed_jitter", self.speed_jitter)?;
        validate::non_negative("angular_spread_deg", self.angular_spread_deg)?;
        validate::positive("boundary_radius", self.boundary_radius)?;
        validate::positive("time_scale", self.time_scale)?;
        for c in self.boundary_center.to_array() {
            validate::finite("boundary_center", c)?;
        }
        for c in self.source_origin.to_array() {
            validate::finite("source_origin", c)?;
        }
        for entry in &self.species_mix {
            validate::non_negative("species_mix.weight", entry.weight)?;
        }
        if !self.species_mix.iter().any(|e| e.weight > 0.0) {
            return Err(ConfigError::EmptySpeciesMix);
        }
        Ok(())
    }

    /// Spread width in radians.
    #[inline]
    pub fn angular_spread_rad(&self) -> f64 {
        self.angular_spread_deg.to_radians()
    }
}
