//! Probabilistic barriers.
//!
//! # Collision rule
//!
//! A barrier acts on a particle whose *new* position (after integration)
//! lies inside its box.  One uniform draw selects the outcome:
//!
//! | Outcome     | Effect                                                        |
//! |-------------|---------------------------------------------------------------|
//! | reflect     | normal velocity negated; placed `ε` outside the entry face    |
//! | transmit    | velocity unchanged; placed `ε` outside the far face           |
//! | absorb      | particle marked inactive                                      |
//!
//! Either repositioning leaves the particle outside the box, so one crossing
//! can never trigger twice.  A barrier with a non-zero `energy_loss` also
//! scales the velocity of reflected and transmitted particles by
//! `1 − energy_loss`.
//!
//! The entry face comes from the pre-integration position along the normal
//! axis: below the box means the low face, above means the high face.  A
//! particle that was already inside (emitted there, or pushed in by a field)
//! falls back to the sign of its normal velocity, then to the nearer face.

use std::collections::BTreeMap;

use rad_core::{Aabb, Axis, ConfigResult, RandomSource, Species, Vec3, validate};
use rad_particle::Particle;

use crate::{Interaction, InteractionProbabilities};

/// Distance outside a face at which reflected/transmitted particles land.
pub const DEFAULT_SURFACE_EPSILON: f64 = 0.01;

#[cfg(feature = "serde")]
fn default_surface_epsilon() -> f64 {
    DEFAULT_SURFACE_EPSILON
}

/// An axis-aligned slab of material with interaction probabilities.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Barrier {
    /// Label used in logs and output (`"paper"`, `"lead"`, ...).
    pub name:          String,
    pub region:        Aabb,
    /// Axis of the faces particles cross.
    pub normal_axis:   Axis,
    pub probabilities: InteractionProbabilities,
    /// Per-species replacements for `probabilities`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub overrides:     BTreeMap<Species, InteractionProbabilities>,
    #[cfg_attr(feature = "serde", serde(default = "default_surface_epsilon"))]
    pub surface_epsilon: f64,
    /// Fraction of speed lost on reflection or transmission, in `[0, 1)`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy_loss:     f64,
}

impl Barrier {
    pub fn new(
        name:          impl Into<String>,
        region:        Aabb,
        normal_axis:   Axis,
        probabilities: InteractionProbabilities,
    ) -> Self {
        Self {
            name: name.into(),
            region,
            normal_axis,
            probabilities,
            overrides: BTreeMap::new(),
            surface_epsilon: DEFAULT_SURFACE_EPSILON,
            energy_loss: 0.0,
        }
    }

    /// Use `probabilities` for `species` instead of the barrier default.
    pub fn with_override(mut self, species: Species, probabilities: InteractionProbabilities) -> Self {
        self.overrides.insert(species, probabilities);
        self
    }

    pub fn with_surface_epsilon(mut self, epsilon: f64) -> ConfigResult<Self> {
        self.surface_epsilon = validate::positive("surface_epsilon", epsilon)?;
        Ok(self)
    }

    pub fn with_energy_loss(mut self, loss: f64) -> ConfigResult<Self> {
        self.energy_loss = validate::fraction("energy_loss", loss)?;
        Ok(self)
    }

    /// Re-check the fields that are not validated by their types.
    pub fn validate(&self) -> ConfigResult<()> {
        validate::positive("surface_epsilon", self.surface_epsilon)?;
        validate::fraction("energy_loss", self.energy_loss)?;
        for c in self.region.min.to_array().into_iter().chain(self.region.max.to_array()) {
            validate::finite("barrier.region", c)?;
        }
        Ok(())
    }

    /// Probabilities that apply to `species`.
    pub fn probabilities_for(&self, species: Species) -> &InteractionProbabilities {
        self.overrides.get(&species).unwrap_or(&self.probabilities)
    }

    #[inline]
    pub fn contains(&self, position: Vec3) -> bool {
        self.region.contains(position)
    }

    /// Resolve a collision for `particle`, whose position before this
    /// sub-step's integration was `previous`.
    ///
    /// Returns `None` without drawing if the particle is not inside the box.
    pub fn interact<R: RandomSource + ?Sized>(
        &self,
        particle: &mut Particle,
        previous: Vec3,
        rng:      &mut R,
    ) -> Option<Interaction> {
        if !self.contains(particle.position) {
            return None;
        }

        let outcome = self.probabilities_for(particle.species).classify(rng.next_f64());
        let a = self.normal_axis.index();
        let low = self.region.low(self.normal_axis) - self.surface_epsilon;
        let high = self.region.high(self.normal_axis) + self.surface_epsilon;
        let from_low = self.enters_from_low(previous, particle.velocity);

        match outcome {
            Interaction::Reflected => {
                particle.velocity[a] = -particle.velocity[a];
                particle.position[a] = if from_low { low } else { high };
                particle.velocity *= 1.0 - self.energy_loss;
            }
            Interaction::Transmitted => {
                particle.position[a] = if from_low { high } else { low };
                particle.velocity *= 1.0 - self.energy_loss;
            }
            Interaction::Absorbed => particle.retire(),
        }
        Some(outcome)
    }

    fn enters_from_low(&self, previous: Vec3, velocity: Vec3) -> bool {
        let a = self.normal_axis.index();
        let low = self.region.low(self.normal_axis);
        let high = self.region.high(self.normal_axis);
        let p = previous[a];

        if p < low {
            true
        } else if p > high {
            false
        } else if velocity[a] != 0.0 {
            velocity[a] > 0.0
        } else {
            p - low <= high - p
        }
    }
}
