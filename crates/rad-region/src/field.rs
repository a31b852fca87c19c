//! Deflecting field regions.
//!
//! Inside a field's box every sub-step adds the species coefficient to the
//! velocity's transverse component.  Species without a coefficient (γ in the
//! usual α/β/γ setup) pass undeflected.

use std::collections::BTreeMap;

use rad_core::{Aabb, Axis, ConfigResult, Species, Vec3, validate};
use rad_particle::Particle;

/// What happens to speed after a deflection.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpeedPolicy {
    /// Add the kick and keep the resulting magnitude; particles speed up
    /// the longer they stay in the field.
    #[default]
    Accumulate,
    /// Rotate only: rescale to the pre-kick speed after each kick.
    Renormalize,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldRegion {
    pub name:            String,
    pub region:          Aabb,
    pub transverse_axis: Axis,
    /// Signed velocity change per sub-step, per species.
    #[cfg_attr(feature = "serde", serde(default))]
    pub coefficients:    BTreeMap<Species, f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub speed_policy:    SpeedPolicy,
}

impl FieldRegion {
    pub fn new(name: impl Into<String>, region: Aabb, transverse_axis: Axis) -> Self {
        Self {
            name: name.into(),
            region,
            transverse_axis,
            coefficients: BTreeMap::new(),
            speed_policy: SpeedPolicy::default(),
        }
    }

    pub fn with_coefficient(mut self, species: Species, coefficient: f64) -> ConfigResult<Self> {
        let c = validate::finite("field.coefficient", coefficient)?;
        self.coefficients.insert(species, c);
        Ok(self)
    }

    pub fn with_speed_policy(mut self, policy: SpeedPolicy) -> Self {
        self.speed_policy = policy;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        for &c in self.coefficients.values() {
            validate::finite("field.coefficient", c)?;
        }
        for c in self.region.min.to_array().into_iter().chain(self.region.max.to_array()) {
            validate::finite("field.region", c)?;
        }
        Ok(())
    }

    /// Coefficient for `species`; zero if none is set.
    #[inline]
    pub fn coefficient(&self, species: Species) -> f64 {
        self.coefficients.get(&species).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn contains(&self, position: Vec3) -> bool {
        self.region.contains(position)
    }

    /// Deflect `particle` if it is inside the field.  Returns `true` if the
    /// velocity changed.
    pub fn apply(&self, particle: &mut Particle) -> bool {
        if !self.contains(particle.position) {
            return false;
        }
        let c = self.coefficient(particle.species);
        if c == 0.0 {
            return false;
        }

        let speed = particle.velocity.length();
        particle.velocity[self.transverse_axis.index()] += c;
        if self.speed_policy == SpeedPolicy::Renormalize {
            particle.velocity = particle.velocity.normalize_or_zero() * speed;
        }
        true
    }
}
