//! The set of barriers and fields one simulation interacts with.

use rad_core::{BarrierId, ConfigResult, FieldId, RandomSource, Vec3};
use rad_particle::Particle;
use tracing::debug;

use crate::{Barrier, FieldRegion, Interaction};

/// Barriers and fields, evaluated in insertion order.
///
/// [`BarrierId`] and [`FieldId`] are indices into the two lists.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Scene {
    pub barriers: Vec<Barrier>,
    pub fields:   Vec<FieldRegion>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_barrier(mut self, barrier: Barrier) -> Self {
        self.barriers.push(barrier);
        self
    }

    pub fn with_field(mut self, field: FieldRegion) -> Self {
        self.fields.push(field);
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        for b in &self.barriers {
            b.validate()?;
            if b.region.is_degenerate() {
                debug!(barrier = %b.name, region = %b.region, "degenerate barrier will never match");
            }
        }
        for f in &self.fields {
            f.validate()?;
        }
        Ok(())
    }

    pub fn barrier(&self, id: BarrierId) -> Option<&Barrier> {
        self.barriers.get(id.index())
    }

    pub fn field(&self, id: FieldId) -> Option<&FieldRegion> {
        self.fields.get(id.index())
    }

    pub fn is_empty(&self) -> bool {
        self.barriers.is_empty() && self.fields.is_empty()
    }

    /// Let the first barrier containing `particle` act on it.  At most one
    /// barrier interacts per call.
    pub fn resolve<R: RandomSource + ?Sized>(
        &self,
        particle: &mut Particle,
        previous: Vec3,
        rng:      &mut R,
    ) -> Option<(BarrierId, Interaction)> {
        self.barriers.iter().enumerate().find_map(|(i, b)| {
            b.interact(particle, previous, rng).map(|outcome| (BarrierId(i as u32), outcome))
        })
    }

    /// Apply every field containing `particle`.  Returns how many deflected it.
    pub fn deflect(&self, particle: &mut Particle) -> usize {
        self.fields.iter().filter(|f| f.apply(particle)).count()
    }
}
