//! The live particle set.
//!
//! Particles are stored oldest-first in a `VecDeque`, so FIFO eviction is a
//! `pop_front` and emission is a `push_back`.  The cap is enforced on every
//! insert: `len() <= cap()` holds between any two calls.

use std::collections::VecDeque;

use rad_core::{OverflowPolicy, SimulationConfig, Vec3};
use tracing::debug;

use crate::Particle;

/// Outcome of [`Population::admit`].
#[derive(Debug, PartialEq)]
pub enum Admission {
    Admitted,
    /// Admitted after evicting the returned (oldest) particle.
    Evicted(Particle),
    /// Refused; the population was full under [`OverflowPolicy::Reject`].
    Rejected(Particle),
}

/// Removal counts from one [`Population::try_sweep`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Removed because `active` was cleared during the sweep.
    pub inactive: usize,
    /// Removed because they left the boundary sphere.
    pub escaped:  usize,
}

/// Capped, insertion-ordered set of live particles.
#[derive(Clone, Debug)]
pub struct Population {
    particles:       VecDeque<Particle>,
    cap:             usize,
    overflow:        OverflowPolicy,
    boundary_center: Vec3,
    boundary_radius: f64,
}

impl Population {
    pub fn new(
        cap:             usize,
        overflow:        OverflowPolicy,
        boundary_center: Vec3,
        boundary_radius: f64,
    ) -> Self {
        Self {
            particles: VecDeque::with_capacity(cap.min(4096)),
            cap,
            overflow,
            boundary_center,
            boundary_radius,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.max_particles,
            config.overflow,
            config.boundary_center,
            config.boundary_radius,
        )
    }

    /// Adopt new limits.  If the cap shrank, the oldest particles are
    /// dropped and returned.  Live trails take the new trail length.
    pub fn set_limits(&mut self, config: &SimulationConfig) -> Vec<Particle> {
        self.cap = config.max_particles;
        self.overflow = config.overflow;
        self.boundary_center = config.boundary_center;
        self.boundary_radius = config.boundary_radius;

        let excess = self.particles.len().saturating_sub(self.cap);
        if excess > 0 {
            debug!(excess, cap = self.cap, "cap lowered, trimming oldest particles");
        }
        let dropped = self.particles.drain(..excess).collect();
        for p in &mut self.particles {
            p.trail.set_capacity(config.trail_length);
        }
        dropped
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.particles.len() >= self.cap
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// `true` if `position` lies outside the retirement sphere.
    #[inline]
    pub fn is_out_of_bounds(&self, position: Vec3) -> bool {
        position.distance(self.boundary_center) > self.boundary_radius
    }

    /// Oldest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Particle> + '_ {
        self.particles.iter()
    }

    pub fn oldest(&self) -> Option<&Particle> {
        self.particles.front()
    }

    pub fn newest(&self) -> Option<&Particle> {
        self.particles.back()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Insert `particle`, applying the overflow policy if the set is full.
    pub fn admit(&mut self, particle: Particle) -> Admission {
        if !self.is_full() {
            self.particles.push_back(particle);
            return Admission::Admitted;
        }
        match self.overflow {
            OverflowPolicy::Reject => Admission::Rejected(particle),
            OverflowPolicy::EvictOldest => match self.particles.pop_front() {
                Some(old) => {
                    self.particles.push_back(particle);
                    Admission::Evicted(old)
                }
                // Only reachable with a zero cap, which validation forbids.
                None => Admission::Rejected(particle),
            },
        }
    }

    /// Run `f` on every particle in insertion order, then drop those that
    /// ended inactive or outside the boundary.
    ///
    /// Mutation, interaction and removal all happen in this one pass.  If
    /// `f` fails, the particles after the failing one are left untouched and
    /// the error is returned; callers that need all-or-nothing semantics
    /// sweep a clone and commit it only on success.
    pub fn try_sweep<E, F>(&mut self, mut f: F) -> Result<SweepReport, E>
    where
        F: FnMut(&mut Particle) -> Result<(), E>,
    {
        let mut report = SweepReport::default();
        let mut failure = None;
        let mut particles = std::mem::take(&mut self.particles);

        particles.retain_mut(|p| {
            if failure.is_some() {
                return true;
            }
            if let Err(e) = f(p) {
                failure = Some(e);
                return true;
            }
            if !p.active {
                report.inactive += 1;
                false
            } else if self.is_out_of_bounds(p.position) {
                report.escaped += 1;
                false
            } else {
                true
            }
        });
        self.particles = particles;

        match failure {
            Some(e) => Err(e),
            None    => Ok(report),
        }
    }
}
