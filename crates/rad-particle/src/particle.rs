//! Per-particle state.

use std::collections::VecDeque;

use rad_core::{ParticleId, SimTime, Species, Vec3};

// ── Trail ─────────────────────────────────────────────────────────────────────

/// Bounded FIFO of past positions, newest at the tail.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Trail {
    points:   VecDeque<Vec3>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self { points: VecDeque::with_capacity(capacity), capacity }
    }

    /// Append `p`, dropping the oldest point once at capacity.  A zero
    /// capacity trail records nothing.
    pub fn push(&mut self, p: Vec3) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, dropping the oldest points if it shrank.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        let excess = self.points.len().saturating_sub(capacity);
        self.points.drain(..excess);
    }

    pub fn newest(&self) -> Option<Vec3> {
        self.points.back().copied()
    }

    pub fn oldest(&self) -> Option<Vec3> {
        self.points.front().copied()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Vec3> + '_ {
        self.points.iter()
    }
}

// ── Particle ──────────────────────────────────────────────────────────────────

/// One simulated particle.
///
/// Owned by a [`Population`](crate::Population); only the simulation's step
/// pass mutates it.  Renderers read [`ParticleSnapshot`]s or borrow it
/// immutably between steps.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id:         ParticleId,
    pub species:    Species,
    pub position:   Vec3,
    /// Scene units per simulated second.
    pub velocity:   Vec3,
    pub trail:      Trail,
    /// Cleared on absorption; the population drops inactive particles in the
    /// same pass.
    pub active:     bool,
    pub created_at: SimTime,
}

impl Particle {
    /// A fresh, active particle whose trail starts at its birth position.
    pub fn new(
        id:             ParticleId,
        species:        Species,
        position:       Vec3,
        velocity:       Vec3,
        created_at:     SimTime,
        trail_capacity: usize,
    ) -> Self {
        let mut trail = Trail::new(trail_capacity);
        trail.push(position);
        Self { id, species, position, velocity, trail, active: true, created_at }
    }

    /// Explicit Euler position update over `dt_secs`.
    #[inline]
    pub fn advance(&mut self, dt_secs: f64) {
        self.position += self.velocity * dt_secs;
    }

    /// Record the current position in the trail.
    #[inline]
    pub fn record_trail(&mut self) {
        self.trail.push(self.position);
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Mark absorbed.
    #[inline]
    pub fn retire(&mut self) {
        self.active = false;
    }

    /// `true` when position and velocity are free of NaN and infinities.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    /// Simulated milliseconds since emission.
    pub fn age_ms(&self, now: SimTime) -> f64 {
        now.since(self.created_at)
    }
}

// ── ParticleSnapshot ──────────────────────────────────────────────────────────

/// An owned, read-only copy of one particle for rendering collaborators.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleSnapshot {
    pub id:         ParticleId,
    pub species:    Species,
    pub position:   Vec3,
    pub velocity:   Vec3,
    /// Oldest to newest.
    pub trail:      Vec<Vec3>,
    pub created_at: SimTime,
}

impl From<&Particle> for ParticleSnapshot {
    fn from(p: &Particle) -> Self {
        Self {
            id:         p.id,
            species:    p.species,
            position:   p.position,
            velocity:   p.velocity,
            trail:      p.trail.iter().copied().collect(),
            created_at: p.created_at,
        }
    }
}
