//! Interval-gated particle emission.
//!
//! # Emission rule
//!
//! A source fires when `now − last_emission ≥ emission_interval_ms` (or it
//! has never fired).  Each firing creates `emission_batch` particles at
//! `source_origin` heading along `+X`, rotated by random spread angles:
//!
//! ```text
//! spatial:  θ, φ ~ U[−s/2, +s/2]
//!           v = speed · (cos θ cos φ,  sin φ,  sin θ cos φ)
//! planar:   φ ~ U[−s/2, +s/2]
//!           v = speed · (cos φ,  sin φ,  0)
//! ```
//!
//! With [`OverflowPolicy::Reject`] a full population blocks the firing
//! entirely (the interval timer is not reset, so the source fires again as
//! soon as room appears).  With [`OverflowPolicy::EvictOldest`] each new
//! particle displaces the oldest live one.

use rad_core::{
    Dimensions, OverflowPolicy, ParticleId, RandomSource, SimTime, SimulationConfig, Species, Vec3,
};
use tracing::trace;

use crate::{Admission, Particle, Population};

/// Result of one [`ParticleSource::maybe_emit`] call.
#[derive(Debug, Default)]
pub struct Emission {
    /// Particles admitted to the population.
    pub emitted:  usize,
    /// Particles displaced by FIFO eviction to make room.
    pub evicted:  Vec<Particle>,
    /// Particles refused under [`OverflowPolicy::Reject`].
    pub rejected: usize,
}

/// Emission policy plus the small amount of state it needs between calls.
#[derive(Clone, Debug)]
pub struct ParticleSource {
    origin:         Vec3,
    dimensions:     Dimensions,
    base_speed:     f64,
    speed_jitter:   f64,
    spread_rad:     f64,
    interval_ms:    f64,
    batch:          usize,
    trail_length:   usize,
    overflow:       OverflowPolicy,
    species:        Vec<Species>,
    weights:        Vec<f64>,
    last_emission:  Option<SimTime>,
    next_id:        ParticleId,
}

impl ParticleSource {
    /// Build from an already validated config.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let mut source = Self {
            origin:        config.source_origin,
            dimensions:    config.dimensions,
            base_speed:    config.base_speed,
            speed_jitter:  config.speed_jitter,
            spread_rad:    config.angular_spread_rad(),
            interval_ms:   config.emission_interval_ms,
            batch:         config.emission_batch,
            trail_length:  config.trail_length,
            overflow:      config.overflow,
            species:       Vec::new(),
            weights:       Vec::new(),
            last_emission: None,
            next_id:       ParticleId(0),
        };
        source.set_species_mix(config);
        source
    }

    /// Adopt new emission parameters, keeping the interval timer and the ID
    /// counter so IDs stay unique across reconfiguration.
    pub fn reconfigure(&mut self, config: &SimulationConfig) {
        let last_emission = self.last_emission;
        let next_id = self.next_id;
        *self = Self::from_config(config);
        self.last_emission = last_emission;
        self.next_id = next_id;
    }

    fn set_species_mix(&mut self, config: &SimulationConfig) {
        let (species, weights) = config
            .species_mix
            .iter()
            .filter(|e| e.weight > 0.0)
            .map(|e| (e.species, e.weight))
            .unzip();
        self.species = species;
        self.weights = weights;
    }

    /// Forget the last emission time; the next call fires immediately.
    pub fn reset_timer(&mut self) {
        self.last_emission = None;
    }

    pub fn last_emission(&self) -> Option<SimTime> {
        self.last_emission
    }

    /// `true` if the interval has elapsed at `now`.
    pub fn is_due(&self, now: SimTime) -> bool {
        match self.last_emission {
            None       => true,
            Some(last) => now.since(last) >= self.interval_ms,
        }
    }

    /// Emit one batch into `population` if the source is due.
    pub fn maybe_emit<R: RandomSource + ?Sized>(
        &mut self,
        now:        SimTime,
        population: &mut Population,
        rng:        &mut R,
    ) -> Emission {
        let mut emission = Emission::default();
        if !self.is_due(now) {
            return emission;
        }
        if self.overflow == OverflowPolicy::Reject && population.is_full() {
            emission.rejected = self.batch;
            return emission;
        }

        for _ in 0..self.batch {
            let particle = self.spawn(now, rng);
            match population.admit(particle) {
                Admission::Admitted => emission.emitted += 1,
                Admission::Evicted(old) => {
                    emission.emitted += 1;
                    emission.evicted.push(old);
                }
                Admission::Rejected(_) => emission.rejected += 1,
            }
        }
        self.last_emission = Some(now);

        trace!(
            now = now.ms(),
            emitted = emission.emitted,
            evicted = emission.evicted.len(),
            rejected = emission.rejected,
            "emission"
        );
        emission
    }

    /// Create one particle without inserting it anywhere.
    pub fn spawn<R: RandomSource + ?Sized>(&mut self, now: SimTime, rng: &mut R) -> Particle {
        let species = self.pick_species(rng);
        let velocity = self.sample_velocity(rng);
        let id = self.next_id;
        self.next_id = id.next();
        Particle::new(id, species, self.origin, velocity, now, self.trail_length)
    }

    fn pick_species<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Species {
        if self.species.len() == 1 {
            return self.species[0];
        }
        rng.pick_weighted(&self.weights)
            .map_or(Species::Generic, |i| self.species[i])
    }

    /// Draw a launch velocity: speed jitter first (if any), then angles.
    pub fn sample_velocity<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let speed = if self.speed_jitter > 0.0 {
            self.base_speed * (1.0 + self.speed_jitter * rng.next_f64())
        } else {
            self.base_speed
        };

        match self.dimensions {
            Dimensions::Planar => {
                let phi = rng.spread(self.spread_rad);
                Vec3::new(speed * phi.cos(), speed * phi.sin(), 0.0)
            }
            Dimensions::Spatial => {
                let theta = rng.spread(self.spread_rad);
                let phi = rng.spread(self.spread_rad);
                Vec3::new(
                    speed * theta.cos() * phi.cos(),
                    speed * phi.sin(),
                    speed * theta.sin() * phi.cos(),
                )
            }
        }
    }
}
