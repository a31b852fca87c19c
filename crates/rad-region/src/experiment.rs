//! Single-crossing attenuation experiments.
//!
//! Fires `trials` independent particles straight at one barrier along its
//! normal and tallies the outcomes.  This measures the barrier's effective
//! probabilities without any emission, cap or boundary effects.
//!
//! # Determinism
//!
//! Trials are split into fixed-size chunks and each chunk gets its own
//! generator derived from `seed` up front, in chunk order.  The tally is
//! therefore identical whether the chunks run sequentially or, with the
//! `parallel` feature, on the Rayon pool.

use std::ops::{Add, AddAssign};

use rad_core::{ConfigResult, ParticleId, RandomSource, SimRng, SimTime, Species, validate};
use rad_particle::Particle;
use tracing::debug;

use crate::{Barrier, Interaction};

/// Trials per generator stream.
pub const CHUNK_TRIALS: usize = 4096;

/// Outcome counts of an attenuation experiment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttenuationTally {
    pub trials:      u64,
    pub reflected:   u64,
    pub transmitted: u64,
    pub absorbed:    u64,
    /// Trials that never met the barrier (degenerate region).
    pub missed:      u64,
}

impl AttenuationTally {
    pub fn record(&mut self, outcome: Option<Interaction>) {
        self.trials += 1;
        match outcome {
            Some(Interaction::Reflected)   => self.reflected += 1,
            Some(Interaction::Transmitted) => self.transmitted += 1,
            Some(Interaction::Absorbed)    => self.absorbed += 1,
            None                           => self.missed += 1,
        }
    }

    /// Fraction of trials that ended in `outcome`.
    pub fn fraction(&self, outcome: Interaction) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let n = match outcome {
            Interaction::Reflected   => self.reflected,
            Interaction::Transmitted => self.transmitted,
            Interaction::Absorbed    => self.absorbed,
        };
        n as f64 / self.trials as f64
    }
}

impl AddAssign for AttenuationTally {
    fn add_assign(&mut self, rhs: Self) {
        self.trials += rhs.trials;
        self.reflected += rhs.reflected;
        self.transmitted += rhs.transmitted;
        self.absorbed += rhs.absorbed;
        self.missed += rhs.missed;
    }
}

impl Add for AttenuationTally {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Fire `trials` particles of `species` at `barrier` with a generator
/// seeded from `seed`.
pub fn measure_attenuation(
    barrier: &Barrier,
    species: Species,
    trials:  usize,
    seed:    u64,
) -> ConfigResult<AttenuationTally> {
    validate::at_least_one("trials", trials)?;
    barrier.validate()?;

    let mut root = SimRng::new(seed);
    let jobs: Vec<(usize, SimRng)> = (0..trials.div_ceil(CHUNK_TRIALS))
        .map(|i| {
            let len = CHUNK_TRIALS.min(trials - i * CHUNK_TRIALS);
            (len, root.child(i as u64))
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let tally = jobs
        .into_iter()
        .map(|(len, mut rng)| run_chunk(barrier, species, len, &mut rng))
        .fold(AttenuationTally::default(), |a, b| a + b);

    #[cfg(feature = "parallel")]
    let tally = {
        use rayon::prelude::*;

        jobs.into_par_iter()
            .map(|(len, mut rng)| run_chunk(barrier, species, len, &mut rng))
            .reduce(AttenuationTally::default, |a, b| a + b)
    };

    debug!(
        barrier = %barrier.name,
        %species,
        trials = tally.trials,
        reflected = tally.reflected,
        transmitted = tally.transmitted,
        absorbed = tally.absorbed,
        "attenuation experiment finished"
    );
    Ok(tally)
}

fn run_chunk<R: RandomSource + ?Sized>(
    barrier: &Barrier,
    species: Species,
    trials:  usize,
    rng:     &mut R,
) -> AttenuationTally {
    let axis = barrier.normal_axis;
    let inside = barrier.region.center();
    let mut before = inside;
    before[axis.index()] = barrier.region.low(axis) - 1.0;
    let velocity = axis.unit();

    let mut tally = AttenuationTally::default();
    for i in 0..trials {
        let mut particle = Particle::new(ParticleId(i as u64), species, inside, velocity, SimTime::ZERO, 0);
        tally.record(barrier.interact(&mut particle, before, rng));
    }
    tally
}
