//! Plain data row types written by output backends.

use rad_core::{SimTime, Species};
use rad_particle::Particle;
use rad_sim::StepReport;

/// One particle's state at the end of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSnapshotRow {
    pub time_ms:     f64,
    pub particle_id: u64,
    pub species:     Species,
    pub x:           f64,
    pub y:           f64,
    pub z:           f64,
    pub vx:          f64,
    pub vy:          f64,
    pub vz:          f64,
    pub age_ms:      f64,
}

impl ParticleSnapshotRow {
    pub fn new(time: SimTime, p: &Particle) -> Self {
        Self {
            time_ms:     time.ms(),
            particle_id: p.id.0,
            species:     p.species,
            x:           p.position.x,
            y:           p.position.y,
            z:           p.position.z,
            vx:          p.velocity.x,
            vy:          p.velocity.y,
            vz:          p.velocity.z,
            age_ms:      p.age_ms(time),
        }
    }
}

/// Counts for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    /// Simulated time after the frame.
    pub time_ms:     f64,
    pub substeps:    u64,
    pub emitted:     u64,
    pub evicted:     u64,
    pub rejected:    u64,
    pub reflected:   u64,
    pub transmitted: u64,
    pub absorbed:    u64,
    pub escaped:     u64,
    pub active:      u64,
}

impl From<&StepReport> for StepSummaryRow {
    fn from(r: &StepReport) -> Self {
        Self {
            time_ms:     r.time.ms(),
            substeps:    r.substeps as u64,
            emitted:     r.emitted as u64,
            evicted:     r.evicted as u64,
            rejected:    r.rejected as u64,
            reflected:   r.reflected as u64,
            transmitted: r.transmitted as u64,
            absorbed:    r.absorbed as u64,
            escaped:     r.escaped as u64,
            active:      r.active as u64,
        }
    }
}
