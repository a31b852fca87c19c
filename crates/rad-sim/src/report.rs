//! Per-frame and cumulative interaction counts.

use rad_core::SimTime;
use rad_region::Interaction;

/// What happened during one [`step`](crate::Simulation::step) call, or, as
/// [`Simulation::totals`](crate::Simulation::totals), since the last reset.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StepReport {
    /// Simulated time after the frame.
    pub time:        SimTime,
    pub substeps:    usize,
    pub emitted:     usize,
    pub evicted:     usize,
    pub rejected:    usize,
    pub reflected:   usize,
    pub transmitted: usize,
    pub absorbed:    usize,
    /// Left the boundary sphere.
    pub escaped:     usize,
    /// Live particles after the frame.
    pub active:      usize,
}

impl StepReport {
    /// A report for a frame that did no work.
    pub fn idle(time: SimTime, active: usize) -> Self {
        Self { time, active, ..Self::default() }
    }

    pub(crate) fn count(&mut self, outcome: Interaction) {
        match outcome {
            Interaction::Reflected   => self.reflected += 1,
            Interaction::Transmitted => self.transmitted += 1,
            Interaction::Absorbed    => self.absorbed += 1,
        }
    }

    /// Add `later`'s counts to these and take its time and active count.
    pub fn merge(&mut self, later: &StepReport) {
        self.substeps += later.substeps;
        self.emitted += later.emitted;
        self.evicted += later.evicted;
        self.rejected += later.rejected;
        self.reflected += later.reflected;
        self.transmitted += later.transmitted;
        self.absorbed += later.absorbed;
        self.escaped += later.escaped;
        self.time = later.time;
        self.active = later.active;
    }
}
