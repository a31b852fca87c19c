//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use rad_core::SimTime;
use rad_particle::Population;
use rad_sim::{SimObserver, StepReport};

use crate::row::{ParticleSnapshotRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes particle snapshots and frame summaries to
/// any [`OutputWriter`].
///
/// Every frame gets a summary row; particle snapshots are written every
/// `snapshot_every` frames (default 1).  Errors from the writer are stored
/// internally because observer methods have no return value.  Check with
/// [`take_error`][Self::take_error] after the run.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:         W,
    snapshot_every: usize,
    frames:         usize,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, snapshot_every: 1, frames: 0, last_error: None }
    }

    /// Write snapshots only every `n`-th frame.  `0` disables snapshots.
    pub fn with_snapshot_interval(mut self, n: usize) -> Self {
        self.snapshot_every = n;
        self
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Called automatically at the end of `run_for`; call
    /// it yourself when driving `step_with` directly.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, report: &StepReport) {
        let result = self.writer.write_step_summary(&StepSummaryRow::from(report));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, time: SimTime, population: &Population) {
        self.frames += 1;
        if self.snapshot_every == 0 || self.frames % self.snapshot_every != 0 {
            return;
        }
        let rows: Vec<ParticleSnapshotRow> =
            population.iter().map(|p| ParticleSnapshotRow::new(time, p)).collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _report: &StepReport) {
        self.finish();
    }
}
