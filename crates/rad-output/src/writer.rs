//! The `OutputWriter` trait implemented by output backends.

use crate::{OutputResult, ParticleSnapshotRow, StepSummaryRow};

/// A sink for simulation rows.
///
/// Errors are returned here; [`SimOutputObserver`](crate::SimOutputObserver)
/// stores them for [`take_error`](crate::SimOutputObserver::take_error)
/// because observer callbacks cannot fail.
pub trait OutputWriter {
    /// Write a batch of particle snapshots from one frame.
    fn write_snapshots(&mut self, rows: &[ParticleSnapshotRow]) -> OutputResult<()>;

    /// Write one frame summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
