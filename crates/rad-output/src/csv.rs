//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `particle_snapshots.csv`
//! - `step_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{OutputResult, ParticleSnapshotRow, StepSummaryRow};

pub const SNAPSHOT_FILE: &str = "particle_snapshots.csv";
pub const SUMMARY_FILE: &str = "step_summaries.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the output directory if needed, open both files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record([
            "time_ms", "particle_id", "species", "x", "y", "z", "vx", "vy", "vz", "age_ms",
        ])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summaries.write_record([
            "time_ms", "substeps", "emitted", "evicted", "rejected", "reflected",
            "transmitted", "absorbed", "escaped", "active",
        ])?;

        debug!(dir = %dir.display(), "csv output opened");
        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[ParticleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.time_ms.to_string(),
                row.particle_id.to_string(),
                row.species.as_str().to_owned(),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
                row.vx.to_string(),
                row.vy.to_string(),
                row.vz.to_string(),
                row.age_ms.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.time_ms.to_string(),
            row.substeps.to_string(),
            row.emitted.to_string(),
            row.evicted.to_string(),
            row.rejected.to_string(),
            row.reflected.to_string(),
            row.transmitted.to_string(),
            row.absorbed.to_string(),
            row.escaped.to_string(),
            row.active.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
