//! `rad-output` — CSV output for the rad engine.
//!
//! | Source                    | Files created                                       |
//! |---------------------------|-----------------------------------------------------|
//! | [`CsvWriter`]             | `particle_snapshots.csv`, `step_summaries.csv`      |
//! | [`export_decay_table`]    | one `time_<unit>,<isotope>...` file                 |
//! | [`write_spectrum`]        | one `energy_kev,counts` file                        |
//!
//! Simulation output is driven by [`SimOutputObserver`], which implements
//! `rad_sim::SimObserver` over any [`OutputWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use rad_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer).with_snapshot_interval(10);
//! sim.run_for(5_000.0, 16.0, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod decay;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use decay::{export_decay_table, write_decay_table, write_spectrum};
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ParticleSnapshotRow, StepSummaryRow};
pub use writer::OutputWriter;
