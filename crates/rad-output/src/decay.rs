//! CSV export for the chart views: decay tables and gamma spectra.

use std::path::Path;

use csv::Writer;
use rad_decay::{DecayTable, Isotope, SpectrumSample};
use tracing::debug;

use crate::OutputResult;

/// Write `table` as `time_<unit>,<isotope>,<isotope>,...`.
pub fn write_decay_table(path: &Path, table: &DecayTable) -> OutputResult<()> {
    let mut w = Writer::from_path(path)?;

    let mut header = vec![format!("time_{}", table.unit)];
    header.extend(table.columns.iter().map(|(name, _)| (*name).to_owned()));
    w.write_record(&header)?;

    for (i, t) in table.times.iter().enumerate() {
        let mut record = vec![t.to_string()];
        record.extend(table.columns.iter().map(|(_, col)| col[i].to_string()));
        w.write_record(&record)?;
    }
    w.flush()?;

    debug!(path = %path.display(), rows = table.len(), columns = table.columns.len(), "decay table written");
    Ok(())
}

/// Build the decay table for `isotopes` and write it to `path`.
pub fn export_decay_table(
    path:       &Path,
    isotopes:   &[Isotope],
    horizon:    f64,
    resolution: f64,
) -> OutputResult<DecayTable> {
    let table = DecayTable::build(isotopes, horizon, resolution)?;
    write_decay_table(path, &table)?;
    Ok(table)
}

/// Write one sampled spectrum as `energy_kev,counts`.
pub fn write_spectrum(path: &Path, samples: &[SpectrumSample]) -> OutputResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["energy_kev", "counts"])?;
    for s in samples {
        w.write_record(&[s.energy_kev.to_string(), s.counts.to_string()])?;
    }
    w.flush()?;
    Ok(())
}
