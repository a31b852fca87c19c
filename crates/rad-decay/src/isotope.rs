//! Isotope presets and multi-isotope decay tables.
//!
//! The presets cover the two chart families shown alongside the particle
//! scenes: therapy isotopes (half-lives in days) and diagnostic isotopes
//! (half-lives in hours).

use rad_core::validate;

use crate::model::DecayModel;
use crate::spectrum::{SpectralLine, SpectrumProfile};
use crate::{DecayError, DecayResult};

/// Unit of an isotope's half-life, and therefore of its chart's time axis.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeUnit {
    Hours,
    Days,
}

impl TimeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Hours => "hours",
            TimeUnit::Days  => "days",
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Isotope ───────────────────────────────────────────────────────────────────

/// A named radionuclide with its half-life and spectrum shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Isotope {
    pub name:      &'static str,
    pub half_life: f64,
    pub unit:      TimeUnit,
    pub spectrum:  SpectrumProfile,
}

impl Isotope {
    pub const IR_192: Isotope = Isotope {
        name:      "Ir-192",
        half_life: 74.0,
        unit:      TimeUnit::Days,
        spectrum:  SpectrumProfile {
            lines: &[
                SpectralLine { energy_kev: 316.0, counts: 1000.0 },
                SpectralLine { energy_kev: 468.0, counts: 900.0 },
            ],
            continuum_center: 375.0,
            continuum_width:  400.0,
            noisy_lines:      true,
        },
    };

    pub const I_131: Isotope = Isotope {
        name:      "I-131",
        half_life: 8.0,
        unit:      TimeUnit::Days,
        spectrum:  SpectrumProfile {
            lines:            &[SpectralLine { energy_kev: 364.0, counts: 950.0 }],
            continuum_center: 364.0,
            continuum_width:  300.0,
            noisy_lines:      false,
        },
    };

    pub const LU_177: Isotope = Isotope {
        name:      "Lu-177",
        half_life: 6.6,
        unit:      TimeUnit::Days,
        spectrum:  SpectrumProfile {
            lines:            &[SpectralLine { energy_kev: 208.0, counts: 850.0 }],
            continuum_center: 208.0,
            continuum_width:  250.0,
            noisy_lines:      false,
        },
    };

    pub const TC_99M: Isotope = Isotope {
        name:      "Tc-99m",
        half_life: 6.0,
        unit:      TimeUnit::Hours,
        spectrum:  SpectrumProfile {
            lines:            &[SpectralLine { energy_kev: 140.0, counts: 1000.0 }],
            continuum_center: 140.0,
            continuum_width:  200.0,
            noisy_lines:      false,
        },
    };

    pub const I_123: Isotope = Isotope {
        name:      "I-123",
        half_life: 13.0,
        unit:      TimeUnit::Hours,
        spectrum:  SpectrumProfile {
            lines:            &[SpectralLine { energy_kev: 159.0, counts: 900.0 }],
            continuum_center: 159.0,
            continuum_width:  200.0,
            noisy_lines:      false,
        },
    };

    /// Therapy set, half-lives in days.
    pub const THERAPY: [Isotope; 3] = [Isotope::IR_192, Isotope::I_131, Isotope::LU_177];

    /// Diagnostic set, half-lives in hours.
    pub const DIAGNOSTIC: [Isotope; 2] = [Isotope::TC_99M, Isotope::I_123];

    /// A custom isotope; fails unless `half_life` is positive.
    pub fn new(
        name:      &'static str,
        half_life: f64,
        unit:      TimeUnit,
        spectrum:  SpectrumProfile,
    ) -> DecayResult<Self> {
        validate::positive("half_life", half_life)?;
        Ok(Self { name, half_life, unit, spectrum })
    }

    /// Look up a preset by name (case-insensitive).
    pub fn preset(name: &str) -> Option<Isotope> {
        Isotope::THERAPY
            .into_iter()
            .chain(Isotope::DIAGNOSTIC)
            .find(|iso| iso.name.eq_ignore_ascii_case(name))
    }

    /// Decay model for this isotope.
    pub fn model(&self) -> DecayModel {
        DecayModel::from_validated(self.half_life)
    }
}

// ── DecayTable ────────────────────────────────────────────────────────────────

/// Several isotopes' curves over one shared time axis: the data behind a
/// multi-line decay chart.
#[derive(Clone, Debug, PartialEq)]
pub struct DecayTable {
    pub unit:    TimeUnit,
    pub times:   Vec<f64>,
    /// `(isotope name, activity per entry of `times`)`.
    pub columns: Vec<(&'static str, Vec<f64>)>,
}

impl DecayTable {
    /// Sample every isotope from `0` to `horizon` every `resolution`.
    ///
    /// All isotopes must share one [`TimeUnit`]; an empty isotope list
    /// yields a table with a time axis and no columns, in hours.
    pub fn build(isotopes: &[Isotope], horizon: f64, resolution: f64) -> DecayResult<Self> {
        let unit = isotopes.first().map_or(TimeUnit::Hours, |iso| iso.unit);
        if let Some(odd) = isotopes.iter().find(|iso| iso.unit != unit) {
            return Err(DecayError::MixedUnits {
                isotope:  odd.name,
                expected: unit.as_str(),
                found:    odd.unit.as_str(),
            });
        }

        // Any valid model yields the same time axis.
        let axis = DecayModel::from_validated(1.0).series(horizon, resolution)?;
        let times: Vec<f64> = axis.map(|s| s.time).collect();

        let columns: Vec<(&'static str, Vec<f64>)> = isotopes
            .iter()
            .map(|iso| -> DecayResult<(&'static str, Vec<f64>)> {
                let series = iso.model().series(horizon, resolution)?;
                Ok((iso.name, series.map(|s| s.activity).collect()))
            })
            .collect::<DecayResult<_>>()?;

        Ok(Self { unit, times, columns })
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
