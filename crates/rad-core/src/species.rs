//! Particle species shared across the source, barrier and field crates.

/// The kind of radiation a particle represents.
///
/// Barriers and fields key their per-species behavior on this value.
/// `Generic` is the undifferentiated "radiation" particle of the attenuation
/// scenarios.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Species {
    #[default]
    Generic,
    /// Helium nucleus: positive, heavy.
    Alpha,
    /// Electron: negative, light.
    Beta,
    /// Photon: neutral.
    Gamma,
}

impl Species {
    pub const ALL: [Species; 4] = [Species::Generic, Species::Alpha, Species::Beta, Species::Gamma];

    /// Human-readable label, used as the CSV column value.
    pub fn as_str(self) -> &'static str {
        match self {
            Species::Generic => "generic",
            Species::Alpha   => "alpha",
            Species::Beta    => "beta",
            Species::Gamma   => "gamma",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
