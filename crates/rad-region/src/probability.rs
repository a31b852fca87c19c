//! Reflect / transmit / absorb probabilities.

use rad_core::{ConfigError, ConfigResult, validate};

/// What happened when a particle met a barrier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Interaction {
    Reflected,
    Transmitted,
    Absorbed,
}

impl Interaction {
    pub fn as_str(self) -> &'static str {
        match self {
            Interaction::Reflected   => "reflected",
            Interaction::Transmitted => "transmitted",
            Interaction::Absorbed    => "absorbed",
        }
    }
}

/// A validated probability triple.  `absorb` is implied as
/// `1 − reflect − transmit` and is never negative.
///
/// The fields are private so every value in circulation has passed
/// [`InteractionProbabilities::new`]; deserialization goes through the same
/// check.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawProbabilities"))]
pub struct InteractionProbabilities {
    reflect:  f64,
    transmit: f64,
}

impl InteractionProbabilities {
    /// Everything passes straight through.
    pub const PASS_THROUGH: Self = Self { reflect: 0.0, transmit: 1.0 };
    /// Everything bounces off.
    pub const REFLECT_ALL: Self = Self { reflect: 1.0, transmit: 0.0 };
    /// Everything is stopped.
    pub const ABSORB_ALL: Self = Self { reflect: 0.0, transmit: 0.0 };

    /// Fails unless both values lie in `[0, 1]` and their sum is at most 1.
    pub fn new(reflect: f64, transmit: f64) -> ConfigResult<Self> {
        let reflect = validate::probability("reflect", reflect)?;
        let transmit = validate::probability("transmit", transmit)?;
        if reflect + transmit > 1.0 {
            return Err(ConfigError::ProbabilitiesExceedOne { reflect, transmit });
        }
        Ok(Self { reflect, transmit })
    }

    #[inline]
    pub fn reflect(&self) -> f64 {
        self.reflect
    }

    #[inline]
    pub fn transmit(&self) -> f64 {
        self.transmit
    }

    #[inline]
    pub fn absorb(&self) -> f64 {
        (1.0 - self.reflect - self.transmit).max(0.0)
    }

    /// Map one uniform draw `r ∈ [0, 1)` to an outcome.  Checked in the
    /// order reflect, transmit, absorb with strict `<`.
    #[inline]
    pub fn classify(&self, r: f64) -> Interaction {
        if r < self.reflect {
            Interaction::Reflected
        } else if r < self.reflect + self.transmit {
            Interaction::Transmitted
        } else {
            Interaction::Absorbed
        }
    }
}

impl Default for InteractionProbabilities {
    fn default() -> Self {
        Self::PASS_THROUGH
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawProbabilities {
    reflect:  f64,
    transmit: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawProbabilities> for InteractionProbabilities {
    type Error = ConfigError;

    fn try_from(raw: RawProbabilities) -> ConfigResult<Self> {
        Self::new(raw.reflect, raw.transmit)
    }
}
