use rad_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecayError {
    #[error("invalid decay configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("elapsed time must be finite and non-negative, got {0}")]
    NegativeTime(f64),

    #[error("horizon {horizon} at resolution {resolution} needs more than {max} samples")]
    TooManySamples {
        horizon:    f64,
        resolution: f64,
        max:        usize,
    },

    #[error("isotope {isotope} uses {found} but the table is in {expected}")]
    MixedUnits {
        isotope:  &'static str,
        expected: &'static str,
        found:    &'static str,
    },
}

pub type DecayResult<T> = Result<T, DecayError>;
