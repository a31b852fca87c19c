//! Configuration error type.
//!
//! Every `rad-*` crate validates its inputs at construction time and reports
//! failures through `ConfigError`.  Higher crates wrap it in their own enums
//! via `#[from]`.

use thiserror::Error;

/// A configuration value was rejected.  Values are never silently clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },

    #[error("probability {field} must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("{field} must lie in [0, 1), got {value}")]
    FractionOutOfRange { field: &'static str, value: f64 },

    #[error("reflect ({reflect}) + transmit ({transmit}) exceeds 1; absorb would be negative")]
    ProbabilitiesExceedOne { reflect: f64, transmit: f64 },

    #[error("species mix has no positive weight")]
    EmptySpeciesMix,
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
