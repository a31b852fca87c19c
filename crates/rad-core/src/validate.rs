//! Field-level validation helpers.
//!
//! Each helper returns the value unchanged on success so call sites can
//! validate and bind in one expression:
//!
//! ```
//! use rad_core::validate;
//!
//! let speed = validate::positive("base_speed", 5.0).unwrap();
//! assert_eq!(speed, 5.0);
//! assert!(validate::positive("base_speed", 0.0).is_err());
//! ```

use crate::{ConfigError, ConfigResult};

/// Reject NaN and infinities.
#[inline]
pub fn finite(field: &'static str, value: f64) -> ConfigResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

/// Finite and strictly greater than zero.
#[inline]
pub fn positive(field: &'static str, value: f64) -> ConfigResult<f64> {
    let value = finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Finite and `>= 0`.
#[inline]
pub fn non_negative(field: &'static str, value: f64) -> ConfigResult<f64> {
    let value = finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// A count that must be at least one.
#[inline]
pub fn at_least_one(field: &'static str, value: usize) -> ConfigResult<usize> {
    if value >= 1 {
        Ok(value)
    } else {
        Err(ConfigError::ZeroCount { field })
    }
}

/// A loss fraction in the half-open interval `[0, 1)`.
#[inline]
pub fn fraction(field: &'static str, value: f64) -> ConfigResult<f64> {
    if value.is_finite() && (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::FractionOutOfRange { field, value })
    }
}

/// A probability in the closed interval `[0, 1]`.
#[inline]
pub fn probability(field: &'static str, value: f64) -> ConfigResult<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::ProbabilityOutOfRange { field, value })
    }
}
