//! Error types for wake model evaluation
//!
//! All errors are local to a single model call: a call either returns the
//! whole deficit vector or fails with one of these variants. The models are
//! deterministic pure functions, so a failing input fails identically on
//! every retry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result alias used throughout the crate.
pub type WakeResult<T> = Result<T, WakeError>;

/// How out-of-domain thrust coefficients are treated before computation.
///
/// The wake formulas all take `sqrt(1 - Ct)` at some point, so `Ct >= 1`
/// would silently turn into NaN. Instead of propagating NaN, the caller
/// picks a policy that is applied identically by all three models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DomainPolicy {
    /// Reject out-of-domain values with [`WakeError::InvalidThrustCoefficient`].
    #[default]
    Reject,
    /// Clamp the thrust coefficient into the open unit interval.
    /// NaN is still rejected (there is nothing sensible to clamp it to).
    Clamp,
}

/// Errors produced by wake model evaluation and layout generation.
#[derive(Debug, Clone, PartialEq)]
pub enum WakeError {
    /// Thrust coefficient outside the open unit interval `(0, 1)`, or NaN.
    InvalidThrustCoefficient { value: f64 },
    /// Rotor diameter is not strictly positive and finite.
    InvalidRotorDiameter { value: f64 },
    /// Turbulence intensity outside `(0, 1]`, or NaN.
    InvalidTurbulenceIntensity { value: f64 },
    /// A per-point parameter slice does not match the position count.
    SeriesLengthMismatch { expected: usize, found: usize },
    /// A numerical configuration (ODE grid, interpolant samples, layout
    /// parameters) is malformed.
    InvalidConfig(&'static str),
    /// The Ainslie centerline integration left the physical domain at the
    /// given normalized downstream distance.
    IntegrationFailure { xi: f64 },
    /// Layout generation could not place the requested number of turbines
    /// within the attempt bound.
    LayoutExhausted { requested: usize },
}

impl fmt::Display for WakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThrustCoefficient { value } => {
                write!(f, "thrust coefficient {value} outside the open interval (0, 1)")
            }
            Self::InvalidRotorDiameter { value } => {
                write!(f, "rotor diameter {value} must be finite and positive")
            }
            Self::InvalidTurbulenceIntensity { value } => {
                write!(f, "turbulence intensity {value} outside the interval (0, 1]")
            }
            Self::SeriesLengthMismatch { expected, found } => {
                write!(
                    f,
                    "parameter series of length {found} does not match {expected} evaluation points"
                )
            }
            Self::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
            Self::IntegrationFailure { xi } => {
                write!(
                    f,
                    "centerline velocity integration left the physical domain at xi = {xi}"
                )
            }
            Self::LayoutExhausted { requested } => {
                write!(f, "could not place {requested} turbines within the attempt bound")
            }
        }
    }
}

impl std::error::Error for WakeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let err = WakeError::InvalidThrustCoefficient { value: 1.2 };
        assert!(err.to_string().contains("1.2"));

        let err = WakeError::SeriesLengthMismatch { expected: 4, found: 3 };
        assert!(err.to_string().contains('4'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn default_policy_rejects() {
        assert_eq!(DomainPolicy::default(), DomainPolicy::Reject);
    }
}
