//! Validated upstream turbine parameters.

use serde::{Deserialize, Serialize};

use crate::error::{WakeError, WakeResult};

/// Operating state of the upstream (wake-generating) turbine.
///
/// Construction validates the physical domain once, so the model strategies
/// built on [`crate::models::WakeModel`] never have to re-check:
///
/// - thrust coefficient in the open interval `(0, 1)`;
/// - rotor diameter finite and strictly positive;
/// - ambient turbulence intensity in `(0, 1]`.
///
/// # Example
///
/// ```
/// use wake_sim_core::WakeTurbine;
///
/// let turbine = WakeTurbine::new(0.8, 80.0, 0.1).unwrap();
/// assert_eq!(turbine.rotor_diameter(), 80.0);
/// assert!(WakeTurbine::new(1.0, 80.0, 0.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WakeTurbine {
    thrust_coefficient: f64,
    rotor_diameter: f64,
    turbulence_intensity: f64,
}

impl WakeTurbine {
    /// Creates a validated turbine state.
    ///
    /// # Errors
    ///
    /// Returns the matching [`WakeError`] domain variant when a parameter
    /// lies outside its physical range or is NaN.
    pub fn new(
        thrust_coefficient: f64,
        rotor_diameter: f64,
        turbulence_intensity: f64,
    ) -> WakeResult<Self> {
        if !(thrust_coefficient > 0.0 && thrust_coefficient < 1.0) {
            return Err(WakeError::InvalidThrustCoefficient { value: thrust_coefficient });
        }
        if !(rotor_diameter.is_finite() && rotor_diameter > 0.0) {
            return Err(WakeError::InvalidRotorDiameter { value: rotor_diameter });
        }
        if !(turbulence_intensity > 0.0 && turbulence_intensity <= 1.0) {
            return Err(WakeError::InvalidTurbulenceIntensity { value: turbulence_intensity });
        }
        Ok(Self { thrust_coefficient, rotor_diameter, turbulence_intensity })
    }

    /// Dimensionless thrust coefficient, in `(0, 1)`.
    pub fn thrust_coefficient(&self) -> f64 {
        self.thrust_coefficient
    }

    /// Rotor diameter, in the linear unit shared with evaluation positions.
    pub fn rotor_diameter(&self) -> f64 {
        self.rotor_diameter
    }

    /// Ambient turbulence intensity, in `(0, 1]`.
    pub fn turbulence_intensity(&self) -> f64 {
        self.turbulence_intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_physical_parameters() {
        let t = WakeTurbine::new(0.8, 80.0, 0.1).unwrap();
        assert_eq!(t.thrust_coefficient(), 0.8);
        assert_eq!(t.rotor_diameter(), 80.0);
        assert_eq!(t.turbulence_intensity(), 0.1);
    }

    #[test]
    fn rejects_thrust_coefficient_at_or_above_one() {
        assert!(matches!(
            WakeTurbine::new(1.0, 80.0, 0.1),
            Err(WakeError::InvalidThrustCoefficient { .. })
        ));
        assert!(matches!(
            WakeTurbine::new(1.3, 80.0, 0.1),
            Err(WakeError::InvalidThrustCoefficient { .. })
        ));
    }

    #[test]
    fn rejects_nan_everywhere() {
        assert!(WakeTurbine::new(f64::NAN, 80.0, 0.1).is_err());
        assert!(WakeTurbine::new(0.8, f64::NAN, 0.1).is_err());
        assert!(WakeTurbine::new(0.8, 80.0, f64::NAN).is_err());
    }

    #[test]
    fn rejects_nonpositive_diameter_and_turbulence() {
        assert!(WakeTurbine::new(0.8, 0.0, 0.1).is_err());
        assert!(WakeTurbine::new(0.8, -80.0, 0.1).is_err());
        assert!(WakeTurbine::new(0.8, 80.0, 0.0).is_err());
        assert!(WakeTurbine::new(0.8, 80.0, 1.1).is_err());
    }
}
