//! Single-wake deficit models.
//!
//! Three interchangeable strategies share one contract: given evaluation
//! points in the rotor-aligned frame of an upstream turbine, return the
//! fractional wind-speed deficit at each point. Deficits are negative by
//! convention (they subtract from the free-stream speed) and zero outside
//! the wake; every returned value lies in `[-1, 0]`.
//!
//! - [`noj`] — N.O. Jensen momentum-conserving top-hat wake.
//! - [`gcl`] — G.C. Larsen self-similar wake with an empirical width fit.
//! - [`ainslie`] — Ainslie eddy-viscosity wake, integrating the centerline
//!   velocity ODE downstream and interpolating it per point.
//!
//! None of the models keeps state across calls; each invocation is a pure
//! transformation of its inputs and identical inputs produce bit-identical
//! outputs.

pub mod ainslie;
pub mod gcl;
pub mod noj;

pub use ainslie::{AinslieWake, OdeGrid};
pub use gcl::GclWake;
pub use noj::NojWake;

use crate::core_types::{RelativePosition, WakeTurbine};
use crate::error::{DomainPolicy, WakeError, WakeResult};

/// Margin kept when clamping a thrust coefficient into the open unit
/// interval under [`DomainPolicy::Clamp`].
const CT_CLAMP_MARGIN: f64 = 1e-6;

/// Interchangeable single-wake deficit strategy.
///
/// Implementations are stateless across calls and deterministic, so a
/// caller may evaluate many upstream/downstream turbine pairs in parallel
/// without coordination.
pub trait WakeModel {
    /// Fractional wind-speed deficit at each evaluation point, one value in
    /// `[-1, 0]` per position.
    ///
    /// # Errors
    ///
    /// Returns a [`WakeError`] when the model configuration is malformed or
    /// (Ainslie only) the centerline integration leaves the physical
    /// domain. The whole vector succeeds or the call fails; no partial
    /// results are produced.
    fn wake_deficits(
        &self,
        turbine: &WakeTurbine,
        positions: &[RelativePosition],
    ) -> WakeResult<Vec<f64>>;
}

/// Applies the domain policy to a thrust coefficient.
pub(crate) fn resolve_ct(value: f64, policy: DomainPolicy) -> WakeResult<f64> {
    if value > 0.0 && value < 1.0 {
        return Ok(value);
    }
    match policy {
        DomainPolicy::Clamp if !value.is_nan() => {
            Ok(value.clamp(CT_CLAMP_MARGIN, 1.0 - CT_CLAMP_MARGIN))
        }
        _ => Err(WakeError::InvalidThrustCoefficient { value }),
    }
}

/// Validates a rotor diameter.
pub(crate) fn check_diameter(value: f64) -> WakeResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WakeError::InvalidRotorDiameter { value })
    }
}

/// Validates a turbulence intensity.
pub(crate) fn check_turbulence(value: f64) -> WakeResult<f64> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(WakeError::InvalidTurbulenceIntensity { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_policy_refuses_out_of_domain_ct() {
        assert!(resolve_ct(1.0, DomainPolicy::Reject).is_err());
        assert!(resolve_ct(0.0, DomainPolicy::Reject).is_err());
        assert!(resolve_ct(-0.5, DomainPolicy::Reject).is_err());
        assert_eq!(resolve_ct(0.8, DomainPolicy::Reject), Ok(0.8));
    }

    #[test]
    fn clamp_policy_pulls_values_into_the_open_interval() {
        let high = resolve_ct(1.2, DomainPolicy::Clamp).unwrap();
        assert!(high < 1.0 && high > 0.99);
        let low = resolve_ct(-3.0, DomainPolicy::Clamp).unwrap();
        assert!(low > 0.0 && low < 1e-5);
        // In-domain values pass through untouched.
        assert_eq!(resolve_ct(0.8, DomainPolicy::Clamp), Ok(0.8));
    }

    #[test]
    fn clamp_policy_still_rejects_nan() {
        assert!(resolve_ct(f64::NAN, DomainPolicy::Clamp).is_err());
    }
}
