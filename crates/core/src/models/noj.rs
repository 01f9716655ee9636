//! N.O. Jensen (NOJ) momentum-conserving wake model.
//!
//! The classic top-hat wake: behind the rotor the wake expands linearly
//! with distance and the deficit decays with the squared expansion ratio.
//!
//! # Formula
//! ```text
//! Rw(x) = R + k·x
//! ΔU(x) = −(1 − sqrt(1 − Ct)) / (1 + k·x/R)²    inside the wake cone
//! ```
//! with rotor radius `R = D/2` and wake-expansion constant `k` (typically
//! 0.04–0.075 on land). The deficit is forced to zero upstream (`x < 0`)
//! and outside the wake cone (`|r| > Rw`).
//!
//! # References
//! - Jensen, N.O. (1983). "A note on wind generator interaction."
//!   Risø-M-2411, Risø National Laboratory.
//! - Katić, I., Højstrup, J., Jensen, N.O. (1986). "A simple model for
//!   cluster efficiency." EWEC '86 proceedings.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core_types::{RelativePosition, Series, WakeTurbine};
use crate::error::{DomainPolicy, WakeResult};
use crate::models::{check_diameter, resolve_ct, WakeModel};

/// Default wake-expansion constant for onshore conditions.
pub const DEFAULT_WAKE_EXPANSION: f64 = 0.05;

/// Deficit at a single point in the rotor-aligned frame.
fn point_deficit(position: &RelativePosition, ct: f64, diameter: f64, expansion: f64) -> f64 {
    let x = position.downstream;
    let r = position.radial();
    let radius = diameter / 2.0;
    let wake_radius = radius + expansion * x;

    if x < 0.0 || r.abs() > wake_radius {
        return 0.0;
    }
    let deficit = -(1.0 - (1.0 - ct).sqrt()) / (1.0 + expansion * x / radius).powi(2);
    // Physical bound: a deficit magnitude above 1 is a numerical artifact
    // and means the model broke down, not that the wind reversed.
    if deficit < -1.0 { 0.0 } else { deficit }
}

/// Vectorised NOJ deficits.
///
/// `ct`, `diameter`, and `expansion` broadcast over the evaluation points:
/// each is a scalar or a slice of the same length as `positions`.
///
/// # Errors
///
/// Fails on a series length mismatch or an out-of-domain parameter under
/// the given [`DomainPolicy`].
pub fn deficits(
    positions: &[RelativePosition],
    ct: Series<'_>,
    diameter: Series<'_>,
    expansion: Series<'_>,
    policy: DomainPolicy,
) -> WakeResult<Vec<f64>> {
    let n = positions.len();
    ct.check_len(n)?;
    diameter.check_len(n)?;
    expansion.check_len(n)?;

    // Validate every per-point parameter before computing anything, so the
    // call either fails whole or succeeds whole.
    let mut cts = Vec::with_capacity(n);
    let mut diameters = Vec::with_capacity(n);
    for i in 0..n {
        cts.push(resolve_ct(ct.get(i), policy)?);
        diameters.push(check_diameter(diameter.get(i))?);
    }

    Ok(positions
        .par_iter()
        .enumerate()
        .map(|(i, p)| point_deficit(p, cts[i], diameters[i], expansion.get(i)))
        .collect())
}

/// NOJ model configured as a [`WakeModel`] strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NojWake {
    /// Linear wake-expansion constant `k`.
    pub wake_expansion: f64,
    /// Thrust-coefficient domain handling.
    pub policy: DomainPolicy,
}

impl Default for NojWake {
    fn default() -> Self {
        Self { wake_expansion: DEFAULT_WAKE_EXPANSION, policy: DomainPolicy::Reject }
    }
}

impl WakeModel for NojWake {
    fn wake_deficits(
        &self,
        turbine: &WakeTurbine,
        positions: &[RelativePosition],
    ) -> WakeResult<Vec<f64>> {
        deficits(
            positions,
            Series::Scalar(turbine.thrust_coefficient()),
            Series::Scalar(turbine.rotor_diameter()),
            Series::Scalar(self.wake_expansion),
            self.policy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn centerline(xs: &[f64]) -> Vec<RelativePosition> {
        xs.iter().map(|&x| RelativePosition::centerline(x)).collect()
    }

    #[test]
    fn matches_the_closed_form_on_the_centerline() {
        // D=80 m, Ct=0.8, k=0.05 at x=500 m
        let positions = centerline(&[500.0]);
        let du = deficits(
            &positions,
            Series::Scalar(0.8),
            Series::Scalar(80.0),
            Series::Scalar(0.05),
            DomainPolicy::Reject,
        )
        .unwrap();

        let expected = -(1.0 - 0.2_f64.sqrt()) / (1.0_f64 + 0.05 * 500.0 / 40.0).powi(2);
        assert_relative_eq!(du[0], expected, epsilon = 1e-9);
    }

    #[test]
    fn rotor_plane_deficit_is_the_induction_value() {
        // At x=0, r=0 the expansion ratio is 1, so ΔU = -(1 - sqrt(1-Ct)).
        let positions = centerline(&[0.0]);
        let du = deficits(
            &positions,
            Series::Scalar(0.8),
            Series::Scalar(80.0),
            Series::Scalar(0.05),
            DomainPolicy::Reject,
        )
        .unwrap();
        assert_relative_eq!(du[0], -(1.0 - 0.2_f64.sqrt()));
    }

    #[test]
    fn upstream_points_see_no_wake() {
        let positions = centerline(&[-1.0, -500.0]);
        let du = deficits(
            &positions,
            Series::Scalar(0.8),
            Series::Scalar(80.0),
            Series::Scalar(0.05),
            DomainPolicy::Reject,
        )
        .unwrap();
        assert_eq!(du, vec![0.0, 0.0]);
    }

    #[test]
    fn points_outside_the_wake_cone_see_no_wake() {
        // At x=100, Rw = 40 + 0.05*100 = 45 m.
        let inside = RelativePosition::new(100.0, 44.0, 0.0);
        let outside = RelativePosition::new(100.0, 46.0, 0.0);
        let du = deficits(
            &[inside, outside],
            Series::Scalar(0.8),
            Series::Scalar(80.0),
            Series::Scalar(0.05),
            DomainPolicy::Reject,
        )
        .unwrap();
        assert!(du[0] < 0.0);
        assert_eq!(du[1], 0.0);
    }

    #[test]
    fn per_point_parameters_broadcast() {
        let positions = centerline(&[200.0, 200.0]);
        let cts = vec![0.4, 0.8];
        let du = deficits(
            &positions,
            Series::from(&cts),
            Series::Scalar(80.0),
            Series::Scalar(0.05),
            DomainPolicy::Reject,
        )
        .unwrap();
        // Higher thrust extracts more momentum.
        assert!(du[1] < du[0]);
        assert!(du.iter().all(|&v| v < 0.0));
    }

    #[test]
    fn invalid_ct_fails_the_whole_call() {
        let positions = centerline(&[100.0, 200.0]);
        let cts = vec![0.8, 1.0];
        let result = deficits(
            &positions,
            Series::from(&cts),
            Series::Scalar(80.0),
            Series::Scalar(0.05),
            DomainPolicy::Reject,
        );
        assert!(result.is_err());
    }

    #[test]
    fn strategy_matches_the_free_function() {
        let turbine = WakeTurbine::new(0.8, 80.0, 0.1).unwrap();
        let positions = centerline(&[300.0]);
        let model = NojWake::default();
        let via_trait = model.wake_deficits(&turbine, &positions).unwrap();
        let direct = deficits(
            &positions,
            Series::Scalar(0.8),
            Series::Scalar(80.0),
            Series::Scalar(DEFAULT_WAKE_EXPANSION),
            DomainPolicy::Reject,
        )
        .unwrap();
        assert_eq!(via_trait, direct);
    }
}
