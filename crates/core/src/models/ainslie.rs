//! Ainslie eddy-viscosity wake model.
//!
//! A thin-shear-layer boundary-layer model: the centerline velocity `Uc`
//! (normalized by the free-stream speed) is governed by an ODE in the
//! normalized downstream distance `ξ = x/D`, driven by an eddy viscosity
//! built from the wake's own shear and the ambient turbulence. The radial
//! profile around the centerline is Gaussian.
//!
//! One call integrates the ODE once over a fixed grid starting one diameter
//! downstream (the model is undefined closer to the rotor), interpolates
//! the solution, and evaluates every requested point against it. The grid
//! is a tunable configuration, not a hardcoded constant; the defaults
//! reproduce the published setup (ξ from 1 to 200, 100 samples).
//!
//! # Formula
//! ```text
//! dUc/dξ = 16·ε·(Uc³ − Uc² − Uc + 1) / (Uc·Ct)
//! b  = sqrt(3.56·Ct / (8·DM·(1 − DM/2)))      DM = 1 − Uc
//! ε  = F(ξ)·(0.015·b·(1 − Uc) + Km)           Km = κ²·I0/100, κ = 0.4
//! ΔU = −DM·exp(−3.56·(ρ/b)²)                  ρ = r/D
//! ```
//!
//! # References
//! - Ainslie, J.F. (1988). "Calculating the flowfield in the wake of wind
//!   turbines." Journal of Wind Engineering and Industrial Aerodynamics,
//!   27(1-3), 213-224.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_types::{RelativePosition, WakeTurbine};
use crate::error::{DomainPolicy, WakeError, WakeResult};
use crate::models::{check_diameter, check_turbulence, resolve_ct, WakeModel};
use crate::numerical::{integrate_rk4, LinearInterpolator};

/// Von Kármán constant.
const KAPPA: f64 = 0.4;
/// Shear-generated eddy-viscosity coefficient.
const K1: f64 = 0.015;
/// Gaussian profile shape constant.
const C1: f64 = 3.56;
/// Momentum factor in the centerline ODE.
const ODE_FACTOR: f64 = 16.0;

// Initial centerline deficit, DM(2D) per Ainslie (1988):
// DMi = Ct − 0.05 − (16·Ct − 0.5)·I0/1000, with I0 in percent.
// These constants belong to this formula alone; the published paper reuses
// none of them elsewhere.
const INIT_CT_OFFSET: f64 = 0.05;
const INIT_TI_GAIN: f64 = 16.0;
const INIT_TI_OFFSET: f64 = 0.5;
const INIT_TI_SCALE: f64 = 1000.0;

// Filter function F(ξ): development of the shear-layer turbulence over the
// first few diameters, saturating at 1 beyond ξ = 5.5.
const FILTER_KNEE: f64 = 4.5;
const FILTER_SATURATION: f64 = 5.5;
const FILTER_BASE: f64 = 0.65;
const FILTER_SCALE: f64 = 23.32;

/// Discretization of the centerline integration, in rotor diameters.
///
/// `start` is the distance where the model begins (one diameter in the
/// published formulation), `points` the number of ODE output samples spread
/// linearly to `end`, and `substeps` the RK4 steps taken inside each sample
/// interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OdeGrid {
    /// First normalized downstream distance; evaluation clamps up to it.
    pub start: f64,
    /// Last normalized downstream distance.
    pub end: f64,
    /// Number of output samples (at least 2).
    pub points: usize,
    /// RK4 substeps per sample interval (at least 1).
    pub substeps: usize,
}

impl Default for OdeGrid {
    fn default() -> Self {
        Self { start: 1.0, end: 200.0, points: 100, substeps: 8 }
    }
}

impl OdeGrid {
    /// Checks the grid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WakeError::InvalidConfig`] for a non-increasing or
    /// non-finite range, fewer than two points, or zero substeps.
    pub fn validate(&self) -> WakeResult<()> {
        if !(self.start.is_finite() && self.end.is_finite() && self.start >= 0.0) {
            return Err(WakeError::InvalidConfig("ODE grid range must be finite and nonnegative"));
        }
        if self.end <= self.start {
            return Err(WakeError::InvalidConfig("ODE grid end must exceed its start"));
        }
        if self.points < 2 {
            return Err(WakeError::InvalidConfig("ODE grid needs at least two points"));
        }
        if self.substeps == 0 {
            return Err(WakeError::InvalidConfig("ODE grid needs at least one substep"));
        }
        Ok(())
    }

    /// Linearly spaced sample positions.
    fn samples(&self) -> Vec<f64> {
        let step = (self.end - self.start) / (self.points - 1) as f64;
        (0..self.points).map(|i| self.start + step * i as f64).collect()
    }
}

/// Shear-layer development filter `F(ξ)`.
///
/// The underlying cube-root expression is only real when its argument is
/// non-negative, so the two branches below the saturation point keep the
/// root's argument positive instead of taking a cube root of a negative
/// number.
fn filter(xi: f64) -> f64 {
    if xi > FILTER_SATURATION {
        1.0
    } else if xi > FILTER_KNEE {
        FILTER_BASE + ((xi - FILTER_KNEE) / FILTER_SCALE).powf(1.0 / 3.0)
    } else {
        FILTER_BASE - ((FILTER_KNEE - xi) / FILTER_SCALE).powf(1.0 / 3.0)
    }
}

/// Gaussian wake-width parameter `b` for a centerline deficit `dm`.
fn wake_width(ct: f64, dm: f64) -> f64 {
    (C1 * ct / (8.0 * dm * (1.0 - 0.5 * dm))).sqrt()
}

/// Vectorised Ainslie deficits.
///
/// `ct`, `diameter`, and `ti` are scalars for the call: one upstream
/// turbine's parameters applied to all evaluation points (the centerline
/// integration depends on them, so per-point values would need one
/// integration each).
///
/// # Errors
///
/// Fails on out-of-domain parameters under the given [`DomainPolicy`], a
/// malformed grid, or [`WakeError::IntegrationFailure`] when the centerline
/// velocity leaves `(0, 1]` or turns non-finite during integration.
pub fn deficits(
    positions: &[RelativePosition],
    ct: f64,
    diameter: f64,
    ti: f64,
    grid: &OdeGrid,
    policy: DomainPolicy,
) -> WakeResult<Vec<f64>> {
    let ct = resolve_ct(ct, policy)?;
    let diameter = check_diameter(diameter)?;
    let ti = check_turbulence(ti)?;
    grid.validate()?;

    // Turbulence intensity in percent, as the empirical constants expect.
    let i0 = ti * 100.0;
    let dm_init = ct - INIT_CT_OFFSET - (INIT_TI_GAIN * ct - INIT_TI_OFFSET) * i0 / INIT_TI_SCALE;

    // Ambient eddy diffusivity of momentum.
    let km = KAPPA * KAPPA * i0 / 100.0;

    let rhs = move |xi: f64, uc: f64| {
        let dm = 1.0 - uc;
        let b = wake_width(ct, dm);
        let epsilon = filter(xi) * (K1 * b * (1.0 - uc) + km);
        ODE_FACTOR * epsilon * (uc.powi(3) - uc * uc - uc + 1.0) / (uc * ct)
    };

    let xs = grid.samples();
    let centerline = integrate_rk4(rhs, 1.0 - dm_init, &xs, grid.substeps);
    for (&xi, &uc) in xs.iter().zip(&centerline) {
        if !uc.is_finite() || uc <= 0.0 || uc > 1.0 {
            return Err(WakeError::IntegrationFailure { xi });
        }
    }
    debug!(
        points = xs.len(),
        uc_start = centerline[0],
        uc_end = centerline[centerline.len() - 1],
        "integrated Ainslie centerline velocity"
    );

    let interpolant = LinearInterpolator::new(xs, centerline)?;

    Ok(positions
        .par_iter()
        .map(|p| {
            // Points upstream of the grid start clamp to the starting value;
            // the model is undefined closer than one diameter.
            let xi = (p.downstream / diameter).max(grid.start);
            let rho = p.radial() / diameter;
            let uc = interpolant.eval(xi);
            let dm = 1.0 - uc;
            if dm <= 0.0 {
                return 0.0;
            }
            let b = wake_width(ct, dm);
            let du = -dm * (-C1 * (rho / b).powi(2)).exp();
            // Physical bound, matching the other models.
            if du < -1.0 { 0.0 } else { du }
        })
        .collect())
}

/// Ainslie model configured as a [`WakeModel`] strategy.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AinslieWake {
    /// Centerline integration discretization.
    pub grid: OdeGrid,
    /// Thrust-coefficient domain handling.
    pub policy: DomainPolicy,
}

impl WakeModel for AinslieWake {
    fn wake_deficits(
        &self,
        turbine: &WakeTurbine,
        positions: &[RelativePosition],
    ) -> WakeResult<Vec<f64>> {
        deficits(
            positions,
            turbine.thrust_coefficient(),
            turbine.rotor_diameter(),
            turbine.turbulence_intensity(),
            &self.grid,
            self.policy,
        )
    }
}
