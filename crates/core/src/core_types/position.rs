//! Rotor-aligned evaluation point.

use serde::{Deserialize, Serialize};

/// Position of an evaluation point relative to the upstream turbine hub,
/// expressed in the rotor-aligned frame: x along the wind direction,
/// y cross-wind, z vertical.
///
/// All components share the linear unit of the rotor diameter (meters in
/// practice); the models only ever form ratios of the two.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelativePosition {
    /// Signed distance along the wind direction. Negative means the point
    /// is upstream of the turbine.
    pub downstream: f64,
    /// Lateral (cross-wind) offset from the wake centerline.
    pub crosswind: f64,
    /// Vertical offset from hub height.
    pub vertical: f64,
}

impl RelativePosition {
    /// Creates a rotor-aligned evaluation point.
    pub const fn new(downstream: f64, crosswind: f64, vertical: f64) -> Self {
        Self { downstream, crosswind, vertical }
    }

    /// Point on the wake centerline at the given downstream distance.
    pub const fn centerline(downstream: f64) -> Self {
        Self::new(downstream, 0.0, 0.0)
    }

    /// Combined radial distance from the wake centerline,
    /// `sqrt(crosswind^2 + vertical^2)`.
    pub fn radial(&self) -> f64 {
        self.crosswind.hypot(self.vertical)
    }
}

impl From<(f64, f64, f64)> for RelativePosition {
    fn from((downstream, crosswind, vertical): (f64, f64, f64)) -> Self {
        Self::new(downstream, crosswind, vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn radial_combines_crosswind_and_vertical() {
        let p = RelativePosition::new(100.0, 3.0, 4.0);
        assert_relative_eq!(p.radial(), 5.0);
    }

    #[test]
    fn centerline_has_zero_radial_distance() {
        assert_eq!(RelativePosition::centerline(250.0).radial(), 0.0);
    }
}
