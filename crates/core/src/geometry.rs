//! Wind-direction coordinate transform.
//!
//! Wake models work in a rotor-aligned frame: x along the wind direction
//! with origin at the upstream hub, and a single radial coordinate for the
//! distance from the wake centerline. This module rotates absolute turbine
//! offsets into that frame.
//!
//! The wind direction uses the meteorological convention, degrees clockwise
//! from north, so for `wd` in degrees the downstream axis is
//!
//! ```text
//! nx = sin(wd)·dx + cos(wd)·dy
//! nr = sqrt((cos(wd)·dx − sin(wd)·dy)² + dh²)
//! ```
//!
//! where `(dx, dy)` is the horizontal offset, `dh` the hub-height
//! difference, `nx` the signed downstream distance, and `nr` the combined
//! radial distance (cross-wind and vertical).

use serde::{Deserialize, Serialize};

use crate::core_types::Vec3;

/// A point expressed in the downwind frame of an upstream turbine.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DownwindFrame {
    /// Signed distance along the wind direction; negative means upstream.
    pub downstream: f64,
    /// Combined cross-wind and vertical distance from the wake centerline.
    pub radial: f64,
}

/// Rotates a turbine offset into the downwind frame.
///
/// `dx`/`dy` are the horizontal offsets between the two hubs, `dh` the
/// hub-height difference, and `wind_direction_deg` the meteorological wind
/// direction in degrees. Defined for all real inputs, side-effect free.
pub fn downwind_transform(dx: f64, dy: f64, dh: f64, wind_direction_deg: f64) -> DownwindFrame {
    let (sin_wd, cos_wd) = wind_direction_deg.to_radians().sin_cos();
    let downstream = sin_wd * dx + cos_wd * dy;
    let crosswind = cos_wd * dx - sin_wd * dy;
    DownwindFrame { downstream, radial: crosswind.hypot(dh) }
}

/// Downwind frame of `point` relative to `upstream`, both given as absolute
/// hub positions (x east, y north, z hub height).
pub fn downwind_transform_between(
    upstream: &Vec3,
    point: &Vec3,
    wind_direction_deg: f64,
) -> DownwindFrame {
    let offset = point - upstream;
    downwind_transform(offset.x, offset.y, offset.z, wind_direction_deg)
}
