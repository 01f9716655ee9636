//! Vector type alias for absolute turbine positions.

use nalgebra::Vector3;

/// 3D vector type for absolute positions in the farm frame.
///
/// This is a simple alias for `nalgebra::Vector3<f64>`: x east, y north,
/// z up (hub height). Wake models never see this frame directly; positions
/// are rotated into the rotor-aligned frame first (see [`crate::geometry`]).
pub type Vec3 = Vector3<f64>;
