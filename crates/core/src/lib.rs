//! Wake Simulation Core Library
//!
//! Single-wake deficit engine for wind-farm flow simulation: computes the
//! fractional wind-speed deficit an upstream turbine's wake induces at
//! arbitrary downstream points, using interchangeable semi-empirical wake
//! models.
//!
//! ## Models
//!
//! - **NOJ** (Jensen/Katić) — momentum-conserving top-hat wake, closed form.
//! - **GCLarsen** — self-similar wake width and deficit anchored to an
//!   empirical width fit, closed form with a virtual origin.
//! - **Ainslie** — eddy-viscosity boundary-layer wake: the centerline
//!   velocity is integrated downstream as an ODE and interpolated per
//!   evaluation point.
//!
//! All three share one contract (see [`models::WakeModel`]): points in the
//! rotor-aligned frame in, one deficit in `[-1, 0]` per point out, zero
//! outside the wake. Calls are pure and deterministic; evaluate as many
//! turbine pairs in parallel as you like.
//!
//! ## Frames
//!
//! Absolute turbine offsets and a meteorological wind direction are rotated
//! into the rotor-aligned frame by [`geometry::downwind_transform`]; the
//! models never see the absolute frame.

// Core value types
pub mod core_types;

// Errors and domain policy
pub mod error;

// Wind-direction coordinate transform
pub mod geometry;

// Random layout generation utility
pub mod layout;

// The wake deficit models
pub mod models;

// ODE integration and interpolation building blocks
pub mod numerical;

// Re-export the public surface
pub use core_types::{RelativePosition, Series, Vec3, WakeTurbine};
pub use error::{DomainPolicy, WakeError, WakeResult};
pub use geometry::{downwind_transform, downwind_transform_between, DownwindFrame};
pub use layout::{generate_random_layout, pairwise_min_distance, LayoutConfig};
pub use models::{AinslieWake, GclWake, NojWake, OdeGrid, WakeModel};
