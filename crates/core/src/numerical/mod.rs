//! Numerical building blocks consumed by the wake models.

pub mod interpolate;
pub mod ode;

pub use interpolate::LinearInterpolator;
pub use ode::integrate_rk4;
