//! Core value types shared by all wake models.

pub mod position;
pub mod series;
pub mod turbine;
pub mod vec3;

pub use position::RelativePosition;
pub use series::Series;
pub use turbine::WakeTurbine;
pub use vec3::Vec3;
