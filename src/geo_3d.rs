//! Small 3D math toolkit for track geometry.
//! Points, vectors, and heading/pitch/roll orientations.

mod point;
mod vector;
mod rotation;

pub use point::Point;
pub use vector::GeoVector;
pub use rotation::{
    Hpr,
    Quaternion,
};

/// Angle type (alias for f32).
pub type Angle = f32;

/// Degrees to radians factor.
pub const DEGREE_TO_RAD: Angle = std::f32::consts::PI / 180.0;
/// Radians to degrees factor.
pub const RAD_TO_DEGREE: Angle = 180.0 / std::f32::consts::PI;

/// Convert an angle in degrees to radians.
pub fn degree_to_rad(angle: Angle) -> Angle {
    angle * DEGREE_TO_RAD
}
