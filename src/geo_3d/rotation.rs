use serde::{Serialize, Deserialize};

use crate::geo_3d::{Angle, GeoVector, RAD_TO_DEGREE};

/// A rotation quaternion, as delivered by the physics side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl Quaternion {
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Quaternion{w, x, y, z}
    }

    /// Rotation of `angle` radians around a unit `axis`.
    pub fn from_axis_angle(axis: &GeoVector, angle: Angle) -> Self {
        let (s, c) = (0.5 * angle).sin_cos();
        Quaternion{w: c, x: axis.x * s, y: axis.y * s, z: axis.z * s}
    }
}

/// Heading, pitch, and roll in radians.
/// Heading turns around the up (y) axis, pitch tilts the nose, roll tilts sideways.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hpr {
    pub heading: Angle,
    pub pitch: Angle,
    pub roll: Angle,
}
impl Hpr {
    pub fn new(heading: Angle, pitch: Angle, roll: Angle) -> Self {
        Hpr{heading, pitch, roll}
    }

    /// Decompose a rotation quaternion.
    pub fn from_quaternion(q: &Quaternion) -> Self {
        let w_sq = q.w * q.w;
        let x_sq = q.x * q.x;
        let y_sq = q.y * q.y;
        let z_sq = q.z * q.z;

        // asin is undefined just outside [-1, 1] from float noise
        let sin_heading = (-2.0 * (q.x * q.z - q.y * q.w)).clamp(-1.0, 1.0);

        Hpr{
            pitch: (2.0 * (q.y * q.z + q.x * q.w)).atan2(-x_sq - y_sq + z_sq + w_sq),
            heading: sin_heading.asin(),
            roll: (2.0 * (q.x * q.y + q.z * q.w)).atan2(x_sq - y_sq - z_sq + w_sq),
        }
    }

    /// Keep `heading` and take pitch and roll so that the orientation follows a surface `normal`.
    /// `normal` must be a unit vector.
    pub fn with_pitch_roll(heading: Angle, normal: &GeoVector) -> Self {
        let (x, z) = heading.sin_cos();
        // Angles between the normal and the forward (x,0,z) and sideways (-z,0,x) directions
        let pitch_cos = (normal.x * x + normal.z * z).clamp(-1.0, 1.0);
        let roll_cos = (-normal.x * z + normal.z * x).clamp(-1.0, 1.0);

        Hpr{
            heading,
            pitch: std::f32::consts::FRAC_PI_2 - pitch_cos.acos(),
            roll: std::f32::consts::FRAC_PI_2 - roll_cos.acos(),
        }
    }

    /// Same angles in degrees.
    pub fn to_degrees(&self) -> Hpr {
        Hpr{
            heading: self.heading * RAD_TO_DEGREE,
            pitch: self.pitch * RAD_TO_DEGREE,
            roll: self.roll * RAD_TO_DEGREE,
        }
    }
}
