use std::ops::{
    Add,
    Sub,
    Mul,
    Div,
};
use std::fmt;
use serde::{Serialize, Deserialize};

/// A vector in 3D space.
/// Used for quad normals and edge directions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct GeoVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl GeoVector {
    /// Create a new vector.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        GeoVector{x, y, z}
    }

    /// Create a new zero vector.
    pub fn zero() -> Self {
        GeoVector{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Normalize and return a new vector.
    pub fn normalize(&self) -> Self {
        let mag = self.norm();
        GeoVector{
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &GeoVector) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the cross product of two vectors.
    pub fn cross(&self, other: &GeoVector) -> GeoVector {
        GeoVector{
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f32 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f32 {
        self.norm_sq().sqrt()
    }

    /// Construct a yhat vector.
    pub fn yhat() -> Self {
        GeoVector{x: 0.0, y: 1.0, z: 0.0}
    }
}
impl Add for GeoVector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        GeoVector{
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}
impl Sub for GeoVector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        GeoVector{
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
impl Mul<f32> for GeoVector {
    type Output = GeoVector;

    fn mul(self, other: f32) -> GeoVector {
        GeoVector{
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
impl Div<f32> for GeoVector {
    type Output = GeoVector;

    fn div(self, other: f32) -> GeoVector {
        GeoVector{
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}
impl std::ops::Neg for GeoVector {
    type Output = GeoVector;

    fn neg(self) -> GeoVector {
        GeoVector{
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
impl fmt::Display for GeoVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}
