use std::ops::{
    Add,
    Sub,
};
use std::fmt;
use itertools::Itertools;
use serde::{Serialize, Deserialize};

use crate::geo_3d::GeoVector;

/// A point in 3D space.
/// Contains the coordinates of the point.
/// Has basic math support for adding and subtracting vectors.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Point{x, y, z}
    }

    /// Create a new zero point.
    pub fn zero() -> Self {
        Point{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Point with every coordinate at `+inf`. Start value for a running minimum.
    pub fn pos_infinity() -> Self {
        Point{x: f32::INFINITY, y: f32::INFINITY, z: f32::INFINITY}
    }

    /// Point with every coordinate at `-inf`. Start value for a running maximum.
    pub fn neg_infinity() -> Self {
        Point{x: f32::NEG_INFINITY, y: f32::NEG_INFINITY, z: f32::NEG_INFINITY}
    }

    /// Get the distance between two points.
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;

        (dx*dx + dy*dy + dz*dz).sqrt()
    }

    /// Component-wise minimum of two points.
    pub fn component_min(&self, other: &Point) -> Point {
        Point{
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Component-wise maximum of two points.
    pub fn component_max(&self, other: &Point) -> Point {
        Point{
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }

    /// Parse a literal point written as three numbers separated by commas and/or whitespace,
    /// e.g. `"1.0,2.0,3.0"` or `"1 2 3"`.
    /// Returns `None` unless there are exactly three finite numbers.
    pub fn parse_literal(text: &str) -> Option<Point> {
        let (x, y, z) = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<f32>().ok().filter(|value| value.is_finite()))
            .collect_tuple::<(_, _, _)>()?;
        Some(Point{x: x?, y: y?, z: z?})
    }

    /// Write the point in the literal form read by `parse_literal`.
    /// Uses the shortest representation that reads back to the same value.
    pub fn to_literal(&self) -> String {
        format!("{},{},{}", self.x, self.y, self.z)
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}
impl Add<GeoVector> for Point {
    type Output = Self;

    fn add(self, rhs: GeoVector) -> Self {
        Point{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl Sub<Point> for Point {
    type Output = GeoVector;

    fn sub(self, rhs: Self) -> GeoVector {
        GeoVector{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl Sub<&Point> for &Point {
    type Output = GeoVector;

    fn sub(self, rhs: &Point) -> GeoVector {
        GeoVector{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
