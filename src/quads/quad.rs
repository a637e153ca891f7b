use std::ops::Index;
use serde::Serialize;

use crate::geo_3d::{Angle, GeoVector, Hpr, Point};

/// A quad of the track surface.
/// Four points, in order around the quad, and an invisibility flag.
/// Invisible quads are part of the track logic but are not drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quad {
    points: [Point; 4],
    invisible: bool,
}
impl Quad {
    /// Create a new quad.
    pub fn new(points: [Point; 4], invisible: bool) -> Self {
        Quad{points, invisible}
    }

    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    /// Get vertex `i`, or `None` outside 0-3.
    pub fn get_point(&self, i: usize) -> Option<Point> {
        self.points.get(i).copied()
    }

    pub fn is_invisible(&self) -> bool {
        self.invisible
    }

    /// Mean of the four vertices.
    pub fn center(&self) -> Point {
        let p0 = self.points[0];
        let offset = (self.points[1] - p0) + (self.points[2] - p0) + (self.points[3] - p0);
        p0 + offset / 4.0
    }

    /// Unit normal of the quad, taken from its diagonals and pointing up (y >= 0).
    /// A degenerate quad gets the up vector.
    pub fn normal(&self) -> GeoVector {
        let diagonal_a = self.points[2] - self.points[0];
        let diagonal_b = self.points[3] - self.points[1];
        let normal = diagonal_b.cross(&diagonal_a);
        if normal.norm_sq() == 0.0 {
            return GeoVector::yhat();
        }
        let normal = normal.normalize();
        if normal.y < 0.0 { -normal } else { normal }
    }

    /// Check if a point lies inside the quad when projected on the x/z plane.
    /// Height is ignored. Works for convex quads of either winding, edges count as inside.
    pub fn point_in_quad(&self, p: &Point) -> bool {
        let side = |a: &Point, b: &Point| {
            (b.x - a.x) * (p.z - a.z) - (b.z - a.z) * (p.x - a.x)
        };

        let mut has_pos = false;
        let mut has_neg = false;
        for i in 0..4 {
            let s = side(&self.points[i], &self.points[(i + 1) % 4]);
            has_pos |= s > 0.0;
            has_neg |= s < 0.0;
        }
        !(has_pos && has_neg)
    }

    /// Orientation of something driving on this quad with the given heading.
    pub fn surface_hpr(&self, heading: Angle) -> Hpr {
        Hpr::with_pitch_roll(heading, &self.normal())
    }
}
impl Index<usize> for Quad {
    type Output = Point;

    fn index(&self, i: usize) -> &Point {
        &self.points[i]
    }
}
