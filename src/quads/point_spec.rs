use crate::geo_3d::Point;
use crate::quads::Quad;

/// A point attribute of a quad element, before resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointSpec {
    /// `"x,y,z"`: a point given by its coordinates.
    Literal(Point),
    /// `"n:p"`: vertex `p` of the already loaded quad `n`.
    Indexed {
        quad: usize,
        vertex: usize,
    },
}
impl PointSpec {
    /// Parse a point attribute value.
    /// Returns `None` if the value is malformed.
    pub fn parse(text: &str) -> Option<PointSpec> {
        if PointSpec::is_indexed(text) {
            let (quad, vertex) = PointSpec::parse_indexed(text)?;
            Some(PointSpec::Indexed{quad, vertex})
        } else {
            Point::parse_literal(text).map(PointSpec::Literal)
        }
    }

    /// Check if a value is written in the indexed form.
    /// Only a colon after the first character selects it,
    /// so `":5"` is read (and rejected) as a literal.
    pub fn is_indexed(text: &str) -> bool {
        matches!(text.find(':'), Some(pos) if pos > 0)
    }

    /// Parse the `"n:p"` form into quad and vertex indices.
    /// Both sides must be non-negative integers, surrounding whitespace is allowed.
    pub fn parse_indexed(text: &str) -> Option<(usize, usize)> {
        let (quad, vertex) = text.split_once(':')?;
        Some((quad.trim().parse::<usize>().ok()?, vertex.trim().parse::<usize>().ok()?))
    }

    /// Resolve against the quads loaded so far.
    /// Returns `None` for a quad index past the end of `loaded` or a vertex outside 0-3.
    pub fn resolve(&self, loaded: &[Quad]) -> Option<Point> {
        match *self {
            PointSpec::Literal(point) => Some(point),
            PointSpec::Indexed { quad, vertex } => loaded.get(quad)?.get_point(vertex),
        }
    }
}
