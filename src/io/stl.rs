use crate::io;
use crate::geo_3d::{
    Point,
    GeoVector,
};

/// Save a vector of triangles to a STL file.
/// Uses the external `stl_io` crate.
pub fn save_stl(triangles: &Vec<stl_io::Triangle>, output_path: &str) -> io::IoResult<()> {
    let mut f = io::create(output_path)?;
    match stl_io::write_stl(&mut f, triangles.iter())
    {
        Ok(_) => (),
        Err(error) => {
            return Err(io::IoError{file: Some(output_path.to_string()), cause: io::IoErrorType::File(error)});
        },
    };
    Ok(())
}

/// Helper function for triangle construction.
/// The normal is taken from the winding of the three vertices.
pub fn stl_triangle(v0: &Point, v1: &Point, v2: &Point) -> stl_io::Triangle {
    let normal = (v1 - v0).cross(&(v2 - v0));
    let normal = if normal.norm_sq() > 0.0 { normal.normalize() } else { GeoVector::zero() };
    stl_io::Triangle{
        normal: stl_io::Normal::new([normal.x, normal.y, normal.z]),
        vertices: [
            stl_io::Vertex::new([v0.x, v0.y, v0.z]),
            stl_io::Vertex::new([v1.x, v1.y, v1.z]),
            stl_io::Vertex::new([v2.x, v2.y, v2.z]),
        ]
    }
}
