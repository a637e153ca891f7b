use crate::{
    export,
    args,
    quads::QuadSet,
};
use crate::io::stl;
use export::methods;

use serde::{Serialize, Deserialize};

/// STL Triangles Method struct.
/// Splits every quad into two triangles and writes them to an STL file.
#[derive(Debug)]
pub struct Method {
    /// Arguments for the STL Triangles method.
    method_args: MethodArgs,
}
impl Method {
    pub fn new() -> args::ProcResult<Self> {
        Ok(Method{method_args: MethodArgs::default()})
    }
}

/// Deserializer from the method cfg file
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct MethodArgs {
    #[serde(default = "MethodArgs::default_skip_invisible")]
    skip_invisible: bool,
}
impl MethodArgs {
    pub fn default_skip_invisible() -> bool {
        true
    }
    pub fn default() -> Self {
        MethodArgs{
            skip_invisible: Self::default_skip_invisible(),
        }
    }
}

impl methods::ExportMethod for Method {
    /// Get the name of the export method.
    fn get_method_name(&self) -> String {
        "STL Triangles".to_string()
    }

    /// Get the output file extension for the export method.
    fn get_output_extension(&self) -> String {
        "stl".to_string()
    }

    /// Parse the export method config file
    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()> {
        self.method_args = crate::io::read_cfg_file(method_cfg_file)?;
        Ok(())
    }

    /// Triangulate the quads and save them.
    /// Triangles are (p0, p1, p2) and (p0, p2, p3).
    fn save_quads(&self, quad_set: &QuadSet, source: &str, output_path: &str) -> export::ProcResult<()> {
        if !output_path.ends_with(".stl") {
            export::err_str("BUG: STL output path must end with .stl -- somehow got to the export stage without that!!")?;
        }

        let mut triangles = Vec::<stl_io::Triangle>::new();
        for quad in quad_set.quads() {
            if self.method_args.skip_invisible && quad.is_invisible() {
                continue;
            }
            triangles.push(stl::stl_triangle(&quad[0], &quad[1], &quad[2]));
            triangles.push(stl::stl_triangle(&quad[0], &quad[2], &quad[3]));
        }

        log::info!("Saving {} triangles from {} to {}...", triangles.len(), source, output_path);
        stl::save_stl(&triangles, output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::methods::ExportMethod;
    use crate::geo_3d::Point;
    use crate::quads::Quad;

    fn temp_path(name: &str) -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("quadset-stl-{}-{}", std::process::id(), name));
        path.to_string_lossy().to_string()
    }

    fn two_quads() -> QuadSet {
        let ground = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(0.0, 0.0, 1.0),
        ];
        let mut raised = ground;
        for point in raised.iter_mut() {
            point.y = 2.0;
        }
        QuadSet::from_quads(vec![Quad::new(ground, false), Quad::new(raised, true)])
    }

    fn saved_face_count(method: &Method, name: &str) -> usize {
        let output_path = temp_path(name);
        method.save_quads(&two_quads(), "memory", &output_path).unwrap();
        let mut file = std::fs::File::open(&output_path).unwrap();
        stl_io::read_stl(&mut file).unwrap().faces.len()
    }

    #[test]
    fn invisible_quads_skipped_by_default() {
        let method = Method::new().unwrap();
        assert_eq!(saved_face_count(&method, "visible.stl"), 2);
    }

    #[test]
    fn invisible_quads_kept_on_request() {
        let cfg_path = temp_path("stl_cfg.json");
        crate::io::write_to_file(&cfg_path, "{\"skip_invisible\": false}").unwrap();
        let mut method = Method::new().unwrap();
        method.parse_method_cfg(&cfg_path).unwrap();
        assert_eq!(saved_face_count(&method, "all.stl"), 4);
    }
}
