use crate::{
    export,
    args,
    quads::QuadSet,
};
use export::methods;

use serde::{Serialize, Deserialize};

/// XML Quads Method struct.
/// Writes the quad file back out with every point as plain coordinates.
#[derive(Debug)]
pub struct Method {
    /// Arguments for the XML Quads method.
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
    #[serde(default = "MethodArgs::default_indent", alias = "pretty")]
    indent: bool,
}
impl MethodArgs {
    pub fn default_indent() -> bool {
        true
    }
    pub fn default() -> Self {
        MethodArgs{
            indent: Self::default_indent(),
        }
    }
}

impl methods::ExportMethod for Method {
    /// Get the name of the export method.
    fn get_method_name(&self) -> String {
        "XML Quads".to_string()
    }

    /// Get the output file extension for the export method.
    fn get_output_extension(&self) -> String {
        "xml".to_string()
    }

    /// Parse the export method config file
    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()> {
        self.method_args = crate::io::read_cfg_file(method_cfg_file)?;
        Ok(())
    }

    /// Write the literal form quad file.
    fn save_quads(&self, quad_set: &QuadSet, source: &str, output_path: &str) -> export::ProcResult<()> {
        if !output_path.ends_with(".xml") {
            export::err_str("BUG: XML output path must end with .xml -- somehow got to the export stage without that!!")?;
        }

        log::info!("Writing {} quads from {} to {}...", quad_set.quad_count(), source, output_path);
        crate::io::xml::write_xml_tree(output_path, &quad_set.to_xml_tree(), self.method_args.indent)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::methods::ExportMethod;
    use crate::geo_3d::Point;
    use crate::quads::{CollectSink, Quad};

    fn temp_path(name: &str) -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("quadset-xml-{}-{}", std::process::id(), name));
        path.to_string_lossy().to_string()
    }

    #[test]
    fn saved_file_reloads() {
        let quad_set = QuadSet::from_quads(vec![
            Quad::new([
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.5, 0.0, 0.0),
                Point::new(1.5, 0.25, 2.0),
                Point::new(0.0, 0.25, 2.0),
            ], true),
        ]);
        let output_path = temp_path("out.xml");

        let method = Method::new().unwrap();
        method.save_quads(&quad_set, "memory", &output_path).unwrap();

        let mut sink = CollectSink::new();
        let reloaded = QuadSet::load_with_sink(&output_path, &mut sink).unwrap();
        assert!(sink.diagnostics.is_empty());
        assert_eq!(reloaded, quad_set);
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let method = Method::new().unwrap();
        assert!(method.save_quads(&QuadSet::empty(), "memory", &temp_path("out.stl")).is_err());
    }

    #[test]
    fn cfg_rejects_unknown_fields() {
        let cfg_path = temp_path("xml_cfg.yaml");
        crate::io::write_to_file(&cfg_path, "indent: false\n").unwrap();
        let mut method = Method::new().unwrap();
        method.parse_method_cfg(&cfg_path).unwrap();
        assert!(!method.method_args.indent);

        crate::io::write_to_file(&cfg_path, "indentation: false\n").unwrap();
        assert!(method.parse_method_cfg(&cfg_path).is_err());
    }
}
