use crate::{
    export,
    args,
    quads::QuadSet,
};
use crate::io::{IoError, IoErrorType};
use export::methods;

use serde::{Serialize, Deserialize};

/// JSON Summary Method struct.
/// Writes quad counts and bounds, and optionally the quads themselves.
#[derive(Debug)]
pub struct Method {
    /// Arguments for the JSON Summary method.
    method_args: MethodArgs,
}
impl Method {
    pub fn new() -> args::ProcResult<Self> {
        Ok(Method{method_args: MethodArgs::default()})
    }
}

/// Deserializer from the method cfg file
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct MethodArgs {
    #[serde(default)]
    include_quads: bool,
}

impl methods::ExportMethod for Method {
    /// Get the name of the export method.
    fn get_method_name(&self) -> String {
        "JSON Summary".to_string()
    }

    /// Get the output file extension for the export method.
    fn get_output_extension(&self) -> String {
        "json".to_string()
    }

    /// Parse the export method config file
    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()> {
        self.method_args = crate::io::read_cfg_file(method_cfg_file)?;
        Ok(())
    }

    fn save_quads(&self, quad_set: &QuadSet, source: &str, output_path: &str) -> export::ProcResult<()> {
        let summary = quad_set.summary(source, self.method_args.include_quads);
        let text = match serde_json::to_string_pretty(&summary) {
            Ok(text) => text,
            Err(error) => return Err(IoError::with_file(output_path, IoErrorType::SerdeJson(error)).into()),
        };
        log::info!("Saving summary of {} to {}...", source, output_path);
        crate::io::write_to_file(output_path, &text)?;
        Ok(())
    }
}
