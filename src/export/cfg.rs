use crate::args;
use crate::export::{
    ExportChoice,
    ExportMethod,
};
use serde::{Serialize, Deserialize};

/// Arguments for the export process.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportArgs {
    /// Export method.
    #[serde(rename = "method")]
    pub method_name: String,

    /// Optional config file for the export method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_cfg: Option<String>,

    /// Input path for the quad file.
    #[serde(alias = "input", alias = "in", alias = "i")]
    pub input_path: String,

    /// Output path (extension must match the export method).
    #[serde(alias = "output", alias = "out", alias = "o")]
    pub output_path: String,
}

/// Export target struct.
/// Contains the export method and arguments.
#[derive(Debug)]
pub struct ExportTarget {
    /// Export method.
    pub export_method: ExportChoice,
    /// Export arguments.
    pub export_args: ExportArgs,
}
impl ExportTarget {
    /// Construct an export target from a config file (json, toml or yaml).
    pub fn from_cfg_file(cfg_file: &str) -> args::ProcResult<Self> {
        let export_args: ExportArgs = crate::io::read_cfg_file(cfg_file)?;
        Self::from_args(export_args)
    }

    /// Construct an export target from already parsed arguments.
    pub fn from_args(export_args: ExportArgs) -> args::ProcResult<Self> {
        let mut export_method = ExportChoice::from_name(&export_args.method_name)?;

        // Check the output path against the method
        let extension = export_method.get_output_extension();
        if !export_args.output_path.ends_with(&format!(".{}", extension)) {
            args::err_str(&format!("Output path for method {} must end with .{} (got {})",
                export_args.method_name, extension, export_args.output_path))?;
        }

        // Parse the method-specific arguments
        if let Some(method_cfg) = export_args.method_cfg.as_ref() {
            export_method.parse_method_cfg(method_cfg)?;
        }

        Ok(ExportTarget{export_method, export_args})
    }
}
