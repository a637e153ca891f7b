/*!
 * This is the export methods module.
 * Adding new methods should be done here.
 *
 * New methods need:
 * - A struct implementing `ExportMethod`
 * - An enum variant containing that struct in `ExportChoice`
 * - A constructor arg_name and function in `EXPORT_TARGET_CONSTRUCTION`
 *
 */

use enum_dispatch::enum_dispatch;

use crate::{
    export,
    args,
    quads::QuadSet,
};

//
// ------------------------------------------------------------
// Code that requires modification to add a new export method
//      |
//      V
//

// Source files for the export methods
mod xml_quads;
mod stl_triangles;
mod json_summary;

/// Export methods enum.
/// To add a new method:
/// include it here,
/// add handling for its constructor in `EXPORT_TARGET_CONSTRUCTION`,
/// and implement the `ExportMethod` trait for it.
#[derive(Debug)]
#[enum_dispatch(ExportMethod)]
pub enum ExportChoice {
    /// Quad file with every point written out as coordinates.
    XmlQuads(xml_quads::Method),
    /// Triangulated track surface for viewing in mesh tools.
    StlTriangles(stl_triangles::Method),
    /// Counts and bounds, optionally with every quad.
    JsonSummary(json_summary::Method),
}

/// Export construction array -- Written out in once place for easy modification.
/// To add a new method:
/// include it in the `ExportChoice` enum,
/// add handling for its constructor here,
/// and implement the `ExportMethod` trait for it.
const EXPORT_TARGET_CONSTRUCTION: &[ExportConstructor] = &[
    // Literal quad file constructor.
    ExportConstructor{
        arg_name: "xml_quads",
        constructor: || {Ok(ExportChoice::XmlQuads(xml_quads::Method::new()?))},
    },
    // STL surface constructor.
    ExportConstructor{
        arg_name: "stl_triangles",
        constructor: || {Ok(ExportChoice::StlTriangles(stl_triangles::Method::new()?))},
    },
    // JSON summary constructor.
    ExportConstructor{
        arg_name: "json_summary",
        constructor: || {Ok(ExportChoice::JsonSummary(json_summary::Method::new()?))},
    },
];

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new export method
//      |
//      V
//

/// Export method trait.
/// This trait must be implemented for all export methods.
/// To add a new method:
/// include it in the `ExportChoice` enum,
/// add handling for its constructor in `EXPORT_TARGET_CONSTRUCTION`,
/// and implement this trait for it.
#[enum_dispatch] // This is a macro that allows the enum to be used in a trait object-like way
pub trait ExportMethod {
    /// Get the name of the export method.
    fn get_method_name(&self) -> String;

    /// Get the output file extension for the export method.
    fn get_output_extension(&self) -> String;

    /// Parse the method config file
    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()>;

    /// Save the quads to a file.
    /// `source` names where the quads were loaded from.
    fn save_quads(&self, quad_set: &QuadSet, source: &str, output_path: &str) -> export::ProcResult<()>;
}

/// Export method constructor.
/// Used to construct an export method from a config file.
struct ExportConstructor {
    /// Name of the export method.
    arg_name: &'static str,
    /// Constructor function.
    constructor: fn() -> args::ProcResult<ExportChoice>,
}

//
// ------------------------------------------------------------
// Functions and structs with no modification or reference needed
//      |
//      V
//

/// Export target construction
impl ExportChoice {
    /// Construct an export method from a name (given in the config file or on the command line).
    pub fn from_name(arg_name: &str) -> args::ProcResult<Self> {
        for constructor in EXPORT_TARGET_CONSTRUCTION {
            if constructor.arg_name == arg_name {
                return (constructor.constructor)();
            }
        }

        let mut error_str = format!("Export method not found: {arg_name}\n");
        error_str.push_str("Available methods:\n");
        for name in Self::available_names() {
            error_str.push_str(&format!("    {}\n", name));
        }
        args::err_str(&error_str)
    }

    /// Names accepted by `from_name`.
    pub fn available_names() -> Vec<&'static str> {
        EXPORT_TARGET_CONSTRUCTION.iter().map(|constructor| constructor.arg_name).collect()
    }
}
