mod proc_errors;
mod cfg;
mod methods;

use crate::quads::QuadSet;

// Re-export errors
pub use proc_errors::{
    ExportError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::{
    ExportArgs,
    ExportTarget,
};
// Re-export export methods
pub use methods::{
    ExportChoice,
    ExportMethod,
};

/// Run the export process.
/// Loads the input quads and hands them to the export method.
/// Returns a `ProcResult` with the exported `QuadSet` or an `Err`.
pub fn do_export(export_target: &ExportTarget) -> ProcResult<QuadSet> {
    let export_method = &export_target.export_method;
    let export_args = &export_target.export_args;

    log::info!("Loading quads from {}...", export_args.input_path);
    let quad_set = QuadSet::load(&export_args.input_path)?;
    if quad_set.is_empty() {
        log::warn!("No quads loaded from {}, exporting an empty set", export_args.input_path);
    }

    log::info!("Running export method: {}...", export_method.get_method_name());
    export_method.save_quads(&quad_set, &export_args.input_path, &export_args.output_path)?;
    Ok(quad_set)
}
