pub mod args;
pub mod export;
pub mod geo_3d;
pub mod io;
pub mod quads;
mod crate_errors;

use strum::IntoEnumIterator;

pub use crate_errors::{
    QuadsetError,
    QuadsetResult,
    err_str,
};
pub use quads::{
    Quad,
    QuadSet,
};

use export::{
    ExportArgs,
    ExportChoice,
    ExportMethod,
    ExportTarget,
};

/// Run a parsed command line.
/// Returns a `QuadsetResult` with `()` or an `Err`.
pub fn run_command(cli: args::QuadsetCli) -> QuadsetResult<()> {
    match cli.sub_command {
        args::Command::Info(info_args) => show_info(&info_args),
        args::Command::Export(export_cli) => {
            let export_target = ExportTarget::from_args(ExportArgs{
                method_name: export_cli.method_name,
                method_cfg: export_cli.method_cfg,
                input_path: export_cli.input_path,
                output_path: export_cli.output_path,
            })?;
            run_export(&export_target)
        },
        args::Command::Run(run_args) => {
            log::info!("Loading export config file: {}...", run_args.cfg_file);
            let export_target = ExportTarget::from_cfg_file(&run_args.cfg_file)?;
            run_export(&export_target)
        },
        args::Command::Example(example_args) => example_config(&example_args),
    }
}

/// Load a quad file and print its summary to stdout.
/// A missing or invalid file gives an empty summary, not an error.
pub fn show_info(info_args: &args::InfoArgs) -> QuadsetResult<()> {
    let quad_set = QuadSet::load(&info_args.input_path)?;
    let summary = quad_set.summary(&info_args.input_path, info_args.quads);
    println!("{}", info_args.format.render(&summary)?.trim_end());
    Ok(())
}

fn run_export(export_target: &ExportTarget) -> QuadsetResult<()> {
    let quad_set = export::do_export(export_target)?;
    log::info!("Exported {} quads to {}", quad_set.quad_count(), export_target.export_args.output_path);
    Ok(())
}

/// Display an example config file for an export method.
/// Without a method, lists the available methods.
pub fn example_config(example_args: &args::ExampleArgs) -> QuadsetResult<()> {
    let method_name = match example_args.method.as_ref() {
        Some(method_name) => method_name,
        None => {
            println!("Available methods:");
            for name in ExportChoice::available_names() {
                println!("    {}", name);
            }
            return Ok(());
        },
    };

    let export_method = ExportChoice::from_name(method_name)?;
    let example = ExportArgs{
        method_name: method_name.clone(),
        method_cfg: Some("OPTIONAL/PATH/TO/METHOD/CFG".to_string()),
        input_path: "PATH/TO/INPUT/FILE.xml".to_string(),
        output_path: format!("PATH/TO/OUTPUT/FILE.{}", export_method.get_output_extension()),
    };

    match example_args.format {
        Some(format) => println!("{}", format.render(&example)?.trim_end()),
        None => {
            for format in args::Format::iter() {
                println!("# {}", format);
                println!("{}", format.render(&example)?.trim_end());
                println!();
            }
        },
    }
    Ok(())
}
