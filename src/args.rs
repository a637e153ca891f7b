mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};
use serde::Serialize;
use strum::{
    Display,
    EnumIter,
};

// Re-export errors
pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Track quad set loader and exporter.
#[derive(Debug, Parser)]
#[command(name = "quadset")]
pub struct QuadsetCli {
    #[arg(short, long, global = true)]
    /// Print debug messages.
    pub verbose: bool,

    #[clap(subcommand)]
    pub sub_command: Command,
}

/// Parser for the subcommands of the quadset binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "info")]
    /// Load a quad file and print a summary.
    Info(InfoArgs),

    #[command(name = "export")]
    /// Load a quad file and export it with an export method.
    Export(ExportCli),

    #[command(name = "run")]
    /// Run an export described by a config file.
    Run(RunArgs),

    #[command(name = "example")]
    /// Print an example export config file.
    Example(ExampleArgs),
}

/// Output format for summaries and example configs.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Yaml,
    Json,
    Toml,
}
impl Format {
    /// Serialize a value in this format.
    pub fn render<T: Serialize>(&self, value: &T) -> ProcResult<String> {
        match self {
            Format::Yaml => Ok(serde_yaml::to_string(value)?),
            Format::Json => Ok(serde_json::to_string_pretty(value)?),
            Format::Toml => Ok(toml::to_string_pretty(value)?),
        }
    }
}

/// Compiled arguments for the info command.
#[derive(Debug, Args)]
pub struct InfoArgs {
    #[arg(short, long = "input")]
    /// Path to the quad file.
    pub input_path: String,

    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Summary format.
    pub format: Format,

    #[arg(short, long)]
    /// List every quad in the summary.
    pub quads: bool,
}

/// Compiled arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportCli {
    #[arg(short, long = "input")]
    /// Path to the quad file.
    pub input_path: String,

    #[arg(short, long = "output")]
    /// Path to the output file (extension must match the method).
    pub output_path: String,

    #[arg(short, long = "method")]
    /// Export method name.
    pub method_name: String,

    #[arg(short = 'c', long = "method-cfg")]
    /// Optional config file for the export method.
    pub method_cfg: Option<String>,
}

/// Compiled arguments for the run command.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Export config file (json, toml, or yaml).
    pub cfg_file: String,
}

/// Compiled arguments for the example command.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(short, long)]
    /// Export method to show. Lists the available methods if omitted.
    pub method: Option<String>,

    #[arg(short, long, value_enum)]
    /// Config format. Shows every format if omitted.
    pub format: Option<Format>,
}
