use clap::Parser;
use simplelog::{
    ColorChoice,
    Config,
    LevelFilter,
    TermLogger,
    TerminalMode,
};

fn main() {

    // 1. Parse commandline arguments
    let cli = quadset::args::QuadsetCli::parse();

    // 2. Set up logging on stderr, keeping stdout for reports
    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(err) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Logger setup failed: {}", err);
    }

    // 3. Run the command
    if let Err(err) = quadset::run_command(cli) {
        eprintln!("PROCESS ERROR!");
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
