use std::process::ExitCode;

use clap::Parser;
use doxygen_filter::{app, cli, logging};

fn main() -> ExitCode {
    let args = cli::Args::parse();
    let config = match cli::build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(config.log_level) {
        eprintln!("Warning: logger unavailable: {e}");
    }

    match app::run_with_config(&config) {
        Ok(stats) => {
            if config.print_stats {
                eprintln!("{stats}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
