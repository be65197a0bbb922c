//! Main application entry point.

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = inkpad_app::Cli::parse();
    log::info!("Starting Inkpad replay of {}", cli.script.display());

    match inkpad_app::run(&cli) {
        Ok(report) => {
            log::debug!("{report:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("inkpad: {err}");
            ExitCode::FAILURE
        }
    }
}
