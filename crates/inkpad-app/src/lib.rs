//! Inkpad application shell.
//!
//! Replays scripted pointer input onto a board and exports the result.

pub mod error;
pub mod replay;
pub mod script;

pub use error::AppError;
pub use replay::{ReplayReport, Replayer};

use clap::Parser;
use inkpad_core::BoardConfig;
use std::path::{Path, PathBuf};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "inkpad", version, about = "Replay pointer input onto an Inkpad board")]
pub struct Cli {
    /// JSON script of tool changes and pointer events.
    pub script: PathBuf,

    /// Board configuration (JSON).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the rendered board as SVG.
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Write the shape collections as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

fn write_file(path: &Path, contents: &str) -> Result<(), AppError> {
    std::fs::write(path, contents).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Run a replay as described by the command line.
///
/// Without `--svg` or `--json` the shape collections are printed to stdout.
pub fn run(cli: &Cli) -> Result<ReplayReport, AppError> {
    let config = match &cli.config {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };
    let steps = script::load(&cli.script)?;

    let mut replayer = Replayer::new(&config);
    let report = replayer.run(&steps)?;

    let board_json = || replayer.store().to_json().map_err(AppError::Serialize);
    if let Some(path) = &cli.svg {
        write_file(path, &replayer.renderer().to_svg()?)?;
    }
    if let Some(path) = &cli.json {
        write_file(path, &board_json()?)?;
    }
    if cli.svg.is_none() && cli.json.is_none() {
        println!("{}", board_json()?);
    }
    Ok(report)
}
