//! Application errors.

use inkpad_core::{ConfigError, ToolError};
use inkpad_render::RendererError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid script: {0}")]
    Script(#[source] serde_json::Error),
    #[error("step {step}: {source}")]
    Step {
        step: usize,
        #[source]
        source: ToolError,
    },
    #[error("failed to render board: {0}")]
    Render(#[from] RendererError),
    #[error("failed to serialize board: {0}")]
    Serialize(#[source] serde_json::Error),
}
