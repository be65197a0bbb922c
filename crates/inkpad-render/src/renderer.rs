//! Renderer trait abstraction.

use inkpad_core::store::ShapeStore;
use kurbo::{Circle, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Output error: {0}")]
    Output(#[from] std::fmt::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The shapes to render.
    pub store: &'a ShapeStore,
    /// Canvas size in pixels.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
    /// Eraser indicator, drawn above every shape.
    pub eraser_cursor: Option<Circle>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(store: &'a ShapeStore, viewport_size: Size) -> Self {
        Self {
            store,
            viewport_size,
            background_color: Color::WHITE,
            eraser_cursor: None,
        }
    }

    /// Set the eraser indicator.
    pub fn with_eraser_cursor(mut self, cursor: Option<Circle>) -> Self {
        self.eraser_cursor = cursor;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the scene for a frame.
    ///
    /// Called after every store change; every shape element must carry its
    /// shape id so pointer targets can be resolved back to shapes.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
