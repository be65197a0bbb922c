//! Inkpad Render Library
//!
//! Renderer abstraction for Inkpad, a display-list renderer whose elements
//! carry their shape ids, and the canvas stage that resolves viewport
//! pointer input into canvas-space events.

mod display_list;
mod renderer;
mod stage;

pub use display_list::{DisplayListRenderer, Element, Paint};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use stage::{HitTarget, Stage};
