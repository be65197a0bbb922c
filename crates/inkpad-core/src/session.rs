//! Per-gesture pointer session.

use crate::store::ShapeRef;
use crate::tools::ToolKind;

/// Context of one drawing gesture, from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Tool the gesture was started with.
    pub tool: ToolKind,
    /// The in-progress shape.
    pub shape: ShapeRef,
}

/// Interaction state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Growing the shape referenced by the session.
    Drawing(Session),
    /// Eraser held down: every move erases what it hits.
    Erasing,
}

impl Gesture {
    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }
}
