//! Pointer events as delivered by the event source.

use crate::shapes::ShapeId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Input device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
    #[default]
    Mouse,
    Pen,
    Touch,
}

/// Pointer event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// Pointer left the canvas element.
    Leave,
}

/// A positioned pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Position in canvas space, as resolved by the canvas surface.
    pub position: Point,
    /// Raw viewport position.
    pub client_position: Point,
    pub pointer_type: PointerType,
    /// Id of the shape element under the pointer, if any.
    pub target: Option<ShapeId>,
}

impl PointerEvent {
    /// Mouse event on empty canvas whose canvas and viewport positions coincide.
    pub fn new(kind: PointerEventKind, position: impl Into<Point>) -> Self {
        let position = position.into();
        Self {
            kind,
            position,
            client_position: position,
            pointer_type: PointerType::Mouse,
            target: None,
        }
    }

    pub fn down(position: impl Into<Point>) -> Self {
        Self::new(PointerEventKind::Down, position)
    }

    pub fn moved(position: impl Into<Point>) -> Self {
        Self::new(PointerEventKind::Move, position)
    }

    pub fn up(position: impl Into<Point>) -> Self {
        Self::new(PointerEventKind::Up, position)
    }

    pub fn leave(position: impl Into<Point>) -> Self {
        Self::new(PointerEventKind::Leave, position)
    }

    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    pub fn with_target(mut self, target: Option<ShapeId>) -> Self {
        self.target = target;
        self
    }

    pub fn with_client_position(mut self, client_position: impl Into<Point>) -> Self {
        self.client_position = client_position.into();
        self
    }

    pub fn is_touch(&self) -> bool {
        self.pointer_type == PointerType::Touch
    }
}
