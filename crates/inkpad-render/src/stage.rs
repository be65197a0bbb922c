//! Canvas stage: maps viewport pointer input onto the canvas.

use crate::display_list::DisplayListRenderer;
use inkpad_core::eraser::Subscription;
use inkpad_core::input::{PointerEvent, PointerEventKind, PointerType};
use inkpad_core::shapes::ShapeId;
use kurbo::{Point, Size};
use std::cell::Cell;
use std::rc::Rc;

/// Something that can tell which shape lies under a canvas point.
pub trait HitTarget {
    fn pick(&self, point: Point) -> Option<ShapeId>;
}

impl HitTarget for DisplayListRenderer {
    fn pick(&self, point: Point) -> Option<ShapeId> {
        DisplayListRenderer::pick(self, point)
    }
}

/// The drawing surface as placed in the viewport.
#[derive(Debug, Clone)]
pub struct Stage {
    /// Top-left corner of the canvas in viewport coordinates.
    origin: Point,
    size: Size,
    move_listeners: Rc<Cell<usize>>,
}

impl Stage {
    pub fn new(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
            move_listeners: Rc::new(Cell::new(0)),
        }
    }

    /// Place the canvas at `origin` in the viewport.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Current pixel size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Convert a viewport position to canvas space.
    pub fn pointer_position(&self, client: Point) -> Point {
        client - self.origin.to_vec2()
    }

    /// Convert a canvas position back to viewport space.
    pub fn client_position(&self, canvas: Point) -> Point {
        canvas + self.origin.to_vec2()
    }

    /// Build the event the controller consumes from raw viewport input.
    pub fn resolve(
        &self,
        kind: PointerEventKind,
        client: Point,
        pointer_type: PointerType,
        hits: &impl HitTarget,
    ) -> PointerEvent {
        let position = self.pointer_position(client);
        PointerEvent::new(kind, position)
            .with_client_position(client)
            .with_pointer_type(pointer_type)
            .with_target(hits.pick(position))
    }

    /// Register a pointer-move listener; it stays registered until the
    /// returned subscription is dropped.
    pub fn listen_pointer_moves(&self) -> Subscription {
        let listeners = Rc::clone(&self.move_listeners);
        listeners.set(listeners.get() + 1);
        Subscription::new(move || listeners.set(listeners.get().saturating_sub(1)))
    }

    /// Number of registered pointer-move listeners.
    pub fn move_listeners(&self) -> usize {
        self.move_listeners.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nothing;

    impl HitTarget for Nothing {
        fn pick(&self, _point: Point) -> Option<ShapeId> {
            None
        }
    }

    #[test]
    fn test_pointer_position_subtracts_origin() {
        let stage = Stage::new(Size::new(800.0, 600.0)).with_origin(Point::new(20.0, 100.0));
        assert_eq!(stage.pointer_position(Point::new(25.0, 130.0)), Point::new(5.0, 30.0));
        assert_eq!(stage.client_position(Point::new(5.0, 30.0)), Point::new(25.0, 130.0));
    }

    #[test]
    fn test_resolve_keeps_both_positions() {
        let stage = Stage::new(Size::new(800.0, 600.0)).with_origin(Point::new(0.0, 50.0));
        let event = stage.resolve(
            PointerEventKind::Move,
            Point::new(10.0, 60.0),
            PointerType::Pen,
            &Nothing,
        );
        assert_eq!(event.position, Point::new(10.0, 10.0));
        assert_eq!(event.client_position, Point::new(10.0, 60.0));
        assert_eq!(event.pointer_type, PointerType::Pen);
        assert!(event.target.is_none());
    }

    #[test]
    fn test_listener_count() {
        let stage = Stage::new(Size::new(10.0, 10.0));
        let first = stage.listen_pointer_moves();
        let second = stage.listen_pointer_moves();
        assert_eq!(stage.move_listeners(), 2);
        drop(first);
        assert_eq!(stage.move_listeners(), 1);
        second.cancel();
        assert_eq!(stage.move_listeners(), 0);
    }
}
