//! Circle shape.

use super::{new_shape_id, ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A circle grown from its center by dragging outward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center point (the pointer-down position).
    pub center: Point,
    /// Radius, never negative.
    pub radius: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Circle {
    /// Start a zero-radius circle at the pointer-down position.
    pub fn start(center: Point, style: ShapeStyle) -> Self {
        Self {
            id: new_shape_id(),
            center,
            radius: 0.0,
            style,
        }
    }

    /// Copy of this circle whose edge passes through `point`.
    pub fn through(&self, point: Point) -> Self {
        Self {
            radius: self.center.distance(point),
            ..self.clone()
        }
    }

    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius)
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.center.distance(point) <= self.radius + tolerance + self.style.width() / 2.0
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }
}
