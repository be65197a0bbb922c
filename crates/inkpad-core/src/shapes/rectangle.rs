//! Rectangle shape.

use super::{new_shape_id, ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A rectangle spanned from its origin by a signed width and height.
///
/// Negative extents mean the drag went toward the negative axis; they are
/// kept as-is and never normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Corner where the drag started.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Start a 0x0 rectangle at the pointer-down position.
    pub fn start(origin: Point, style: ShapeStyle) -> Self {
        Self {
            id: new_shape_id(),
            origin,
            width: 0.0,
            height: 0.0,
            style,
        }
    }

    /// Copy of this rectangle stretched so its far corner sits at `corner`.
    pub fn with_corner(&self, corner: Point) -> Self {
        Self {
            width: corner.x - self.origin.x,
            height: corner.y - self.origin.y,
            ..self.clone()
        }
    }

    /// The corner opposite the origin.
    pub fn far_corner(&self) -> Point {
        Point::new(self.origin.x + self.width, self.origin.y + self.height)
    }

    /// The covered area with positive extents.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.origin, self.far_corner())
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        // Filled: hit anywhere inside, including the stroke.
        let grow = tolerance + self.style.width() / 2.0;
        self.as_rect().inflate(grow, grow).contains(point)
    }

    /// The outline runs origin → origin + width → far corner, so a negative
    /// extent is drawn in the direction it was dragged.
    fn to_path(&self) -> BezPath {
        let far = self.far_corner();
        let mut path = BezPath::new();
        path.move_to(self.origin);
        path.line_to((far.x, self.origin.y));
        path.line_to(far);
        path.line_to((self.origin.x, far.y));
        path.close_path();
        path
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }
}
