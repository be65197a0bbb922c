//! Straight line segment.

use super::{new_shape_id, point_to_segment_dist, ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{BezPath, Line as KurboLine, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A two-point segment anchored at the pointer-down position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// Start point, fixed for the lifetime of the shape.
    pub start: Point,
    /// End point, follows the pointer while drawing.
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Line {
    /// Start a zero-length line at the pointer-down position.
    pub fn start(origin: Point, style: ShapeStyle) -> Self {
        Self {
            id: new_shape_id(),
            start: origin,
            end: origin,
            style,
        }
    }

    /// Copy of this line with its end point replaced.
    pub fn with_end(&self, end: Point) -> Self {
        Self { end, ..self.clone() }
    }

    /// Flat `[start.x, start.y, end.x, end.y]` form.
    pub fn flat_points(&self) -> [f64; 4] {
        [self.start.x, self.start.y, self.end.x, self.end.y]
    }

    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.start, self.end)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_segment_dist(point, self.start, self.end) <= tolerance + self.style.width() / 2.0
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }
}
