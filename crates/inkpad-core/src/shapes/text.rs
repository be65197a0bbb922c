//! Text label shape.

use super::{new_shape_id, ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// Average glyph advance as a fraction of the font size.
const CHAR_WIDTH_FACTOR: f64 = 0.55;

/// Line height as a multiple of the font size.
const LINE_HEIGHT: f64 = 1.2;

/// A text label placed at the pointer-down position.
///
/// The content is fixed at creation; there is no live editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ShapeId,
    /// Top-left anchor.
    pub position: Point,
    pub content: String,
    /// Style properties; the stroke size is the font size.
    pub style: ShapeStyle,
}

impl Text {
    pub fn new(position: Point, content: impl Into<String>, style: ShapeStyle) -> Self {
        Self {
            id: new_shape_id(),
            position,
            content: content.into(),
            style,
        }
    }

    pub fn font_size(&self) -> f64 {
        self.style.width()
    }

    fn approximate_width(&self) -> f64 {
        let longest = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        longest as f64 * self.font_size() * CHAR_WIDTH_FACTOR
    }

    fn approximate_height(&self) -> f64 {
        self.content.lines().count().max(1) as f64 * self.font_size() * LINE_HEIGHT
    }
}

impl ShapeTrait for Text {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_origin_size(
            self.position,
            (self.approximate_width(), self.approximate_height()),
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.bounds().inflate(tolerance, tolerance).contains(point)
    }

    /// Text has no outline; the path is its layout box.
    fn to_path(&self) -> BezPath {
        self.bounds().to_path(0.1)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }
}
