//! Shape definitions for the drawing board.

mod circle;
mod freehand;
mod line;
mod rectangle;
mod text;

pub use circle::Circle;
pub use freehand::Freehand;
pub use line::Line;
pub use rectangle::Rectangle;
pub use text::Text;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for shapes.
///
/// UUID v7 ids sort in generation order and stay unique for shapes created
/// within the same millisecond.
pub type ShapeId = Uuid;

/// Generate a fresh shape id.
pub fn new_shape_id() -> ShapeId {
    Uuid::now_v7()
}

/// Errors produced while parsing a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("expected 3 or 6 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

/// An opaque RGB color as picked by the color control.
///
/// Serialized as its `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ShapeColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Parse `#rrggbb` or the short `#rgb` form.
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let hex = value
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(value.to_string()))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(value.to_string()));
        }
        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| ColorError::BadDigit(value.to_string()))
        };
        match hex.len() {
            3 => Ok(Self::new(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(ColorError::BadLength(value.to_string())),
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for ShapeColor {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for ShapeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ShapeColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for ShapeColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<ShapeColor> for String {
    fn from(color: ShapeColor) -> Self {
        color.to_hex()
    }
}

impl From<ShapeColor> for Color {
    fn from(color: ShapeColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, 255)
    }
}

impl From<Color> for ShapeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b)
    }
}

/// Style captured from the tool state when a shape is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub color: ShapeColor,
    /// Stroke width in pixels; doubles as font size for text.
    pub stroke_size: u32,
}

impl ShapeStyle {
    pub fn new(color: ShapeColor, stroke_size: u32) -> Self {
        Self { color, stroke_size }
    }

    /// Stroke width as a float for geometry.
    pub fn width(&self) -> f64 {
        f64::from(self.stroke_size)
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            color: ShapeColor::black(),
            stroke_size: 5,
        }
    }
}

/// The four collections a board keeps its shapes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    /// Freehand strokes and straight lines.
    Lines,
    Rectangles,
    Circles,
    Texts,
}

impl Collection {
    /// Collections in render and erase lookup order.
    pub const ALL: [Collection; 4] = [
        Collection::Lines,
        Collection::Rectangles,
        Collection::Circles,
        Collection::Texts,
    ];
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = kurbo::Vec2::new(b.x - a.x, b.y - a.y);
    let pv = kurbo::Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    point.distance(proj)
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the bounding box in canvas coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in canvas coordinates) hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Freehand(Freehand),
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
    Text(Text),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Freehand(s) => s.id(),
            Shape::Line(s) => s.id(),
            Shape::Rectangle(s) => s.id(),
            Shape::Circle(s) => s.id(),
            Shape::Text(s) => s.id(),
        }
    }

    /// The collection this shape is stored in.
    pub fn collection(&self) -> Collection {
        match self {
            Shape::Freehand(_) | Shape::Line(_) => Collection::Lines,
            Shape::Rectangle(_) => Collection::Rectangles,
            Shape::Circle(_) => Collection::Circles,
            Shape::Text(_) => Collection::Texts,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Freehand(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Freehand(s) => s.hit_test(point, tolerance),
            Shape::Line(s) => s.hit_test(point, tolerance),
            Shape::Rectangle(s) => s.hit_test(point, tolerance),
            Shape::Circle(s) => s.hit_test(point, tolerance),
            Shape::Text(s) => s.hit_test(point, tolerance),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Freehand(s) => s.to_path(),
            Shape::Line(s) => s.to_path(),
            Shape::Rectangle(s) => s.to_path(),
            Shape::Circle(s) => s.to_path(),
            Shape::Text(s) => s.to_path(),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Freehand(s) => s.style(),
            Shape::Line(s) => s.style(),
            Shape::Rectangle(s) => s.style(),
            Shape::Circle(s) => s.style(),
            Shape::Text(s) => s.style(),
        }
    }

    /// Whether the renderer fills this shape.
    pub fn is_filled(&self) -> bool {
        matches!(self, Shape::Rectangle(_) | Shape::Circle(_) | Shape::Text(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        let color = ShapeColor::from_hex("#ff8000").unwrap();
        assert_eq!(color, ShapeColor::new(255, 128, 0));
        assert_eq!(color.to_hex(), "#ff8000");
    }

    #[test]
    fn test_parse_short_hex() {
        let color: ShapeColor = "#0f0".parse().unwrap();
        assert_eq!(color, ShapeColor::new(0, 255, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            ShapeColor::from_hex("ff0000"),
            Err(ColorError::MissingHash(_))
        ));
        assert!(matches!(
            ShapeColor::from_hex("#ff00"),
            Err(ColorError::BadLength(_))
        ));
        assert!(matches!(
            ShapeColor::from_hex("#gg0000"),
            Err(ColorError::BadDigit(_))
        ));
    }

    #[test]
    fn test_serializes_as_hex() {
        let json = serde_json::to_string(&ShapeColor::new(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
        let back: ShapeColor = serde_json::from_str("\"#00f\"").unwrap();
        assert_eq!(back, ShapeColor::new(0, 0, 255));
        assert!(serde_json::from_str::<ShapeColor>("\"blue\"").is_err());
    }

    #[test]
    fn test_peniko_conversion() {
        let color = ShapeColor::new(12, 34, 56);
        let peniko: Color = color.into();
        assert_eq!(ShapeColor::from(peniko), color);
    }

    #[test]
    fn test_ids_unique_within_burst() {
        let ids: std::collections::HashSet<ShapeId> = (0..1000).map(|_| new_shape_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_collection_routing() {
        let style = ShapeStyle::default();
        let origin = Point::new(1.0, 2.0);
        assert_eq!(
            Shape::Freehand(Freehand::start(origin, style)).collection(),
            Collection::Lines
        );
        assert_eq!(
            Shape::Line(Line::start(origin, style)).collection(),
            Collection::Lines
        );
        assert_eq!(
            Shape::Rectangle(Rectangle::start(origin, style)).collection(),
            Collection::Rectangles
        );
        assert_eq!(
            Shape::Circle(Circle::start(origin, style)).collection(),
            Collection::Circles
        );
        assert_eq!(
            Shape::Text(Text::new(origin, "Sample", style)).collection(),
            Collection::Texts
        );
    }

    #[test]
    fn test_segment_distance() {
        let d = point_to_segment_dist(
            Point::new(5.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert!((d - 3.0).abs() < f64::EPSILON);
    }
}
