//! Retained display list renderer with id-tagged elements.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use inkpad_core::shapes::{Shape, ShapeColor, ShapeId};
use kurbo::{BezPath, Circle, Point, Size};
use peniko::Color;
use std::fmt::Write;

/// Paint applied to an element.
#[derive(Debug, Clone, Copy)]
pub struct Paint {
    /// Stroke color and width.
    pub stroke: Option<(Color, f64)>,
    pub fill: Option<Color>,
}

/// One drawn shape, tagged with the id of the shape it came from.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: ShapeId,
    pub path: BezPath,
    pub paint: Paint,
    /// Snapshot of the source shape, used for hit testing.
    pub shape: Shape,
}

impl Element {
    fn from_shape(shape: &Shape) -> Self {
        let style = shape.style();
        let color: Color = style.color.into();
        let paint = match shape {
            Shape::Freehand(_) | Shape::Line(_) => Paint {
                stroke: Some((color, style.width())),
                fill: None,
            },
            Shape::Rectangle(_) | Shape::Circle(_) => Paint {
                stroke: Some((color, style.width())),
                fill: Some(color),
            },
            Shape::Text(_) => Paint {
                stroke: None,
                fill: Some(color),
            },
        };
        Self {
            id: shape.id(),
            path: shape.to_path(),
            paint,
            shape: shape.clone(),
        }
    }
}

/// Renderer that keeps the last built frame as a list of elements.
#[derive(Debug, Clone, Default)]
pub struct DisplayListRenderer {
    elements: Vec<Element>,
    cursor: Option<Circle>,
    size: Size,
    background: Option<Color>,
    hit_tolerance: f64,
}

impl DisplayListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra slack around shapes when picking.
    pub fn with_hit_tolerance(mut self, tolerance: f64) -> Self {
        self.hit_tolerance = tolerance;
        self
    }

    /// Elements in paint order (back to front).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn eraser_cursor(&self) -> Option<Circle> {
        self.cursor
    }

    /// Id of the topmost element under `point`.
    pub fn pick(&self, point: Point) -> Option<ShapeId> {
        self.elements
            .iter()
            .rev()
            .find(|element| element.shape.hit_test(point, self.hit_tolerance))
            .map(|element| element.id)
    }

    /// Serialize the last frame as an SVG document.
    pub fn to_svg(&self) -> RenderResult<String> {
        let Some(background) = self.background else {
            return Err(RendererError::RenderFailed("no frame has been built".into()));
        };
        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.size.width,
            h = self.size.height
        )?;
        writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            hex(background)
        )?;

        for element in &self.elements {
            write_element(&mut svg, element)?;
        }

        if let Some(cursor) = self.cursor {
            writeln!(
                svg,
                r##"  <circle cx="{}" cy="{}" r="{}" fill="none" stroke="#000000" stroke-dasharray="4 2"/>"##,
                cursor.center.x, cursor.center.y, cursor.radius
            )?;
        }
        svg.push_str("</svg>\n");
        Ok(svg)
    }
}

impl Renderer for DisplayListRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.elements.clear();
        self.elements.extend(ctx.store.iter().map(Element::from_shape));
        self.cursor = ctx.eraser_cursor;
        self.size = ctx.viewport_size;
        self.background = Some(self.background_color(ctx));
        log::trace!("Built display list with {} elements", self.elements.len());
    }
}

fn hex(color: Color) -> String {
    ShapeColor::from(color).to_hex()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn write_element(svg: &mut String, element: &Element) -> std::fmt::Result {
    if let Shape::Text(text) = &element.shape {
        let fill = element.paint.fill.map(hex).unwrap_or_else(|| "none".into());
        return writeln!(
            svg,
            r#"  <text id="{}" x="{}" y="{}" font-size="{}" fill="{}" dominant-baseline="hanging">{}</text>"#,
            element.id,
            text.position.x,
            text.position.y,
            text.font_size(),
            fill,
            escape(&text.content)
        );
    }

    let fill = element.paint.fill.map(hex).unwrap_or_else(|| "none".into());
    write!(svg, r#"  <path id="{}" d="{}" fill="{}""#, element.id, element.path.to_svg(), fill)?;
    if let Some((color, width)) = element.paint.stroke {
        write!(
            svg,
            r#" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round""#,
            hex(color),
            width
        )?;
    }
    svg.push_str("/>\n");
    Ok(())
}
