//! Freehand pen stroke.

use super::{new_shape_id, point_to_segment_dist, ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A freehand drawing (series of points, never empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    pub(crate) id: ShapeId,
    /// Points in drawing order.
    points: Vec<Point>,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Freehand {
    /// Start a stroke at the pointer-down position.
    pub fn start(origin: Point, style: ShapeStyle) -> Self {
        Self {
            id: new_shape_id(),
            points: vec![origin],
            style,
        }
    }

    /// Copy of this stroke extended by one point.
    ///
    /// Consecutive duplicates are kept.
    pub fn with_point(&self, point: Point) -> Self {
        let mut points = Vec::with_capacity(self.points.len() + 1);
        points.extend_from_slice(&self.points);
        points.push(point);
        Self {
            id: self.id,
            points,
            style: self.style,
        }
    }

    /// Flat `[x0, y0, x1, y1, ...]` form.
    pub fn flat_points(&self) -> Vec<f64> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl ShapeTrait for Freehand {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };
        self.points
            .iter()
            .skip(1)
            .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p))
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let reach = tolerance + self.style.width() / 2.0;
        match self.points.as_slice() {
            [] => false,
            [only] => only.distance(point) <= reach,
            points => points
                .windows(2)
                .any(|w| point_to_segment_dist(point, w[0], w[1]) <= reach),
        }
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some((first, rest)) = self.points.split_first() else {
            return path;
        };
        path.move_to(*first);
        if rest.is_empty() {
            // A single dab still renders as a round-capped dot.
            path.line_to(*first);
        }
        for point in rest {
            path.line_to(*point);
        }
        path
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_has_one_point() {
        let stroke = Freehand::start(Point::new(3.0, 4.0), ShapeStyle::default());
        assert_eq!(stroke.len(), 1);
        assert_eq!(stroke.flat_points(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_with_point_keeps_identity() {
        let stroke = Freehand::start(Point::new(0.0, 0.0), ShapeStyle::default());
        let grown = stroke.with_point(Point::new(10.0, 10.0));
        assert_eq!(grown.id(), stroke.id());
        assert_eq!(grown.len(), 2);
        assert_eq!(stroke.len(), 1);
    }

    #[test]
    fn test_bounds() {
        let stroke = Freehand::start(Point::new(0.0, 0.0), ShapeStyle::default())
            .with_point(Point::new(100.0, 50.0))
            .with_point(Point::new(50.0, 100.0));

        let bounds = stroke.bounds();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test() {
        let style = ShapeStyle::new(Default::default(), 2);
        let stroke =
            Freehand::start(Point::new(0.0, 0.0), style).with_point(Point::new(100.0, 0.0));

        assert!(stroke.hit_test(Point::new(50.0, 0.0), 5.0));
        assert!(!stroke.hit_test(Point::new(50.0, 20.0), 5.0));
    }

    #[test]
    fn test_single_point_hit() {
        let style = ShapeStyle::new(Default::default(), 4);
        let dot = Freehand::start(Point::new(10.0, 10.0), style);
        assert!(dot.hit_test(Point::new(11.0, 11.0), 0.0));
        assert!(!dot.hit_test(Point::new(20.0, 20.0), 0.0));
    }
}
