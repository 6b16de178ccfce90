//! Polygon shape.

use super::{ShapeId, ShapeStyle, ShapeTrait, point_to_polyline_dist, points_bounds};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A closed polygon defined by its vertices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    pub(crate) id: ShapeId,
    /// Vertices in order; the outline closes back to the first vertex.
    pub points: Vec<Point>,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Polygon {
    /// Create a new polygon from its vertices.
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            style: ShapeStyle::default(),
        }
    }

    /// The closed outline: vertices plus the repeated first vertex.
    pub fn closed_outline(&self) -> Vec<Point> {
        let mut pts = self.points.clone();
        if let Some(&first) = self.points.first() {
            pts.push(first);
        }
        pts
    }

    /// Even-odd crossing test.
    fn contains(&self, point: Point) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (pi, pj) = (self.points[i], self.points[j]);
            if (pi.y > point.y) != (pj.y > point.y) {
                let x = pj.x + (point.y - pj.y) / (pi.y - pj.y) * (pi.x - pj.x);
                if point.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

impl ShapeTrait for Polygon {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        points_bounds(&self.points)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.contains(point) || point_to_polyline_dist(point, &self.closed_outline()) <= tolerance
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(50.0, 100.0),
        ])
    }

    #[test]
    fn test_contains() {
        let poly = triangle();
        assert!(poly.hit_test(Point::new(50.0, 30.0), 0.0));
        assert!(!poly.hit_test(Point::new(5.0, 90.0), 0.0));
    }

    #[test]
    fn test_outline_tolerance() {
        let poly = triangle();
        // Just outside the base edge, within tolerance.
        assert!(poly.hit_test(Point::new(50.0, -4.0), 5.0));
    }

    #[test]
    fn test_bounds() {
        let poly = triangle();
        let bounds = poly.bounds();
        assert!((bounds.width() - 100.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 100.0).abs() < f64::EPSILON);
    }
}
