//! Group shape: a container of child shapes.

use super::{Shape, ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A group of shapes treated as one unit for selection.
///
/// Groups expose no context-bar capabilities of their own, so selecting one
/// alongside other shapes empties the applicable-action intersection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub(crate) id: ShapeId,
    /// Child shapes, back to front.
    pub children: Vec<Shape>,
    /// Style properties (unused by children, kept for trait uniformity).
    pub style: ShapeStyle,
}

impl Group {
    /// Create a group from child shapes.
    pub fn new(children: Vec<Shape>) -> Self {
        Self {
            id: Uuid::new_v4(),
            children,
            style: ShapeStyle::default(),
        }
    }
}

impl ShapeTrait for Group {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let mut bounds: Option<Rect> = None;
        for child in &self.children {
            let b = child.bounds();
            bounds = Some(match bounds {
                Some(acc) => acc.union(b),
                None => b,
            });
        }
        bounds.unwrap_or(Rect::ZERO)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.children.iter().any(|c| c.hit_test(point, tolerance))
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
    use crate::shapes::Rectangle;

    #[test]
    fn test_bounds_union() {
        let group = Group::new(vec![
            Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0)),
            Shape::Rectangle(Rectangle::new(Point::new(90.0, 90.0), 10.0, 10.0)),
        ]);
        let bounds = group.bounds();
        assert!((bounds.width() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_any_child() {
        let group = Group::new(vec![
            Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0)),
            Shape::Rectangle(Rectangle::new(Point::new(90.0, 90.0), 10.0, 10.0)),
        ]);
        assert!(group.hit_test(Point::new(95.0, 95.0), 0.0));
        // The gap between children is not a hit.
        assert!(!group.hit_test(Point::new(50.0, 50.0), 0.0));
    }
}
