//! Highlighter stroke: a wide, translucent marker pass.

use super::{
    SerializableColor, ShapeId, ShapeStyle, ShapeTrait, point_to_polyline_dist, points_bounds,
};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A highlighter stroke.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlighter {
    pub(crate) id: ShapeId,
    /// Sampled stroke points.
    pub points: Vec<Point>,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Highlighter {
    /// Minimum stroke width for the marker pass.
    pub const MIN_WIDTH: f64 = 12.0;

    /// Create a highlighter stroke from sampled points.
    /// Starts out wide and semi-transparent yellow.
    pub fn from_points(points: Vec<Point>) -> Self {
        let style = ShapeStyle {
            color: SerializableColor::new(250, 204, 21, 128),
            stroke_width: Self::MIN_WIDTH,
            ..ShapeStyle::default()
        };
        Self {
            id: Uuid::new_v4(),
            points,
            style,
        }
    }
}

impl ShapeTrait for Highlighter {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let half = self.style.stroke_width.max(Self::MIN_WIDTH) / 2.0;
        points_bounds(&self.points).inflate(half, half)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if self.points.len() < 2 {
            return false;
        }
        let reach = tolerance + self.style.stroke_width.max(Self::MIN_WIDTH) / 2.0;
        point_to_polyline_dist(point, &self.points) <= reach
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}
