//! Line shape with optional end decorations and a text label.

use super::{ShapeId, ShapeStyle, ShapeTrait, point_to_segment_dist};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which ends of a line carry an arrowhead decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArrowMode {
    #[default]
    None,
    Start,
    End,
    Both,
}

impl ArrowMode {
    pub fn has_start(&self) -> bool {
        matches!(self, ArrowMode::Start | ArrowMode::Both)
    }

    pub fn has_end(&self) -> bool {
        matches!(self, ArrowMode::End | ArrowMode::Both)
    }

    /// Short label for UI buttons.
    pub fn label(&self) -> &'static str {
        match self {
            ArrowMode::None => "—",
            ArrowMode::Start => "←",
            ArrowMode::End => "→",
            ArrowMode::Both => "↔",
        }
    }

    /// Display name for UI tooltips.
    pub fn display_name(&self) -> &'static str {
        match self {
            ArrowMode::None => "No arrowheads",
            ArrowMode::Start => "Arrowhead at start",
            ArrowMode::End => "Arrowhead at end",
            ArrowMode::Both => "Arrowheads at both ends",
        }
    }

    /// All modes, in UI order.
    pub fn all() -> &'static [ArrowMode] {
        &[
            ArrowMode::None,
            ArrowMode::Start,
            ArrowMode::End,
            ArrowMode::Both,
        ]
    }
}

/// A straight line segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    pub start: Point,
    pub end: Point,
    /// Text label drawn at the midpoint.
    #[serde(default)]
    pub label: String,
    /// End decorations.
    #[serde(default)]
    pub arrow_mode: ArrowMode,
    /// Default arrowhead size.
    pub head_size: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            label: String::new(),
            arrow_mode: ArrowMode::default(),
            head_size: 15.0,
            style: ShapeStyle::default(),
        }
    }

    /// Get the direction vector (normalized).
    pub fn direction(&self) -> Vec2 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len = (dx * dx + dy * dy).sqrt();
        if len < f64::EPSILON {
            Vec2::new(1.0, 0.0)
        } else {
            Vec2::new(dx / len, dy / len)
        }
    }

    /// Length of the segment.
    pub fn length(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint, where the label is anchored.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let reach = tolerance + self.style.stroke_width / 2.0;
        point_to_segment_dist(point, self.start, self.end) <= reach
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}
