//! Embedded HTML fragment shape.

use super::{ScaleLevel, ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An embedded HTML fragment rendered by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Html {
    pub(crate) id: ShapeId,
    /// Top-left corner.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Raw HTML source.
    pub html: String,
    /// Display scale for the embedded content.
    #[serde(default)]
    pub scale_level: ScaleLevel,
    /// When true, the box scales with the content scale.
    pub auto_resize: bool,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Html {
    /// Default embed size.
    pub const DEFAULT_SIZE: (f64, f64) = (320.0, 180.0);

    /// Create a new HTML embed.
    pub fn new(position: Point, html: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width: Self::DEFAULT_SIZE.0,
            height: Self::DEFAULT_SIZE.1,
            html,
            scale_level: ScaleLevel::default(),
            auto_resize: true,
            style: ShapeStyle::default(),
        }
    }

    /// Set the display scale. When auto-resizing, the box scales along with
    /// the content so the embed keeps its layout.
    pub fn set_scale_level(&mut self, level: ScaleLevel) {
        if self.auto_resize {
            let ratio = level.font_size() / self.scale_level.font_size();
            self.width *= ratio;
            self.height *= ratio;
        }
        self.scale_level = level;
    }
}

impl ShapeTrait for Html {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.bounds().inflate(tolerance, tolerance).contains(point)
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

    #[test]
    fn test_scale_level_scales_box() {
        let mut html = Html::new(Point::new(0.0, 0.0), "<b>hi</b>".to_string());
        let before = html.width;
        html.set_scale_level(ScaleLevel::Xl);
        assert!(html.width > before);
    }

    #[test]
    fn test_fixed_size_keeps_box() {
        let mut html = Html::new(Point::new(0.0, 0.0), String::new());
        html.auto_resize = false;
        let before = (html.width, html.height);
        html.set_scale_level(ScaleLevel::Xs);
        assert_eq!(before, (html.width, html.height));
        assert_eq!(html.scale_level, ScaleLevel::Xs);
    }
}
