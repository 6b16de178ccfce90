//! Portal shape: an embedded page from the host note application.

use super::{ScaleLevel, ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An embedded note page. Shows only its title bar when collapsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portal {
    pub(crate) id: ShapeId,
    /// Top-left corner.
    pub position: Point,
    pub width: f64,
    /// Height when expanded; the collapsed height is derived from the header.
    pub expanded_height: f64,
    /// Name of the embedded page.
    pub page_name: String,
    /// Collapsed to the title bar.
    #[serde(default)]
    pub collapsed: bool,
    /// Display scale for the embedded content.
    #[serde(default)]
    pub scale_level: ScaleLevel,
    /// When true, the box scales with the content scale.
    pub auto_resize: bool,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Portal {
    /// Default expanded size.
    pub const DEFAULT_SIZE: (f64, f64) = (280.0, 200.0);

    /// Create a new expanded portal.
    pub fn new(position: Point, page_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width: Self::DEFAULT_SIZE.0,
            expanded_height: Self::DEFAULT_SIZE.1,
            page_name,
            collapsed: false,
            scale_level: ScaleLevel::default(),
            auto_resize: true,
            style: ShapeStyle::default(),
        }
    }

    /// Height of the title bar at the current scale.
    pub fn header_height(&self) -> f64 {
        self.scale_level.font_size() * 1.8
    }

    /// Current height, accounting for the collapsed state.
    pub fn height(&self) -> f64 {
        if self.collapsed {
            self.header_height()
        } else {
            self.expanded_height
        }
    }

    /// Collapse to the title bar or restore the expanded height.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    /// Set the display scale. When auto-resizing, the expanded box scales
    /// along with the content.
    pub fn set_scale_level(&mut self, level: ScaleLevel) {
        if self.auto_resize {
            let ratio = level.font_size() / self.scale_level.font_size();
            self.width *= ratio;
            self.expanded_height *= ratio;
        }
        self.scale_level = level;
    }
}

impl ShapeTrait for Portal {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height(),
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
    fn test_collapse_shrinks_to_header() {
        let mut portal = Portal::new(Point::new(0.0, 0.0), "Journal".to_string());
        let expanded = portal.bounds().height();

        portal.set_collapsed(true);
        let collapsed = portal.bounds().height();
        assert!(collapsed < expanded);
        assert!((collapsed - portal.header_height()).abs() < f64::EPSILON);

        portal.set_collapsed(false);
        assert!((portal.bounds().height() - expanded).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scale_level_scales_expanded_box() {
        let mut portal = Portal::new(Point::new(0.0, 0.0), "Journal".to_string());
        let before = portal.expanded_height;
        portal.set_scale_level(ScaleLevel::Lg);
        assert!(portal.expanded_height > before);
    }
}
