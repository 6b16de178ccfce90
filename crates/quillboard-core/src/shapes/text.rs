//! Text shape.

use super::{ScaleLevel, ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Font family options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    /// Handwritten-style font (default).
    #[default]
    Hand,
    /// Clean sans-serif.
    Sans,
    /// Serif.
    Serif,
}

impl FontFamily {
    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            FontFamily::Hand => "Hand",
            FontFamily::Sans => "Sans",
            FontFamily::Serif => "Serif",
        }
    }

    /// All available font families.
    pub fn all() -> &'static [FontFamily] {
        &[FontFamily::Hand, FontFamily::Sans, FontFamily::Serif]
    }
}

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Regular,
    Heavy,
}

/// A text shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ShapeId,
    /// Position (top-left corner of the text box).
    pub position: Point,
    /// The text content.
    pub content: String,
    /// Display scale.
    #[serde(default)]
    pub scale_level: ScaleLevel,
    /// Font family.
    #[serde(default)]
    pub font_family: FontFamily,
    /// Font weight.
    #[serde(default)]
    pub font_weight: FontWeight,
    /// When true, width/height track the content.
    pub auto_resize: bool,
    /// Current box width.
    pub width: f64,
    /// Current box height.
    pub height: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Text {
    /// Create a new auto-resizing text shape.
    pub fn new(position: Point, content: String) -> Self {
        let mut text = Self {
            id: Uuid::new_v4(),
            position,
            content,
            scale_level: ScaleLevel::default(),
            font_family: FontFamily::default(),
            font_weight: FontWeight::default(),
            auto_resize: true,
            width: 0.0,
            height: 0.0,
            style: ShapeStyle::default(),
        };
        text.recompute_bounds();
        text
    }

    /// Set the text content, tracking bounds when auto-resizing.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        if self.auto_resize {
            self.recompute_bounds();
        }
    }

    /// Get the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Set the display scale, tracking bounds when auto-resizing.
    pub fn set_scale_level(&mut self, level: ScaleLevel) {
        self.scale_level = level;
        if self.auto_resize {
            self.recompute_bounds();
        }
    }

    /// Re-derive width/height from the content.
    pub fn recompute_bounds(&mut self) {
        self.width = self.approximate_width().max(20.0);
        self.height = self.approximate_height();
    }

    /// Approximate width based on the widest line and font metrics.
    /// A rough estimate; exact measurement belongs to the renderer.
    fn approximate_width(&self) -> f64 {
        let max_line_len = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let char_width_factor = match (self.font_family, self.font_weight) {
            (FontFamily::Hand, FontWeight::Regular) => 0.55,
            (FontFamily::Hand, FontWeight::Heavy) => 0.60,
            (FontFamily::Sans, FontWeight::Regular) => 0.52,
            (FontFamily::Sans, FontWeight::Heavy) => 0.55,
            (FontFamily::Serif, FontWeight::Regular) => 0.58,
            (FontFamily::Serif, FontWeight::Heavy) => 0.60,
        };

        max_line_len as f64 * self.scale_level.font_size() * char_width_factor
    }

    /// Approximate height from the line count.
    fn approximate_height(&self) -> f64 {
        let line_count = self.content.lines().count().max(1);
        let line_count = if self.content.ends_with('\n') {
            line_count + 1
        } else {
            line_count
        };
        line_count as f64 * self.scale_level.font_size() * 1.2
    }
}

impl ShapeTrait for Text {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width.max(20.0),
            self.position.y + self.height.max(self.scale_level.font_size()),
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
    fn test_creation_tracks_content() {
        let text = Text::new(Point::new(0.0, 0.0), "Hello".to_string());
        assert!(text.auto_resize);
        assert!(text.width > 20.0);
        assert!(text.height > 0.0);
    }

    #[test]
    fn test_scale_level_grows_bounds() {
        let mut text = Text::new(Point::new(0.0, 0.0), "Hello world".to_string());
        let before = text.bounds();
        text.set_scale_level(ScaleLevel::Xl);
        let after = text.bounds();
        assert!(after.width() > before.width());
        assert!(after.height() > before.height());
    }

    #[test]
    fn test_fixed_size_ignores_content_changes() {
        let mut text = Text::new(Point::new(0.0, 0.0), "Hi".to_string());
        text.auto_resize = false;
        text.width = 200.0;
        text.height = 40.0;
        text.set_content("a much longer piece of content".to_string());
        assert!((text.width - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_multiline_height() {
        let one = Text::new(Point::new(0.0, 0.0), "one".to_string());
        let three = Text::new(Point::new(0.0, 0.0), "one\ntwo\nthree".to_string());
        assert!(three.height > one.height * 2.5);
    }
}
