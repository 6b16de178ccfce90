//! Shape definitions for the whiteboard canvas.

mod ellipse;
mod freehand;
mod group;
mod highlighter;
mod html;
mod line;
mod polygon;
mod portal;
mod rectangle;
mod text;
mod video;

pub use ellipse::Ellipse;
pub use freehand::Freehand;
pub use group::Group;
pub use highlighter::Highlighter;
pub use html::Html;
pub use line::{ArrowMode, Line};
pub use polygon::Polygon;
pub use portal::Portal;
pub use rectangle::Rectangle;
pub use text::{FontFamily, FontWeight, Text};
pub use video::Video;

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

/// Stroke pattern for shape outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl StrokeStyle {
    /// Display name for UI tooltips.
    pub fn display_name(&self) -> &'static str {
        match self {
            StrokeStyle::Solid => "Solid",
            StrokeStyle::Dashed => "Dashed",
            StrokeStyle::Dotted => "Dotted",
        }
    }

    /// All stroke styles, in UI order.
    pub fn all() -> &'static [StrokeStyle] {
        &[StrokeStyle::Solid, StrokeStyle::Dashed, StrokeStyle::Dotted]
    }
}

/// Display scale for text-bearing shapes (text, html embeds, portals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScaleLevel {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ScaleLevel {
    /// Font size in pixels at this scale level.
    pub fn font_size(&self) -> f64 {
        match self {
            ScaleLevel::Xs => 12.0,
            ScaleLevel::Sm => 16.0,
            ScaleLevel::Md => 20.0,
            ScaleLevel::Lg => 28.0,
            ScaleLevel::Xl => 36.0,
        }
    }

    /// Short label for UI buttons.
    pub fn label(&self) -> &'static str {
        match self {
            ScaleLevel::Xs => "XS",
            ScaleLevel::Sm => "S",
            ScaleLevel::Md => "M",
            ScaleLevel::Lg => "L",
            ScaleLevel::Xl => "XL",
        }
    }

    /// All scale levels, smallest first.
    pub fn all() -> &'static [ScaleLevel] {
        &[
            ScaleLevel::Xs,
            ScaleLevel::Sm,
            ScaleLevel::Md,
            ScaleLevel::Lg,
            ScaleLevel::Xl,
        ]
    }
}

/// Shared style properties for shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Primary color (stroke, and fill unless `no_fill` is set).
    pub color: SerializableColor,
    /// When true the shape interior is not painted.
    #[serde(default)]
    pub no_fill: bool,
    /// Stroke pattern.
    #[serde(default)]
    pub stroke_style: StrokeStyle,
    /// Stroke width.
    pub stroke_width: f64,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            color: SerializableColor::black(),
            no_fill: false,
            stroke_style: StrokeStyle::default(),
            stroke_width: 2.0,
            opacity: 1.0,
        }
    }
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
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}

/// Minimum distance from a point to a polyline (sequence of connected segments).
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| point_to_segment_dist(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

/// Bounding box of a point list.
pub(crate) fn points_bounds(points: &[Point]) -> Rect {
    let mut bounds: Option<Rect> = None;
    for p in points {
        let r = Rect::new(p.x, p.y, p.x, p.y);
        bounds = Some(match bounds {
            Some(b) => b.union(r),
            None => r,
        });
    }
    bounds.unwrap_or(Rect::ZERO)
}

/// Discriminant tag for shape types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Polygon,
    Line,
    Freehand,
    Highlighter,
    Text,
    Html,
    Video,
    Portal,
    Group,
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the bounding box in world coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in world coordinates) hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ShapeStyle;
}

/// Enum wrapper for all shape types (for serialization).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Polygon(Polygon),
    Line(Line),
    Freehand(Freehand),
    Highlighter(Highlighter),
    Text(Text),
    Html(Html),
    Video(Video),
    Portal(Portal),
    Group(Group),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Freehand(_) => ShapeKind::Freehand,
            Shape::Highlighter(_) => ShapeKind::Highlighter,
            Shape::Text(_) => ShapeKind::Text,
            Shape::Html(_) => ShapeKind::Html,
            Shape::Video(_) => ShapeKind::Video,
            Shape::Portal(_) => ShapeKind::Portal,
            Shape::Group(_) => ShapeKind::Group,
        }
    }

    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Ellipse(s) => s.id(),
            Shape::Polygon(s) => s.id(),
            Shape::Line(s) => s.id(),
            Shape::Freehand(s) => s.id(),
            Shape::Highlighter(s) => s.id(),
            Shape::Text(s) => s.id(),
            Shape::Html(s) => s.id(),
            Shape::Video(s) => s.id(),
            Shape::Portal(s) => s.id(),
            Shape::Group(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Polygon(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Freehand(s) => s.bounds(),
            Shape::Highlighter(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
            Shape::Html(s) => s.bounds(),
            Shape::Video(s) => s.bounds(),
            Shape::Portal(s) => s.bounds(),
            Shape::Group(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Rectangle(s) => s.hit_test(point, tolerance),
            Shape::Ellipse(s) => s.hit_test(point, tolerance),
            Shape::Polygon(s) => s.hit_test(point, tolerance),
            Shape::Line(s) => s.hit_test(point, tolerance),
            Shape::Freehand(s) => s.hit_test(point, tolerance),
            Shape::Highlighter(s) => s.hit_test(point, tolerance),
            Shape::Text(s) => s.hit_test(point, tolerance),
            Shape::Html(s) => s.hit_test(point, tolerance),
            Shape::Video(s) => s.hit_test(point, tolerance),
            Shape::Portal(s) => s.hit_test(point, tolerance),
            Shape::Group(s) => s.hit_test(point, tolerance),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Rectangle(s) => s.style(),
            Shape::Ellipse(s) => s.style(),
            Shape::Polygon(s) => s.style(),
            Shape::Line(s) => s.style(),
            Shape::Freehand(s) => s.style(),
            Shape::Highlighter(s) => s.style(),
            Shape::Text(s) => s.style(),
            Shape::Html(s) => s.style(),
            Shape::Video(s) => s.style(),
            Shape::Portal(s) => s.style(),
            Shape::Group(s) => s.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Rectangle(s) => s.style_mut(),
            Shape::Ellipse(s) => s.style_mut(),
            Shape::Polygon(s) => s.style_mut(),
            Shape::Line(s) => s.style_mut(),
            Shape::Freehand(s) => s.style_mut(),
            Shape::Highlighter(s) => s.style_mut(),
            Shape::Text(s) => s.style_mut(),
            Shape::Html(s) => s.style_mut(),
            Shape::Video(s) => s.style_mut(),
            Shape::Portal(s) => s.style_mut(),
            Shape::Group(s) => s.style_mut(),
        }
    }

    /// Display scale, for shapes that have one.
    pub fn scale_level(&self) -> Option<ScaleLevel> {
        match self {
            Shape::Text(t) => Some(t.scale_level),
            Shape::Html(h) => Some(h.scale_level),
            Shape::Portal(p) => Some(p.scale_level),
            _ => None,
        }
    }

    /// Set the display scale on shapes that support it.
    pub fn set_scale_level(&mut self, level: ScaleLevel) {
        match self {
            Shape::Text(t) => t.set_scale_level(level),
            Shape::Html(h) => h.set_scale_level(level),
            Shape::Portal(p) => p.set_scale_level(level),
            _ => {}
        }
    }

    /// Auto-resize flag, for shapes that have one.
    pub fn auto_resize(&self) -> Option<bool> {
        match self {
            Shape::Text(t) => Some(t.auto_resize),
            Shape::Html(h) => Some(h.auto_resize),
            Shape::Portal(p) => Some(p.auto_resize),
            _ => None,
        }
    }

    /// Set the auto-resize flag on shapes that support it.
    /// Enabling it re-derives the shape's bounds from its content.
    pub fn set_auto_resize(&mut self, on: bool) {
        match self {
            Shape::Text(t) => {
                t.auto_resize = on;
                if on {
                    t.recompute_bounds();
                }
            }
            Shape::Html(h) => h.auto_resize = on,
            Shape::Portal(p) => p.auto_resize = on,
            _ => {}
        }
    }

    /// Collapsed state, for portal shapes.
    pub fn collapsed(&self) -> Option<bool> {
        match self {
            Shape::Portal(p) => Some(p.collapsed),
            _ => None,
        }
    }

    /// Set the collapsed state on portal shapes.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        if let Shape::Portal(p) = self {
            p.set_collapsed(collapsed);
        }
    }

    /// End decorations, for line shapes.
    pub fn arrow_mode(&self) -> Option<ArrowMode> {
        match self {
            Shape::Line(l) => Some(l.arrow_mode),
            _ => None,
        }
    }

    /// Set end decorations on line shapes.
    pub fn set_arrow_mode(&mut self, mode: ArrowMode) {
        if let Shape::Line(l) = self {
            l.arrow_mode = mode;
        }
    }

    /// External URL, for video shapes.
    pub fn url(&self) -> Option<&str> {
        match self {
            Shape::Video(v) => Some(&v.url),
            _ => None,
        }
    }

    /// Set the external URL on video shapes.
    pub fn set_url(&mut self, url: String) {
        if let Shape::Video(v) = self {
            v.url = url;
        }
    }

    /// Linked page name, for portal shapes.
    pub fn page_name(&self) -> Option<&str> {
        match self {
            Shape::Portal(p) => Some(&p.page_name),
            _ => None,
        }
    }

    pub fn font_family(&self) -> Option<FontFamily> {
        match self {
            Shape::Text(t) => Some(t.font_family),
            _ => None,
        }
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        if let Shape::Text(t) = self {
            t.font_family = family;
        }
    }

    pub fn font_weight(&self) -> Option<FontWeight> {
        match self {
            Shape::Text(t) => Some(t.font_weight),
            _ => None,
        }
    }

    pub fn set_font_weight(&mut self, weight: FontWeight) {
        if let Shape::Text(t) = self {
            t.font_weight = weight;
        }
    }

    /// The text payload an editing session operates on, for shapes that have one.
    pub fn editable_text(&self) -> Option<&str> {
        match self {
            Shape::Text(t) => Some(t.content()),
            Shape::Line(l) => Some(&l.label),
            Shape::Portal(p) => Some(&p.page_name),
            _ => None,
        }
    }

    /// Replace the text payload on shapes that support editing.
    pub fn set_editable_text(&mut self, text: String) {
        match self {
            Shape::Text(t) => t.set_content(text),
            Shape::Line(l) => l.label = text,
            Shape::Portal(p) => p.page_name = text,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);

        assert!((point_to_segment_dist(Point::new(50.0, 10.0), a, b) - 10.0).abs() < 1e-9);
        // Beyond the endpoint, distance is to the endpoint itself.
        assert!((point_to_segment_dist(Point::new(110.0, 0.0), a, b) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_polyline_distance_picks_nearest_segment() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ];
        let d = point_to_polyline_dist(Point::new(105.0, 50.0), &pts);
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_level_font_sizes_increase() {
        let sizes: Vec<f64> = ScaleLevel::all().iter().map(|l| l.font_size()).collect();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_shape_property_accessors() {
        let mut text = Shape::Text(Text::new(Point::new(0.0, 0.0), "hi".to_string()));
        assert_eq!(text.scale_level(), Some(ScaleLevel::Md));
        text.set_scale_level(ScaleLevel::Xl);
        assert_eq!(text.scale_level(), Some(ScaleLevel::Xl));

        let mut rect = Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0));
        assert_eq!(rect.scale_level(), None);
        // A no-op on shapes without the property.
        rect.set_scale_level(ScaleLevel::Xl);
        assert_eq!(rect.scale_level(), None);
    }

    #[test]
    fn test_editable_text_accessors() {
        let mut line = Shape::Line(Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
        assert_eq!(line.editable_text(), Some(""));
        line.set_editable_text("label".to_string());
        assert_eq!(line.editable_text(), Some("label"));

        let video = Shape::Video(Video::new(Point::new(0.0, 0.0), String::new()));
        assert_eq!(video.editable_text(), None);
    }
}
