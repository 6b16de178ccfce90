//! Embedded external video shape.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An embedded video, referenced by URL and played by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub(crate) id: ShapeId,
    /// Top-left corner.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// External video URL.
    pub url: String,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Video {
    /// Default 16:9 embed size.
    pub const DEFAULT_SIZE: (f64, f64) = (480.0, 270.0);

    /// Create a new video embed.
    pub fn new(position: Point, url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width: Self::DEFAULT_SIZE.0,
            height: Self::DEFAULT_SIZE.1,
            url,
            style: ShapeStyle::default(),
        }
    }
}

impl ShapeTrait for Video {
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
    fn test_default_aspect() {
        let video = Video::new(Point::new(0.0, 0.0), "https://example.com/v".to_string());
        assert!((video.width / video.height - 16.0 / 9.0).abs() < 0.01);
    }
}
