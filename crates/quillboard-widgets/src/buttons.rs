//! Button components: text toggles, scale buttons, stroke-pattern buttons.

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, Pos2, Sense, Stroke, StrokeKind, Ui, vec2,
};

use crate::{sizing, theme};

/// A toggle button with a text label.
/// Solid accent background when selected.
pub struct ToggleButton<'a> {
    label: &'a str,
    selected: bool,
    tooltip: Option<&'a str>,
    min_width: Option<f32>,
    height: f32,
    font_size: f32,
}

impl<'a> ToggleButton<'a> {
    /// Create a new toggle button.
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            selected,
            tooltip: None,
            min_width: None,
            height: 24.0,
            font_size: 11.0,
        }
    }

    /// Set a hover tooltip.
    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Set minimum width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        // Calculate text size for proper button width
        let font_id = egui::FontId::proportional(self.font_size);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER, // Color doesn't matter for sizing
        );
        let text_width = galley.size().x;
        let width = self
            .min_width
            .unwrap_or(text_width + 16.0)
            .max(text_width + 16.0);
        let size = vec2(width, self.height);

        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                theme::ACCENT
            } else if response.hovered() {
                Color32::from_gray(235)
            } else {
                Color32::from_gray(245)
            };

            let text_color = if self.selected {
                Color32::WHITE
            } else {
                Color32::from_gray(80)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                font_id,
                text_color,
            );
        }

        let clicked = response.clicked();
        let response = if let Some(tooltip) = self.tooltip {
            response.on_hover_text(tooltip)
        } else {
            response
        };
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// A content-scale button (XS/S/M/L/XL style).
pub struct ScaleButton<'a> {
    label: &'a str,
    size_px: f32,
    selected: bool,
}

impl<'a> ScaleButton<'a> {
    /// Create a new scale button.
    pub fn new(label: &'a str, size_px: f32, selected: bool) -> Self {
        Self {
            label,
            size_px,
            selected,
        }
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        // Two-letter labels need more width
        let width = if self.label.len() > 1 { 34.0 } else { 26.0 };
        let size = vec2(width, 24.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                theme::ACCENT
            } else if response.hovered() {
                Color32::from_gray(230)
            } else {
                Color32::from_gray(245)
            };

            let text_color = if self.selected {
                Color32::WHITE
            } else {
                Color32::from_gray(60)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            // Label letter size proportional to the scale it represents
            let display_size = match self.label {
                "XS" => 9.0,
                "S" => 10.0,
                "M" => 12.0,
                "L" => 14.0,
                _ => 15.0,
            };

            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(display_size),
                text_color,
            );
        }

        let clicked = response.clicked();
        response
            .on_hover_text(format!("{} px", self.size_px as i32))
            .on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// Stroke pattern preview for [`StrokePatternButton`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StrokePreview {
    Solid,
    Dashed,
    Dotted,
}

/// A stroke-pattern button showing a horizontal line preview.
pub struct StrokePatternButton<'a> {
    preview: StrokePreview,
    tooltip: &'a str,
    selected: bool,
}

impl<'a> StrokePatternButton<'a> {
    /// Create a new stroke-pattern button.
    pub fn new(preview: StrokePreview, tooltip: &'a str, selected: bool) -> Self {
        Self {
            preview,
            tooltip,
            selected,
        }
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = vec2(30.0, 20.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                theme::ACCENT
            } else if response.hovered() {
                Color32::from_gray(235)
            } else {
                Color32::from_gray(250)
            };

            let line_color = if self.selected {
                Color32::WHITE
            } else {
                Color32::from_gray(60)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            if !self.selected {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    Stroke::new(1.0, Color32::from_gray(200)),
                    StrokeKind::Inside,
                );
            }

            let y = rect.center().y;
            let left = rect.left() + 5.0;
            let right = rect.right() - 5.0;
            let stroke = Stroke::new(2.0, line_color);
            match self.preview {
                StrokePreview::Solid => {
                    ui.painter()
                        .line_segment([Pos2::new(left, y), Pos2::new(right, y)], stroke);
                }
                StrokePreview::Dashed => {
                    let mut x = left;
                    while x < right {
                        let end = (x + 5.0).min(right);
                        ui.painter()
                            .line_segment([Pos2::new(x, y), Pos2::new(end, y)], stroke);
                        x += 8.0;
                    }
                }
                StrokePreview::Dotted => {
                    let mut x = left;
                    while x <= right {
                        ui.painter().circle_filled(Pos2::new(x, y), 1.2, line_color);
                        x += 5.0;
                    }
                }
            }
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
