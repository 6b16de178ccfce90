//! Color palette and color picker components.

use egui::{Color32, CursorIcon, Pos2, Rect, Sense, Stroke, Ui, Vec2, vec2};

use crate::{sizing, theme};

/// A named swatch color.
#[derive(Clone, Copy)]
pub struct SwatchColor {
    pub name: &'static str,
    pub color: Color32,
}

impl SwatchColor {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: Color32::from_rgb(r, g, b),
        }
    }
}

/// The context-bar swatch palette.
pub const SWATCH_COLORS: &[SwatchColor] = &[
    SwatchColor::new("Black", 28, 25, 23),
    SwatchColor::new("Gray", 107, 114, 128),
    SwatchColor::new("Red", 239, 68, 68),
    SwatchColor::new("Orange", 249, 115, 22),
    SwatchColor::new("Yellow", 234, 179, 8),
    SwatchColor::new("Green", 34, 197, 94),
    SwatchColor::new("Teal", 20, 184, 166),
    SwatchColor::new("Blue", 59, 130, 246),
    SwatchColor::new("Indigo", 99, 102, 241),
    SwatchColor::new("Purple", 168, 85, 247),
    SwatchColor::new("Pink", 236, 72, 153),
    SwatchColor::new("White", 255, 255, 255),
];

/// A clickable circular color swatch.
pub struct ColorSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
    size: Vec2,
}

impl<'a> ColorSwatch<'a> {
    /// Create a new color swatch.
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
            size: vec2(sizing::SMALL, sizing::SMALL),
        }
    }

    /// Set whether this swatch is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Use grid size (smaller, for color grids).
    pub fn grid(mut self) -> Self {
        self.size = vec2(16.0, 16.0);
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0;

            ui.painter().circle_filled(center, radius, self.color);
            // Light colors need an outline to stay visible on the panel.
            ui.painter()
                .circle_stroke(center, radius, Stroke::new(1.0, Color32::from_gray(210)));

            if self.selected {
                // Inner offset ring
                ui.painter().circle_stroke(
                    center,
                    radius - 3.0,
                    Stroke::new(2.0, Color32::from_gray(30)),
                );
            }
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}

/// A "no fill" swatch (white with red diagonal).
pub struct NoColorSwatch<'a> {
    tooltip: &'a str,
    selected: bool,
    size: Vec2,
}

impl<'a> NoColorSwatch<'a> {
    /// Create a new "no fill" swatch.
    pub fn new(tooltip: &'a str) -> Self {
        Self {
            tooltip,
            selected: false,
            size: vec2(sizing::SMALL, sizing::SMALL),
        }
    }

    /// Set whether this swatch is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the swatch and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0;

            ui.painter().circle_filled(center, radius, Color32::WHITE);
            ui.painter()
                .circle_stroke(center, radius, Stroke::new(1.0, Color32::from_gray(200)));

            // Red diagonal line
            let offset = radius * 0.6;
            ui.painter().line_segment(
                [
                    Pos2::new(center.x - offset, center.y + offset),
                    Pos2::new(center.x + offset, center.y - offset),
                ],
                Stroke::new(2.0, Color32::from_rgb(239, 68, 68)),
            );

            if self.selected {
                ui.painter().circle_stroke(
                    center,
                    radius - 3.0,
                    Stroke::new(2.0, Color32::from_gray(30)),
                );
            }
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// A hue-wheel swatch, shown when the selection's colors disagree.
pub struct MixedColorSwatch<'a> {
    tooltip: &'a str,
    size: Vec2,
}

impl<'a> MixedColorSwatch<'a> {
    /// Create a new mixed-state swatch.
    pub fn new(tooltip: &'a str) -> Self {
        Self {
            tooltip,
            size: vec2(sizing::SMALL, sizing::SMALL),
        }
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let outer_radius = rect.width().min(rect.height()) / 2.0;
            let ring_width = 3.0;
            let inner_radius = outer_radius - ring_width;

            // Hue ring as segments
            let num_segments = 32;
            for i in 0..num_segments {
                let angle1 = (i as f32 / num_segments as f32) * std::f32::consts::TAU;
                let angle2 = ((i + 1) as f32 / num_segments as f32) * std::f32::consts::TAU;
                let hue_color = hue_to_rgb(i as f32 / num_segments as f32);

                let p1 = Pos2::new(
                    center.x + outer_radius * angle1.cos(),
                    center.y + outer_radius * angle1.sin(),
                );
                let p2 = Pos2::new(
                    center.x + outer_radius * angle2.cos(),
                    center.y + outer_radius * angle2.sin(),
                );
                let p3 = Pos2::new(
                    center.x + inner_radius * angle2.cos(),
                    center.y + inner_radius * angle2.sin(),
                );
                let p4 = Pos2::new(
                    center.x + inner_radius * angle1.cos(),
                    center.y + inner_radius * angle1.sin(),
                );

                ui.painter().add(egui::Shape::convex_polygon(
                    vec![p1, p2, p3, p4],
                    hue_color,
                    Stroke::NONE,
                ));
            }

            // Neutral center
            ui.painter()
                .circle_filled(center, inner_radius, Color32::WHITE);
            ui.painter().circle_stroke(
                center,
                inner_radius,
                Stroke::new(1.0, Color32::from_gray(200)),
            );
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}

/// A color grid popover over the named palette.
pub struct ColorGrid<'a> {
    current_color: Option<Color32>,
    title: &'a str,
}

impl<'a> ColorGrid<'a> {
    /// Create a new color grid. `current_color` is `None` for mixed state.
    pub fn new(current_color: Option<Color32>, title: &'a str) -> Self {
        Self {
            current_color,
            title,
        }
    }

    /// Show the color grid below the given anchor rect.
    /// Returns the selected color if one was clicked.
    pub fn show(self, ctx: &egui::Context, anchor_rect: Rect) -> Option<Color32> {
        let mut selected = None;
        let pos = Pos2::new(anchor_rect.left() - 60.0, anchor_rect.bottom() + 8.0);

        egui::Area::new(egui::Id::new("color_grid"))
            .fixed_pos(pos)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                crate::layout::panel_frame().show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing = vec2(0.0, 4.0);

                        ui.label(
                            egui::RichText::new(self.title)
                                .size(12.0)
                                .color(theme::TEXT_MUTED),
                        );
                        ui.add_space(2.0);

                        for row in SWATCH_COLORS.chunks(6) {
                            ui.horizontal(|ui| {
                                ui.spacing_mut().item_spacing = vec2(4.0, 0.0);
                                for entry in row {
                                    let is_selected = self
                                        .current_color
                                        .map(|c| colors_match(c, entry.color))
                                        .unwrap_or(false);
                                    let (clicked, _) = ColorSwatch::new(entry.color, entry.name)
                                        .selected(is_selected)
                                        .show(ui);
                                    if clicked {
                                        selected = Some(entry.color);
                                    }
                                }
                            });
                        }
                    });
                });
            });

        selected
    }
}

/// Check if two colors match, ignoring alpha (for selection highlighting).
pub fn colors_match(a: Color32, b: Color32) -> bool {
    a.r() == b.r() && a.g() == b.g() && a.b() == b.b()
}

/// Convert hue (0.0-1.0) to RGB color.
fn hue_to_rgb(hue: f32) -> Color32 {
    let h = hue * 6.0;
    let c = 1.0_f32;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());

    let (r, g, b) = match h as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Color32::from_rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}
