//! Reusable egui widget components for the Quillboard context bar.
//!
//! - **Buttons**: text toggles, scale buttons, stroke-pattern buttons
//! - **Colors**: named palette, color swatches, mixed-state swatch, color grid
//! - **Layout**: separators, section labels, panel/toolbar frames

pub mod buttons;
pub mod colors;
pub mod layout;

pub use buttons::{ScaleButton, StrokePatternButton, StrokePreview, ToggleButton};
pub use colors::{
    ColorGrid, ColorSwatch, MixedColorSwatch, NoColorSwatch, SWATCH_COLORS, SwatchColor,
    colors_match,
};
pub use layout::{panel_frame, section_label, toolbar_frame, vertical_separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Small button size (icons, color swatches)
    pub const SMALL: f32 = 20.0;
    /// Medium button size (toolbar buttons)
    pub const MEDIUM: f32 = 28.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
