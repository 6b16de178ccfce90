//! Context bar UI over the current selection.

use egui::{Color32, Context, Pos2, Rect as UiRect, Vec2};

use quillboard_core::actions::{ActionKind, actions_for_selection, supported_actions};
use quillboard_core::shapes::{
    ArrowMode, FontFamily, FontWeight, ScaleLevel, SerializableColor, Shape, StrokeStyle,
};
use quillboard_widgets::{
    ColorGrid, ColorSwatch, MixedColorSwatch, NoColorSwatch, ScaleButton, StrokePatternButton,
    StrokePreview, ToggleButton, vertical_separator,
};

/// Convert a shape color to an egui color.
pub fn to_color32(c: SerializableColor) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Convert an egui color to a shape color.
pub fn to_serializable(c: Color32) -> SerializableColor {
    // Color32 stores premultiplied components; undo that for storage.
    let [r, g, b, a] = c.to_srgba_unmultiplied();
    SerializableColor::new(r, g, b, a)
}

/// Actions emitted by the context-bar widgets.
///
/// Widgets never mutate shapes themselves; the shell applies each action to
/// every matching selected shape and schedules a persistence flush.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Begin editing the selected shape's text payload.
    StartEditing,
    /// Toggle content-tracking bounds.
    SetAutoResize(bool),
    /// Set the shape color.
    SetColor(Color32),
    /// Set the opacity. Non-commit updates come from a slider drag and are
    /// coalesced by the save debounce.
    SetOpacity { value: f32, commit: bool },
    /// Toggle interior fill off/on.
    SetNoFill(bool),
    /// Set the stroke pattern.
    SetStrokeStyle(StrokeStyle),
    /// Set the content scale.
    SetScaleLevel(ScaleLevel),
    /// Set the font family.
    SetFontFamily(FontFamily),
    /// Set the font weight.
    SetFontWeight(FontWeight),
    /// Replace the video URL.
    SetVideoUrl(String),
    /// Open an external URL through the host bridge.
    OpenExternal(String),
    /// Collapse or expand portal shapes.
    SetPortalCollapsed(bool),
    /// Set line end decorations.
    SetArrowMode(ArrowMode),
    /// Navigate the host to the embedded page.
    OpenPage,
    /// Open the embedded page in the host sidebar.
    OpenPageInSidebar,
}

/// Transient UI state for the context bar.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Whether the color grid popover is open.
    pub color_popover_open: bool,
    /// Edit buffer for the video URL field, initialized from the selection.
    pub video_url_input: Option<String>,
    /// Edit buffer for the text-editing popup.
    pub edit_buffer: Option<String>,
}

impl UiState {
    /// Drop transient buffers when the selection changes.
    pub fn selection_changed(&mut self) {
        self.color_popover_open = false;
        self.video_url_input = None;
        self.edit_buffer = None;
    }
}

/// Display values derived from the current selection, one field per widget.
///
/// `None` means the matching shapes disagree (mixed state) or none carries the
/// property; widgets render a neutral indicator for it.
#[derive(Debug, Clone, Default)]
pub struct SelectionProps {
    /// Actions applicable to the whole selection, in display order.
    pub actions: Vec<ActionKind>,
    /// Number of selected shapes.
    pub count: usize,
    /// Shared shape color.
    pub color: Option<Color32>,
    /// Shared opacity.
    pub opacity: Option<f32>,
    /// Shared no-fill flag.
    pub no_fill: Option<bool>,
    /// Shared stroke pattern.
    pub stroke_style: Option<StrokeStyle>,
    /// Shared content scale.
    pub scale_level: Option<ScaleLevel>,
    /// Shared font family.
    pub font_family: Option<FontFamily>,
    /// Shared font weight.
    pub font_weight: Option<FontWeight>,
    /// Shared auto-resize flag.
    pub auto_resize: Option<bool>,
    /// Shared portal collapsed state.
    pub collapsed: Option<bool>,
    /// Shared line end decorations.
    pub arrow_mode: Option<ArrowMode>,
    /// URL of the selected video shape.
    pub video_url: Option<String>,
    /// Page name of the selected portal shape.
    pub page_name: Option<String>,
    /// Combined selection bounds in world coordinates.
    pub bounds: Option<kurbo::Rect>,
}

/// The one value every item agrees on, if any.
fn shared<T: PartialEq>(mut values: impl Iterator<Item = T>) -> Option<T> {
    let first = values.next()?;
    for value in values {
        if value != first {
            return None;
        }
    }
    Some(first)
}

impl SelectionProps {
    /// Derive display values from a selection.
    ///
    /// Each property only consults the shapes that support the corresponding
    /// action, so a widget mounted by the resolver always sees shapes of the
    /// expected property shape.
    pub fn from_selection(shapes: &[&Shape]) -> Self {
        let actions = actions_for_selection(shapes);

        let supporting = |action: ActionKind| {
            shapes
                .iter()
                .copied()
                .filter(move |s| supported_actions(s.kind()).contains(&action))
        };

        let mut bounds: Option<kurbo::Rect> = None;
        for shape in shapes {
            let b = shape.bounds();
            bounds = Some(match bounds {
                Some(acc) => acc.union(b),
                None => b,
            });
        }

        Self {
            count: shapes.len(),
            color: shared(supporting(ActionKind::Swatch).map(|s| to_color32(s.style().color))),
            opacity: shared(supporting(ActionKind::Swatch).map(|s| s.style().opacity as f32)),
            no_fill: shared(supporting(ActionKind::NoFill).map(|s| s.style().no_fill)),
            stroke_style: shared(
                supporting(ActionKind::StrokeStyle).map(|s| s.style().stroke_style),
            ),
            scale_level: shared(
                supporting(ActionKind::ScaleLevel).filter_map(|s| s.scale_level()),
            ),
            font_family: shared(supporting(ActionKind::TextStyle).filter_map(|s| s.font_family())),
            font_weight: shared(supporting(ActionKind::TextStyle).filter_map(|s| s.font_weight())),
            auto_resize: shared(
                supporting(ActionKind::AutoResize).filter_map(|s| s.auto_resize()),
            ),
            collapsed: shared(supporting(ActionKind::PortalView).filter_map(|s| s.collapsed())),
            arrow_mode: shared(supporting(ActionKind::ArrowMode).filter_map(|s| s.arrow_mode())),
            video_url: supporting(ActionKind::VideoLink)
                .find_map(|s| s.url())
                .map(String::from),
            page_name: supporting(ActionKind::OpenPage)
                .find_map(|s| s.page_name())
                .map(String::from),
            bounds,
            actions,
        }
    }
}

/// Height reserved for the bar above the selection.
const BAR_OFFSET: f32 = 46.0;

/// Render the context bar for the current selection.
///
/// Mounts one widget section per resolved action, in display order. Returns
/// the action triggered by user interaction, if any.
pub fn render_context_bar(
    ctx: &Context,
    props: &SelectionProps,
    ui_state: &mut UiState,
) -> Option<UiAction> {
    if props.actions.is_empty() {
        return None;
    }
    let bounds = props.bounds?;

    let mut action = None;
    let mut swatch_rect: Option<UiRect> = None;
    let pos = Pos2::new(bounds.x0 as f32, (bounds.y0 as f32 - BAR_OFFSET).max(8.0));

    egui::Area::new(egui::Id::new("context_bar"))
        .fixed_pos(pos)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            quillboard_widgets::toolbar_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(4.0, 0.0);

                    for (idx, kind) in props.actions.iter().enumerate() {
                        if idx > 0 {
                            vertical_separator(ui);
                        }
                        match kind {
                            ActionKind::Edit => {
                                if ToggleButton::new("Edit", false)
                                    .tooltip("Edit content")
                                    .show(ui)
                                {
                                    action = Some(UiAction::StartEditing);
                                }
                            }
                            ActionKind::AutoResize => {
                                let on = props.auto_resize.unwrap_or(false);
                                if ToggleButton::new("Auto", on)
                                    .tooltip("Size follows content")
                                    .show(ui)
                                {
                                    action = Some(UiAction::SetAutoResize(
                                        props.auto_resize.map(|v| !v).unwrap_or(true),
                                    ));
                                }
                            }
                            ActionKind::Swatch => {
                                let (clicked, rect) = match props.color {
                                    Some(color) => ColorSwatch::new(color, "Color").show(ui),
                                    None => MixedColorSwatch::new("Color (mixed)").show(ui),
                                };
                                swatch_rect = Some(rect);
                                if clicked {
                                    ui_state.color_popover_open = !ui_state.color_popover_open;
                                }

                                let mut opacity = props.opacity.unwrap_or(1.0);
                                let slider = egui::Slider::new(&mut opacity, 0.0..=1.0)
                                    .show_value(false);
                                let response = ui
                                    .scope(|ui| {
                                        ui.spacing_mut().slider_width = 56.0;
                                        ui.add(slider)
                                    })
                                    .inner
                                    .on_hover_text("Opacity");
                                if response.drag_stopped() {
                                    action = Some(UiAction::SetOpacity {
                                        value: opacity,
                                        commit: true,
                                    });
                                } else if response.changed() {
                                    action = Some(UiAction::SetOpacity {
                                        value: opacity,
                                        commit: false,
                                    });
                                }
                            }
                            ActionKind::NoFill => {
                                let no_fill = props.no_fill == Some(true);
                                if NoColorSwatch::new("No fill").selected(no_fill).show(ui) {
                                    action = Some(UiAction::SetNoFill(
                                        props.no_fill.map(|v| !v).unwrap_or(true),
                                    ));
                                }
                            }
                            ActionKind::StrokeStyle => {
                                for style in StrokeStyle::all() {
                                    let preview = match style {
                                        StrokeStyle::Solid => StrokePreview::Solid,
                                        StrokeStyle::Dashed => StrokePreview::Dashed,
                                        StrokeStyle::Dotted => StrokePreview::Dotted,
                                    };
                                    let selected = props.stroke_style == Some(*style);
                                    if StrokePatternButton::new(
                                        preview,
                                        style.display_name(),
                                        selected,
                                    )
                                    .show(ui)
                                        && !selected
                                    {
                                        action = Some(UiAction::SetStrokeStyle(*style));
                                    }
                                }
                            }
                            ActionKind::ScaleLevel => {
                                for level in ScaleLevel::all() {
                                    let selected = props.scale_level == Some(*level);
                                    if ScaleButton::new(
                                        level.label(),
                                        level.font_size() as f32,
                                        selected,
                                    )
                                    .show(ui)
                                        && !selected
                                    {
                                        action = Some(UiAction::SetScaleLevel(*level));
                                    }
                                }
                            }
                            ActionKind::TextStyle => {
                                for family in FontFamily::all() {
                                    let selected = props.font_family == Some(*family);
                                    if ToggleButton::new(family.display_name(), selected).show(ui)
                                        && !selected
                                    {
                                        action = Some(UiAction::SetFontFamily(*family));
                                    }
                                }
                                let heavy = props.font_weight == Some(FontWeight::Heavy);
                                if ToggleButton::new("B", heavy)
                                    .tooltip("Heavy weight")
                                    .show(ui)
                                {
                                    let next = if heavy {
                                        FontWeight::Regular
                                    } else {
                                        FontWeight::Heavy
                                    };
                                    action = Some(UiAction::SetFontWeight(next));
                                }
                            }
                            ActionKind::VideoLink => {
                                let buffer = ui_state.video_url_input.get_or_insert_with(|| {
                                    props.video_url.clone().unwrap_or_default()
                                });
                                let response = ui.add(
                                    egui::TextEdit::singleline(buffer)
                                        .desired_width(150.0)
                                        .hint_text("Video URL"),
                                );
                                if response.lost_focus()
                                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                                {
                                    action = Some(UiAction::SetVideoUrl(buffer.clone()));
                                }
                                if ToggleButton::new("Open", false)
                                    .tooltip("Open link in browser")
                                    .show(ui)
                                {
                                    if let Some(url) =
                                        props.video_url.as_ref().filter(|u| !u.is_empty())
                                    {
                                        action = Some(UiAction::OpenExternal(url.clone()));
                                    }
                                }
                            }
                            ActionKind::PortalView => {
                                let collapsed = props.collapsed.unwrap_or(false);
                                let label = if collapsed { "Expand" } else { "Collapse" };
                                if ToggleButton::new(label, collapsed)
                                    .tooltip("Toggle compact view")
                                    .show(ui)
                                {
                                    action = Some(UiAction::SetPortalCollapsed(
                                        props.collapsed.map(|v| !v).unwrap_or(true),
                                    ));
                                }
                            }
                            ActionKind::ArrowMode => {
                                for mode in ArrowMode::all() {
                                    let selected = props.arrow_mode == Some(*mode);
                                    if ToggleButton::new(mode.label(), selected)
                                        .tooltip(mode.display_name())
                                        .show(ui)
                                        && !selected
                                    {
                                        action = Some(UiAction::SetArrowMode(*mode));
                                    }
                                }
                            }
                            ActionKind::OpenPage => {
                                if ToggleButton::new("Open", false)
                                    .tooltip("Open page")
                                    .show(ui)
                                {
                                    action = Some(UiAction::OpenPage);
                                }
                                if ToggleButton::new("Sidebar", false)
                                    .tooltip("Open page in sidebar")
                                    .show(ui)
                                {
                                    action = Some(UiAction::OpenPageInSidebar);
                                }
                            }
                        }
                    }
                });
            });
        });

    if ui_state.color_popover_open {
        if let Some(rect) = swatch_rect {
            if let Some(color) = ColorGrid::new(props.color, "Shape color").show(ctx, rect) {
                action = Some(UiAction::SetColor(color));
                ui_state.color_popover_open = false;
            }
        }
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use quillboard_core::shapes::{Ellipse, Line, Portal, Rectangle, Text, Video};

    #[test]
    fn test_props_shared_color() {
        let mut a = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        let mut b = Ellipse::new(Point::new(50.0, 50.0), 5.0, 5.0);
        a.style.color = SerializableColor::new(10, 20, 30, 255);
        b.style.color = SerializableColor::new(10, 20, 30, 255);
        let (a, b) = (Shape::Rectangle(a), Shape::Ellipse(b));

        let props = SelectionProps::from_selection(&[&a, &b]);
        assert_eq!(props.color, Some(Color32::from_rgb(10, 20, 30)));
    }

    #[test]
    fn test_props_mixed_color_is_none() {
        let mut a = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        let mut b = Rectangle::new(Point::new(50.0, 50.0), 10.0, 10.0);
        a.style.color = SerializableColor::new(255, 0, 0, 255);
        b.style.color = SerializableColor::new(0, 0, 255, 255);
        let (a, b) = (Shape::Rectangle(a), Shape::Rectangle(b));

        let props = SelectionProps::from_selection(&[&a, &b]);
        assert_eq!(props.color, None);
        // The actions themselves are unaffected by the disagreement.
        assert!(props.actions.contains(&ActionKind::Swatch));
    }

    #[test]
    fn test_props_only_consult_supporting_shapes() {
        // A line has no fill property; its style must not poison the
        // no-fill display value of a rectangle+line selection.
        let mut rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        rect.style.no_fill = true;
        let mut line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        line.style.no_fill = false;
        let (rect, line) = (Shape::Rectangle(rect), Shape::Line(line));

        let props = SelectionProps::from_selection(&[&rect, &line]);
        assert_eq!(props.no_fill, Some(true));
    }

    #[test]
    fn test_props_empty_selection() {
        let props = SelectionProps::from_selection(&[]);
        assert!(props.actions.is_empty());
        assert_eq!(props.count, 0);
        assert!(props.bounds.is_none());
    }

    #[test]
    fn test_props_video_and_portal_payloads() {
        let video = Shape::Video(Video::new(
            Point::new(0.0, 0.0),
            "https://example.com/v".to_string(),
        ));
        let props = SelectionProps::from_selection(&[&video]);
        assert_eq!(props.video_url.as_deref(), Some("https://example.com/v"));

        let portal = Shape::Portal(Portal::new(Point::new(0.0, 0.0), "Journal".to_string()));
        let props = SelectionProps::from_selection(&[&portal]);
        assert_eq!(props.page_name.as_deref(), Some("Journal"));
        assert_eq!(props.collapsed, Some(false));
    }

    #[test]
    fn test_props_bounds_union() {
        let a = Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0));
        let b = Shape::Rectangle(Rectangle::new(Point::new(90.0, 0.0), 10.0, 10.0));
        let props = SelectionProps::from_selection(&[&a, &b]);
        let bounds = props.bounds.unwrap();
        assert!((bounds.width() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_props_mixed_scale_level() {
        let mut a = Text::new(Point::new(0.0, 0.0), "a".to_string());
        a.set_scale_level(ScaleLevel::Sm);
        let mut b = Text::new(Point::new(0.0, 50.0), "b".to_string());
        b.set_scale_level(ScaleLevel::Lg);
        let (a, b) = (Shape::Text(a), Shape::Text(b));

        let props = SelectionProps::from_selection(&[&a, &b]);
        assert_eq!(props.scale_level, None);
        assert_eq!(props.font_family, Some(FontFamily::Hand));
    }

    #[test]
    fn test_color_round_trip() {
        let c = SerializableColor::new(12, 34, 56, 255);
        assert_eq!(to_serializable(to_color32(c)), c);
    }
}
