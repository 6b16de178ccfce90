//! Application shell: canvas interaction, action application, persistence.

use std::sync::Arc;
use std::time::Duration;

use egui::{Align2, Color32, Sense};
use kurbo::Point;

use quillboard_core::actions::{ActionKind, supported_actions};
use quillboard_core::canvas::{Canvas, CanvasDocument};
use quillboard_core::host::HostBridge;
use quillboard_core::shapes::{
    ArrowMode, Ellipse, Freehand, Line, Polygon, Portal, Rectangle, SerializableColor, Shape,
    ShapeId, Text, Video,
};
use quillboard_core::storage::{DocumentSaver, FileStorage, SaveKind, Storage, StorageError};

use crate::painter;
use crate::ui::{self, SelectionProps, UiAction, UiState, to_serializable};

/// Storage key for the demo board.
const DEMO_DOC_ID: &str = "demo-board";

/// Click hit-test tolerance in pixels.
const CLICK_TOLERANCE: f64 = 4.0;

/// Host bridge that logs navigation requests.
struct LogBridge;

impl HostBridge for LogBridge {
    fn open_page(&self, name: &str) {
        log::info!("host: open page '{}'", name);
    }

    fn open_page_in_sidebar(&self, name: &str) {
        log::info!("host: open page '{}' in sidebar", name);
    }

    fn open_external(&self, url: &str) {
        log::info!("host: open external url '{}'", url);
    }
}

/// The Quillboard demo application.
pub struct QuillboardApp {
    canvas: Canvas,
    ui_state: UiState,
    saver: DocumentSaver<FileStorage>,
    bridge: Box<dyn HostBridge>,
    last_selection: Vec<ShapeId>,
}

impl QuillboardApp {
    /// Create the app, restoring the demo board from storage if present.
    pub fn new() -> Result<Self, StorageError> {
        let storage = Arc::new(FileStorage::default_location()?);
        let document = match storage.load(DEMO_DOC_ID) {
            Ok(doc) => {
                log::info!("restored board with {} shapes", doc.len());
                doc
            }
            Err(_) => demo_document(),
        };
        let mut saver = DocumentSaver::new(storage);
        saver.set_document_id(Some(DEMO_DOC_ID.to_string()));

        Ok(Self {
            canvas: Canvas::with_document(document),
            ui_state: UiState::default(),
            saver,
            bridge: Box::new(LogBridge),
            last_selection: Vec::new(),
        })
    }

    fn handle_canvas_click(&mut self, pos: egui::Pos2, shift: bool) {
        let point = Point::new(pos.x as f64, pos.y as f64);
        let hits = self.canvas.document.shapes_at_point(point, CLICK_TOLERANCE);
        match hits.first() {
            Some(&id) => {
                if shift {
                    self.canvas.toggle_in_selection(id);
                } else {
                    self.canvas.select(id);
                }
            }
            None => self.canvas.clear_selection(),
        }
    }

    fn render_edit_popup(&mut self, ctx: &egui::Context) {
        let Some(id) = self.canvas.editing else {
            return;
        };
        let Some(current) = self
            .canvas
            .document
            .get_shape(id)
            .and_then(|s| s.editable_text())
        else {
            self.canvas.end_editing();
            return;
        };
        let buffer = self
            .ui_state
            .edit_buffer
            .get_or_insert_with(|| current.to_string());

        let mut done = false;
        let mut cancel = false;
        egui::Window::new("Edit")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_TOP, [0.0, 48.0])
            .show(ctx, |ui| {
                ui.add(egui::TextEdit::multiline(buffer).desired_rows(3));
                ui.horizontal(|ui| {
                    if ui.button("Done").clicked() {
                        done = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if done {
            let text = self.ui_state.edit_buffer.take().unwrap_or_default();
            if let Some(shape) = self.canvas.document.get_shape_mut(id) {
                shape.set_editable_text(text);
            }
            self.canvas.end_editing();
            self.saver.mark_changed(SaveKind::Durable);
        } else if cancel {
            self.ui_state.edit_buffer = None;
            self.canvas.end_editing();
        }
    }
}

impl eframe::App for QuillboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(Color32::WHITE))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), Sense::click());
                painter::draw_document(ui.painter(), &self.canvas);
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let shift = ctx.input(|i| i.modifiers.shift);
                        self.handle_canvas_click(pos, shift);
                    }
                }
            });

        if self.canvas.selection != self.last_selection {
            self.last_selection = self.canvas.selection.clone();
            self.ui_state.selection_changed();
        }

        let props = {
            let shapes = self.canvas.selected_shapes();
            SelectionProps::from_selection(&shapes)
        };
        if let Some(action) = ui::render_context_bar(ctx, &props, &mut self.ui_state) {
            if let Some(kind) = apply_action(&mut self.canvas, self.bridge.as_ref(), action) {
                self.saver.mark_changed(kind);
            }
        }

        self.render_edit_popup(ctx);

        if let Err(e) = self.saver.maybe_flush(&self.canvas.document) {
            log::error!("autosave failed: {}", e);
        }
        if self.saver.has_pending() {
            // Keep frames coming until the debounced flush fires.
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}

/// Mutate every selected shape that supports `kind` and matches the property.
/// Returns how many shapes were touched.
fn update_supporting(
    canvas: &mut Canvas,
    kind: ActionKind,
    mut f: impl FnMut(&mut Shape),
) -> usize {
    let ids: Vec<ShapeId> = canvas.selection.clone();
    let mut touched = 0;
    for id in ids {
        if let Some(shape) = canvas.document.get_shape_mut(id) {
            if supported_actions(shape.kind()).contains(&kind) {
                f(shape);
                touched += 1;
            }
        }
    }
    touched
}

/// Apply a context-bar action to the selection.
///
/// Mutations go to every matching selected shape; navigation goes through the
/// host bridge. Returns the save kind to schedule, or `None` when nothing
/// needs persisting (a detectable no-op when the selection matches nothing).
pub fn apply_action(
    canvas: &mut Canvas,
    bridge: &dyn HostBridge,
    action: UiAction,
) -> Option<SaveKind> {
    match action {
        UiAction::StartEditing => {
            if let Some(&id) = canvas.selection.first() {
                canvas.begin_editing(id);
            }
            None
        }
        UiAction::SetAutoResize(on) => {
            let n = update_supporting(canvas, ActionKind::AutoResize, |s| s.set_auto_resize(on));
            (n > 0).then_some(SaveKind::Durable)
        }
        UiAction::SetColor(color) => {
            let c = to_serializable(color);
            let n = update_supporting(canvas, ActionKind::Swatch, |s| s.style_mut().color = c);
            (n > 0).then_some(SaveKind::Durable)
        }
        UiAction::SetOpacity { value, commit } => {
            let opacity = value.clamp(0.0, 1.0) as f64;
            let n = update_supporting(canvas, ActionKind::Swatch, |s| {
                s.style_mut().opacity = opacity
            });
            (n > 0).then_some(if commit {
                SaveKind::Durable
            } else {
                SaveKind::Ephemeral
            })
        }
        UiAction::SetNoFill(no_fill) => {
            let n = update_supporting(canvas, ActionKind::NoFill, |s| {
                s.style_mut().no_fill = no_fill
            });
            (n > 0).then_some(SaveKind::Durable)
        }
        UiAction::SetStrokeStyle(style) => {
            let n = update_supporting(canvas, ActionKind::StrokeStyle, |s| {
                s.style_mut().stroke_style = style
            });
            (n > 0).then_some(SaveKind::Durable)
        }
        UiAction::SetScaleLevel(level) => {
            let n = update_supporting(canvas, ActionKind::ScaleLevel, |s| s.set_scale_level(level));
            (n > 0).then_some(SaveKind::Durable)
        }
        UiAction::SetFontFamily(family) => {
            let n = update_supporting(canvas, ActionKind::TextStyle, |s| s.set_font_family(family));
            (n > 0).then_some(SaveKind::Durable)
        }
        UiAction::SetFontWeight(weight) => {
            let n = update_supporting(canvas, ActionKind::TextStyle, |s| s.set_font_weight(weight));
            (n > 0).then_some(SaveKind::Durable)
        }
        UiAction::SetVideoUrl(url) => {
            let n = update_supporting(canvas, ActionKind::VideoLink, |s| s.set_url(url.clone()));
            (n > 0).then_some(SaveKind::Durable)
        }
        UiAction::OpenExternal(url) => {
            bridge.open_external(&url);
            None
        }
        UiAction::SetPortalCollapsed(collapsed) => {
            let n = update_supporting(canvas, ActionKind::PortalView, |s| {
                s.set_collapsed(collapsed)
            });
            (n > 0).then_some(SaveKind::Durable)
        }
        UiAction::SetArrowMode(mode) => {
            let n = update_supporting(canvas, ActionKind::ArrowMode, |s| s.set_arrow_mode(mode));
            (n > 0).then_some(SaveKind::Durable)
        }
        UiAction::OpenPage => {
            if let Some(name) = canvas.selected_shapes().iter().find_map(|s| s.page_name()) {
                bridge.open_page(name);
            }
            None
        }
        UiAction::OpenPageInSidebar => {
            if let Some(name) = canvas.selected_shapes().iter().find_map(|s| s.page_name()) {
                bridge.open_page_in_sidebar(name);
            }
            None
        }
    }
}

/// Seed document shown on first launch.
fn demo_document() -> CanvasDocument {
    let mut doc = CanvasDocument::new();
    doc.name = "Demo Board".to_string();

    let mut rect = Rectangle::new(Point::new(120.0, 140.0), 180.0, 110.0);
    rect.style.color = SerializableColor::new(99, 102, 241, 255);
    doc.add_shape(Shape::Rectangle(rect));

    let mut ellipse = Ellipse::new(Point::new(480.0, 200.0), 90.0, 60.0);
    ellipse.style.color = SerializableColor::new(34, 197, 94, 255);
    doc.add_shape(Shape::Ellipse(ellipse));

    doc.add_shape(Shape::Polygon(Polygon::new(vec![
        Point::new(680.0, 260.0),
        Point::new(760.0, 140.0),
        Point::new(840.0, 260.0),
    ])));

    let mut line = Line::new(Point::new(310.0, 200.0), Point::new(380.0, 200.0));
    line.arrow_mode = ArrowMode::End;
    line.label = "flow".to_string();
    doc.add_shape(Shape::Line(line));

    doc.add_shape(Shape::Text(Text::new(
        Point::new(140.0, 420.0),
        "Plan first, then draw".to_string(),
    )));

    doc.add_shape(Shape::Freehand(Freehand::from_points(vec![
        Point::new(420.0, 420.0),
        Point::new(450.0, 390.0),
        Point::new(485.0, 430.0),
        Point::new(520.0, 395.0),
        Point::new(550.0, 425.0),
    ])));

    doc.add_shape(Shape::Portal(Portal::new(
        Point::new(650.0, 360.0),
        "Weekly Journal".to_string(),
    )));

    doc.add_shape(Shape::Video(Video::new(
        Point::new(120.0, 520.0),
        "https://example.com/intro".to_string(),
    )));

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use quillboard_core::shapes::{ScaleLevel, ShapeTrait, StrokeStyle};
    use std::cell::RefCell;

    /// Bridge that records every navigation request.
    #[derive(Default)]
    struct RecordingBridge {
        pages: RefCell<Vec<String>>,
        sidebar_pages: RefCell<Vec<String>>,
        urls: RefCell<Vec<String>>,
    }

    impl HostBridge for RecordingBridge {
        fn open_page(&self, name: &str) {
            self.pages.borrow_mut().push(name.to_string());
        }

        fn open_page_in_sidebar(&self, name: &str) {
            self.sidebar_pages.borrow_mut().push(name.to_string());
        }

        fn open_external(&self, url: &str) {
            self.urls.borrow_mut().push(url.to_string());
        }
    }

    fn select_all(canvas: &mut Canvas) {
        let ids: Vec<ShapeId> = canvas.document.z_order.clone();
        for id in ids {
            canvas.add_to_selection(id);
        }
    }

    #[test]
    fn test_set_color_touches_only_swatch_shapes() {
        let mut canvas = Canvas::new();
        let rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        let rect_id = rect.id();
        let video = Video::new(Point::new(50.0, 50.0), String::new());
        let video_id = video.id();
        canvas.document.add_shape(Shape::Rectangle(rect));
        canvas.document.add_shape(Shape::Video(video));
        select_all(&mut canvas);

        let bridge = RecordingBridge::default();
        let kind = apply_action(
            &mut canvas,
            &bridge,
            UiAction::SetColor(egui::Color32::from_rgb(1, 2, 3)),
        );
        assert_eq!(kind, Some(SaveKind::Durable));

        let rect_color = canvas.document.get_shape(rect_id).unwrap().style().color;
        assert_eq!(rect_color, SerializableColor::new(1, 2, 3, 255));
        // Videos carry no swatch action; their style is untouched.
        let video_color = canvas.document.get_shape(video_id).unwrap().style().color;
        assert_eq!(video_color, SerializableColor::black());
    }

    #[test]
    fn test_opacity_drag_is_ephemeral_until_commit() {
        let mut canvas = Canvas::new();
        let rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        let id = rect.id();
        canvas.document.add_shape(Shape::Rectangle(rect));
        canvas.select(id);

        let bridge = RecordingBridge::default();
        let kind = apply_action(
            &mut canvas,
            &bridge,
            UiAction::SetOpacity {
                value: 0.4,
                commit: false,
            },
        );
        assert_eq!(kind, Some(SaveKind::Ephemeral));

        let kind = apply_action(
            &mut canvas,
            &bridge,
            UiAction::SetOpacity {
                value: 0.5,
                commit: true,
            },
        );
        assert_eq!(kind, Some(SaveKind::Durable));
        let opacity = canvas.document.get_shape(id).unwrap().style().opacity;
        assert!((opacity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_unmatched_action_is_a_noop() {
        let mut canvas = Canvas::new();
        let rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        let id = rect.id();
        canvas.document.add_shape(Shape::Rectangle(rect));
        canvas.select(id);

        // Rectangles have no content scale; nothing to persist.
        let bridge = RecordingBridge::default();
        let kind = apply_action(
            &mut canvas,
            &bridge,
            UiAction::SetScaleLevel(ScaleLevel::Xl),
        );
        assert_eq!(kind, None);
    }

    #[test]
    fn test_scale_level_applies_to_every_matching_shape() {
        let mut canvas = Canvas::new();
        let a = Text::new(Point::new(0.0, 0.0), "a".to_string());
        let b = Text::new(Point::new(0.0, 50.0), "b".to_string());
        let (a_id, b_id) = (a.id(), b.id());
        canvas.document.add_shape(Shape::Text(a));
        canvas.document.add_shape(Shape::Text(b));
        select_all(&mut canvas);

        let bridge = RecordingBridge::default();
        apply_action(
            &mut canvas,
            &bridge,
            UiAction::SetScaleLevel(ScaleLevel::Lg),
        );
        for id in [a_id, b_id] {
            assert_eq!(
                canvas.document.get_shape(id).unwrap().scale_level(),
                Some(ScaleLevel::Lg)
            );
        }
    }

    #[test]
    fn test_stroke_style_and_no_fill() {
        let mut canvas = Canvas::new();
        let rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        let id = rect.id();
        canvas.document.add_shape(Shape::Rectangle(rect));
        canvas.select(id);

        let bridge = RecordingBridge::default();
        apply_action(
            &mut canvas,
            &bridge,
            UiAction::SetStrokeStyle(StrokeStyle::Dashed),
        );
        apply_action(&mut canvas, &bridge, UiAction::SetNoFill(true));

        let style = canvas.document.get_shape(id).unwrap().style();
        assert_eq!(style.stroke_style, StrokeStyle::Dashed);
        assert!(style.no_fill);
    }

    #[test]
    fn test_open_page_goes_through_bridge() {
        let mut canvas = Canvas::new();
        let portal = Portal::new(Point::new(0.0, 0.0), "Journal".to_string());
        let id = portal.id();
        canvas.document.add_shape(Shape::Portal(portal));
        canvas.select(id);

        let bridge = RecordingBridge::default();
        assert_eq!(apply_action(&mut canvas, &bridge, UiAction::OpenPage), None);
        assert_eq!(
            apply_action(&mut canvas, &bridge, UiAction::OpenPageInSidebar),
            None
        );
        assert_eq!(bridge.pages.borrow().as_slice(), ["Journal"]);
        assert_eq!(bridge.sidebar_pages.borrow().as_slice(), ["Journal"]);
    }

    #[test]
    fn test_start_editing_focuses_first_selected() {
        let mut canvas = Canvas::new();
        let text = Text::new(Point::new(0.0, 0.0), "hello".to_string());
        let id = text.id();
        canvas.document.add_shape(Shape::Text(text));
        canvas.select(id);

        let bridge = RecordingBridge::default();
        assert_eq!(
            apply_action(&mut canvas, &bridge, UiAction::StartEditing),
            None
        );
        assert_eq!(canvas.editing, Some(id));
    }

    #[test]
    fn test_set_video_url_and_open() {
        let mut canvas = Canvas::new();
        let video = Video::new(Point::new(0.0, 0.0), String::new());
        let id = video.id();
        canvas.document.add_shape(Shape::Video(video));
        canvas.select(id);

        let bridge = RecordingBridge::default();
        let kind = apply_action(
            &mut canvas,
            &bridge,
            UiAction::SetVideoUrl("https://example.com/x".to_string()),
        );
        assert_eq!(kind, Some(SaveKind::Durable));
        assert_eq!(
            canvas.document.get_shape(id).unwrap().url(),
            Some("https://example.com/x")
        );

        apply_action(
            &mut canvas,
            &bridge,
            UiAction::OpenExternal("https://example.com/x".to_string()),
        );
        assert_eq!(bridge.urls.borrow().as_slice(), ["https://example.com/x"]);
    }

    #[test]
    fn test_portal_collapse_applies_to_all_portals() {
        let mut canvas = Canvas::new();
        let a = Portal::new(Point::new(0.0, 0.0), "A".to_string());
        let b = Portal::new(Point::new(400.0, 0.0), "B".to_string());
        let (a_id, b_id) = (a.id(), b.id());
        canvas.document.add_shape(Shape::Portal(a));
        canvas.document.add_shape(Shape::Portal(b));
        select_all(&mut canvas);

        let bridge = RecordingBridge::default();
        apply_action(&mut canvas, &bridge, UiAction::SetPortalCollapsed(true));
        for id in [a_id, b_id] {
            assert_eq!(canvas.document.get_shape(id).unwrap().collapsed(), Some(true));
        }
    }

    #[test]
    fn test_demo_document_is_selectable() {
        let doc = demo_document();
        assert!(!doc.is_empty());
        // Every seeded shape resolves at least one context-bar action on its own.
        for shape in doc.shapes_ordered() {
            assert!(
                !quillboard_core::actions::actions_for_kinds(&[shape.kind()]).is_empty(),
                "{:?} resolves no actions",
                shape.kind()
            );
        }
    }
}
