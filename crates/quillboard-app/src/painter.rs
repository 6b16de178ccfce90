//! Paints the canvas document with the egui painter.
//!
//! A deliberately plain rendition: the demo shell needs readable shapes and
//! selection outlines, not production rendering.

use egui::{Align2, Color32, CornerRadius, Painter, Pos2, Stroke, StrokeKind, Vec2};
use kurbo::Point;

use quillboard_core::canvas::Canvas;
use quillboard_core::shapes::{
    FontWeight, Highlighter, Line, Shape, ShapeStyle, ShapeTrait, StrokeStyle,
};

/// Selection outline color.
const SELECTION: Color32 = Color32::from_rgb(59, 130, 246);

fn pos2(p: Point) -> Pos2 {
    Pos2::new(p.x as f32, p.y as f32)
}

fn ui_rect(r: kurbo::Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        Pos2::new(r.x0 as f32, r.y0 as f32),
        Pos2::new(r.x1 as f32, r.y1 as f32),
    )
}

/// Stroke color with the style's opacity applied.
fn stroke_color(style: &ShapeStyle) -> Color32 {
    let c = style.color;
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, (c.a as f64 * style.opacity) as u8)
}

/// Soft interior fill derived from the stroke color.
fn fill_color(style: &ShapeStyle) -> Option<Color32> {
    if style.no_fill {
        return None;
    }
    let c = style.color;
    Some(Color32::from_rgba_unmultiplied(
        c.r,
        c.g,
        c.b,
        (40.0 * style.opacity) as u8,
    ))
}

/// Draw an open path honoring the stroke pattern.
fn stroke_path(painter: &Painter, points: &[Pos2], stroke: Stroke, style: StrokeStyle) {
    if points.len() < 2 {
        return;
    }
    match style {
        StrokeStyle::Solid => {
            painter.add(egui::Shape::line(points.to_vec(), stroke));
        }
        StrokeStyle::Dashed => {
            painter.extend(egui::Shape::dashed_line(points, stroke, 8.0, 6.0));
        }
        StrokeStyle::Dotted => {
            painter.extend(egui::Shape::dashed_line(points, stroke, 1.5, 5.0));
        }
    }
}

/// Points approximating an ellipse outline.
fn ellipse_points(center: Point, rx: f64, ry: f64) -> Vec<Pos2> {
    const SEGMENTS: usize = 48;
    (0..=SEGMENTS)
        .map(|i| {
            let t = (i as f64 / SEGMENTS as f64) * std::f64::consts::TAU;
            Pos2::new(
                (center.x + rx * t.cos()) as f32,
                (center.y + ry * t.sin()) as f32,
            )
        })
        .collect()
}

/// Draw the whole document plus selection outlines.
pub fn draw_document(painter: &Painter, canvas: &Canvas) {
    for shape in canvas.document.shapes_ordered() {
        draw_shape(painter, shape);
    }
    for shape in canvas.selected_shapes() {
        let rect = ui_rect(shape.bounds()).expand(3.0);
        painter.rect_stroke(
            rect,
            CornerRadius::same(2),
            Stroke::new(1.5, SELECTION),
            StrokeKind::Outside,
        );
    }
}

fn draw_shape(painter: &Painter, shape: &Shape) {
    match shape {
        Shape::Rectangle(r) => {
            let rect = ui_rect(r.bounds());
            if let Some(fill) = fill_color(&r.style) {
                painter.rect_filled(rect, CornerRadius::ZERO, fill);
            }
            let corners = [
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
                rect.left_top(),
            ];
            stroke_path(
                painter,
                &corners,
                Stroke::new(r.style.stroke_width as f32, stroke_color(&r.style)),
                r.style.stroke_style,
            );
        }
        Shape::Ellipse(e) => {
            let points = ellipse_points(e.center, e.radius_x, e.radius_y);
            if let Some(fill) = fill_color(&e.style) {
                painter.add(egui::Shape::convex_polygon(
                    points.clone(),
                    fill,
                    Stroke::NONE,
                ));
            }
            stroke_path(
                painter,
                &points,
                Stroke::new(e.style.stroke_width as f32, stroke_color(&e.style)),
                e.style.stroke_style,
            );
        }
        Shape::Polygon(p) => {
            let outline: Vec<Pos2> = p.closed_outline().iter().map(|pt| pos2(*pt)).collect();
            if let Some(fill) = fill_color(&p.style) {
                let vertices: Vec<Pos2> = p.points.iter().map(|pt| pos2(*pt)).collect();
                painter.add(egui::Shape::convex_polygon(vertices, fill, Stroke::NONE));
            }
            stroke_path(
                painter,
                &outline,
                Stroke::new(p.style.stroke_width as f32, stroke_color(&p.style)),
                p.style.stroke_style,
            );
        }
        Shape::Line(l) => draw_line(painter, l),
        Shape::Freehand(f) => {
            let points: Vec<Pos2> = f.points.iter().map(|pt| pos2(*pt)).collect();
            stroke_path(
                painter,
                &points,
                Stroke::new(f.style.stroke_width as f32, stroke_color(&f.style)),
                f.style.stroke_style,
            );
        }
        Shape::Highlighter(h) => {
            let points: Vec<Pos2> = h.points.iter().map(|pt| pos2(*pt)).collect();
            let width = h.style.stroke_width.max(Highlighter::MIN_WIDTH) as f32;
            stroke_path(
                painter,
                &points,
                Stroke::new(width, stroke_color(&h.style)),
                StrokeStyle::Solid,
            );
        }
        Shape::Text(t) => {
            let size = t.scale_level.font_size() as f32;
            let font_id = egui::FontId::proportional(size);
            let color = stroke_color(&t.style);
            painter.text(pos2(t.position), Align2::LEFT_TOP, &t.content, font_id.clone(), color);
            if t.font_weight == FontWeight::Heavy {
                // Faux bold: egui ships a single weight per family.
                painter.text(
                    pos2(t.position) + Vec2::new(0.6, 0.0),
                    Align2::LEFT_TOP,
                    &t.content,
                    font_id,
                    color,
                );
            }
        }
        Shape::Html(h) => {
            let rect = ui_rect(h.bounds());
            painter.rect_filled(rect, CornerRadius::same(4), Color32::from_gray(248));
            painter.rect_stroke(
                rect,
                CornerRadius::same(4),
                Stroke::new(1.0, Color32::from_gray(200)),
                StrokeKind::Inside,
            );
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "</>",
                egui::FontId::monospace(h.scale_level.font_size() as f32),
                Color32::from_gray(120),
            );
        }
        Shape::Video(v) => {
            let rect = ui_rect(v.bounds());
            painter.rect_filled(rect, CornerRadius::same(4), Color32::from_gray(40));
            // Play triangle
            let c = rect.center();
            let s = (rect.height() * 0.15).max(8.0);
            painter.add(egui::Shape::convex_polygon(
                vec![
                    c + Vec2::new(-s * 0.6, -s),
                    c + Vec2::new(s, 0.0),
                    c + Vec2::new(-s * 0.6, s),
                ],
                Color32::WHITE,
                Stroke::NONE,
            ));
            if !v.url.is_empty() {
                painter.text(
                    Pos2::new(c.x, rect.bottom() - 10.0),
                    Align2::CENTER_BOTTOM,
                    &v.url,
                    egui::FontId::proportional(10.0),
                    Color32::from_gray(180),
                );
            }
        }
        Shape::Portal(p) => {
            let rect = ui_rect(p.bounds());
            let header_h = p.header_height() as f32;
            let header =
                egui::Rect::from_min_size(rect.min, Vec2::new(rect.width(), header_h));
            painter.rect_filled(rect, CornerRadius::same(4), Color32::WHITE);
            painter.rect_filled(header, CornerRadius::same(4), Color32::from_gray(240));
            painter.rect_stroke(
                rect,
                CornerRadius::same(4),
                Stroke::new(1.0, stroke_color(&p.style)),
                StrokeKind::Inside,
            );
            painter.text(
                Pos2::new(header.left() + 8.0, header.center().y),
                Align2::LEFT_CENTER,
                &p.page_name,
                egui::FontId::proportional(p.scale_level.font_size() as f32 * 0.8),
                Color32::from_gray(60),
            );
        }
        Shape::Group(g) => {
            for child in &g.children {
                draw_shape(painter, child);
            }
            let rect = ui_rect(g.bounds()).expand(2.0);
            let corners = [
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
                rect.left_top(),
            ];
            stroke_path(
                painter,
                &corners,
                Stroke::new(1.0, Color32::from_gray(180)),
                StrokeStyle::Dashed,
            );
        }
    }
}

fn draw_line(painter: &Painter, line: &Line) {
    let stroke = Stroke::new(line.style.stroke_width as f32, stroke_color(&line.style));
    stroke_path(
        painter,
        &[pos2(line.start), pos2(line.end)],
        stroke,
        line.style.stroke_style,
    );

    let dir = line.direction();
    if line.arrow_mode.has_end() {
        draw_arrow_head(painter, line.end, dir, line.head_size, stroke);
    }
    if line.arrow_mode.has_start() {
        draw_arrow_head(painter, line.start, -dir, line.head_size, stroke);
    }

    if !line.label.is_empty() {
        let mid = pos2(line.midpoint());
        painter.text(
            mid - Vec2::new(0.0, 8.0),
            Align2::CENTER_BOTTOM,
            &line.label,
            egui::FontId::proportional(12.0),
            stroke_color(&line.style),
        );
    }
}

/// Two barbs angled back from the tip.
fn draw_arrow_head(painter: &Painter, tip: Point, dir: kurbo::Vec2, size: f64, stroke: Stroke) {
    let perp = kurbo::Vec2::new(-dir.y, dir.x);
    let back = Point::new(tip.x - dir.x * size, tip.y - dir.y * size);
    let left = Point::new(back.x + perp.x * size * 0.5, back.y + perp.y * size * 0.5);
    let right = Point::new(back.x - perp.x * size * 0.5, back.y - perp.y * size * 0.5);
    painter.line_segment([pos2(tip), pos2(left)], stroke);
    painter.line_segment([pos2(tip), pos2(right)], stroke);
}
