//! The drawing surface: pointer capture and stroke painting.

use egui::{Color32, CornerRadius, Pos2, Sense, Stroke as EguiStroke, Ui};
use inksolve_core::{Rgba, Session};
use inksolve_raster::CanvasSpec;
use kurbo::Point;

fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Show the fixed-size canvas, routing pointer input into the session and
/// painting the committed strokes plus the live preview.
pub fn show(ui: &mut Ui, session: &mut Session, spec: &CanvasSpec) {
    let size = egui::vec2(spec.width as f32, spec.height as f32);
    let (response, painter) = ui.allocate_painter(size, Sense::drag());
    let rect = response.rect;
    let painter = painter.with_clip_rect(rect);

    painter.rect_filled(rect, CornerRadius::ZERO, to_color32(spec.background));

    // Pointer → tool interaction. Positions are clamped to the surface so a
    // drag that leaves the window keeps a well-formed stroke.
    let canvas_point = |pos: Pos2| {
        let clamped = rect.clamp(pos);
        Point::new(
            f64::from(clamped.x - rect.left()),
            f64::from(clamped.y - rect.top()),
        )
    };

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            session.begin_stroke(canvas_point(pos));
        }
    } else if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            session.extend_stroke(canvas_point(pos));
        }
    }
    if response.drag_stopped() {
        let release = response
            .interact_pointer_pos()
            .map(canvas_point)
            .or_else(|| session.interaction.preview_points().last().copied());
        if let Some(point) = release {
            session.finish_stroke(point, spec.background);
        } else {
            session.cancel_stroke();
        }
    }

    // Committed strokes, oldest first, then the live preview on top.
    for stroke in session.document.strokes() {
        paint_polyline(&painter, rect.min, &stroke.points, stroke.color, stroke.width);
    }
    if session.interaction.is_active() {
        let color = session.tools.effective_color(spec.background);
        let width = f64::from(session.tools.stroke_width());
        paint_polyline(
            &painter,
            rect.min,
            session.interaction.preview_points(),
            color,
            width,
        );
    }
}

/// Paint one polyline in screen space; a single point becomes a dot.
fn paint_polyline(
    painter: &egui::Painter,
    origin: Pos2,
    points: &[Point],
    color: Rgba,
    width: f64,
) {
    let to_screen = |p: &Point| Pos2::new(origin.x + p.x as f32, origin.y + p.y as f32);
    let color = to_color32(color);

    match points {
        [] => {}
        [point] => {
            painter.circle_filled(to_screen(point), (width / 2.0).max(0.5) as f32, color);
        }
        points => {
            let screen: Vec<Pos2> = points.iter().map(to_screen).collect();
            painter.add(egui::Shape::line(
                screen,
                EguiStroke::new(width as f32, color),
            ));
        }
    }
}
