//! Stroke rasterization with tiny-skia.

use crate::snapshot::Snapshot;
use crate::RasterError;
use inksolve_core::{Rgba, SketchDocument, Stroke};
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Transform,
};

/// The fixed geometry of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Background color (also the eraser's paint).
    pub background: Rgba,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 680,
            background: Rgba::black(),
        }
    }
}

fn to_skia_color(color: Rgba) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Capture a snapshot of the drawing surface.
///
/// Returns `Ok(None)` when the document has never been painted on - the
/// surface yields no pixel buffer and a solve request must treat that as a
/// no-op.
pub fn capture(document: &SketchDocument, spec: &CanvasSpec) -> Result<Option<Snapshot>, RasterError> {
    if document.is_empty() {
        return Ok(None);
    }
    rasterize(document, spec).map(Some)
}

/// Rasterize the stroke list onto a fresh background-filled surface.
pub fn rasterize(document: &SketchDocument, spec: &CanvasSpec) -> Result<Snapshot, RasterError> {
    let mut pixmap = Pixmap::new(spec.width, spec.height).ok_or(RasterError::InvalidDimensions {
        width: spec.width,
        height: spec.height,
    })?;
    pixmap.fill(to_skia_color(spec.background));

    for stroke in document.strokes() {
        paint_stroke(&mut pixmap, stroke);
    }

    // tiny-skia stores premultiplied alpha; the snapshot is straight RGBA.
    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Snapshot::new(spec.width, spec.height, rgba)
}

/// Paint one stroke. Multi-point strokes are stroked as an open polyline
/// with round caps and joins; a single captured point becomes a filled dot
/// of the stroke's width.
fn paint_stroke(pixmap: &mut Pixmap, stroke: &Stroke) {
    let mut paint = Paint::default();
    paint.set_color(to_skia_color(stroke.color));
    paint.anti_alias = true;

    match stroke.points.as_slice() {
        [] => {}
        [point] => {
            let radius = (stroke.width / 2.0).max(0.5) as f32;
            if let Some(path) =
                PathBuilder::from_circle(point.x as f32, point.y as f32, radius)
            {
                pixmap.fill_path(
                    &path,
                    &paint,
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            }
        }
        points => {
            let mut builder = PathBuilder::new();
            builder.move_to(points[0].x as f32, points[0].y as f32);
            for p in &points[1..] {
                builder.line_to(p.x as f32, p.y as f32);
            }
            let Some(path) = builder.finish() else {
                return;
            };
            let skia_stroke = tiny_skia::Stroke {
                width: stroke.width as f32,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
                ..Default::default()
            };
            pixmap.stroke_path(&path, &paint, &skia_stroke, Transform::identity(), None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn spec_16() -> CanvasSpec {
        CanvasSpec {
            width: 16,
            height: 16,
            background: Rgba::black(),
        }
    }

    fn white_stroke(points: &[(f64, f64)], width: f64) -> Stroke {
        Stroke::from_points(
            points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            Rgba::white(),
            width,
        )
    }

    #[test]
    fn test_empty_document_yields_no_snapshot() {
        let doc = SketchDocument::new();
        assert!(capture(&doc, &CanvasSpec::default()).unwrap().is_none());
    }

    #[test]
    fn test_background_fill() {
        let mut doc = SketchDocument::new();
        doc.add_stroke(white_stroke(&[(2.0, 8.0), (14.0, 8.0)], 2.0));
        let snapshot = rasterize(&doc, &spec_16()).unwrap();

        // Corners stay background-black and opaque.
        assert_eq!(snapshot.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(snapshot.pixel(15, 15), [0, 0, 0, 255]);
    }

    #[test]
    fn test_stroke_paints_pixels() {
        let mut doc = SketchDocument::new();
        doc.add_stroke(white_stroke(&[(2.0, 8.0), (14.0, 8.0)], 3.0));
        let snapshot = capture(&doc, &spec_16()).unwrap().unwrap();

        // A pixel on the stroke center line is white.
        assert_eq!(snapshot.pixel(8, 8), [255, 255, 255, 255]);
    }

    #[test]
    fn test_single_point_dot() {
        let mut doc = SketchDocument::new();
        doc.add_stroke(white_stroke(&[(8.0, 8.0)], 6.0));
        let snapshot = rasterize(&doc, &spec_16()).unwrap();

        assert_eq!(snapshot.pixel(8, 8), [255, 255, 255, 255]);
        assert_eq!(snapshot.pixel(1, 1), [0, 0, 0, 255]);
    }

    #[test]
    fn test_eraser_stroke_restores_background() {
        let mut doc = SketchDocument::new();
        doc.add_stroke(white_stroke(&[(2.0, 8.0), (14.0, 8.0)], 4.0));
        // Eraser strokes carry the background color when committed.
        doc.add_stroke(Stroke::from_points(
            vec![Point::new(2.0, 8.0), Point::new(14.0, 8.0)],
            Rgba::black(),
            8.0,
        ));
        let snapshot = rasterize(&doc, &spec_16()).unwrap();

        assert_eq!(snapshot.pixel(8, 8), [0, 0, 0, 255]);
    }

    #[test]
    fn test_snapshot_dimensions() {
        let mut doc = SketchDocument::new();
        doc.add_stroke(white_stroke(&[(1.0, 1.0), (2.0, 2.0)], 1.0));
        let spec = CanvasSpec::default();
        let snapshot = rasterize(&doc, &spec).unwrap();
        assert_eq!(snapshot.width(), 1400);
        assert_eq!(snapshot.height(), 680);
        assert_eq!(snapshot.rgba().len(), 1400 * 680 * 4);
    }
}
