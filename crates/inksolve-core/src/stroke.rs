//! Freehand strokes.

use crate::color::Rgba;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique stroke identifier.
pub type StrokeId = Uuid;

/// One continuous freehand path, immutable once committed to the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    pub(crate) id: StrokeId,
    /// Points along the path, in capture order.
    pub points: Vec<Point>,
    /// Stroke color (already resolved: eraser strokes carry the background).
    pub color: Rgba,
    /// Stroke width in pixels.
    pub width: f64,
}

impl Stroke {
    /// Create a stroke from captured points.
    pub fn from_points(points: Vec<Point>, color: Rgba, width: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            color,
            width,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounds of the path (ignoring stroke width).
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };
        let mut bounds = Rect::from_points(*first, *first);
        for p in &self.points[1..] {
            bounds = bounds.union_pt(*p);
        }
        bounds
    }

    /// Remove redundant points with Ramer-Douglas-Peucker.
    ///
    /// Bounds the point count of long strokes before they are stored; the
    /// visual deviation stays under `tolerance` pixels.
    pub fn simplify(&mut self, tolerance: f64) {
        if self.points.len() >= 3 {
            self.points = rdp(&self.points, tolerance);
        }
    }
}

/// Ramer-Douglas-Peucker polyline simplification.
fn rdp(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[points.len() - 1];

    // Find the point farthest from the chord between the endpoints.
    let (max_index, max_dist) = points[1..points.len() - 1]
        .iter()
        .enumerate()
        .map(|(i, p)| (i + 1, point_to_segment_distance(*p, first, last)))
        .fold((0, 0.0), |acc, (i, d)| if d > acc.1 { (i, d) } else { acc });

    if max_dist <= tolerance {
        return vec![first, last];
    }

    let mut left = rdp(&points[..=max_index], tolerance);
    let right = rdp(&points[max_index..], tolerance);
    left.pop(); // junction point appears in both halves
    left.extend(right);
    left
}

/// Distance from `point` to the line through `a` and `b`.
fn point_to_segment_distance(point: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq < f64::EPSILON {
        return point.distance(a);
    }
    // Twice the triangle area over the base length.
    ((point.x - a.x) * dy - (point.y - a.y) * dx).abs() / len_sq.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_creation() {
        let stroke = Stroke::from_points(
            vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
            Rgba::white(),
            4.0,
        );
        assert_eq!(stroke.len(), 2);
        assert!(!stroke.is_empty());
    }

    #[test]
    fn test_bounds() {
        let stroke = Stroke::from_points(
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 50.0),
                Point::new(50.0, 100.0),
            ],
            Rgba::white(),
            4.0,
        );
        let bounds = stroke.bounds();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_bounds() {
        let stroke = Stroke::from_points(Vec::new(), Rgba::white(), 4.0);
        assert_eq!(stroke.bounds(), Rect::ZERO);
    }

    #[test]
    fn test_simplify_collinear() {
        let mut stroke = Stroke::from_points(
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.1),
                Point::new(2.0, 0.0),
                Point::new(3.0, 0.1),
                Point::new(4.0, 0.0),
            ],
            Rgba::white(),
            4.0,
        );
        stroke.simplify(0.5);
        assert!(stroke.len() < 5);
        // Endpoints are always retained.
        assert_eq!(stroke.points[0], Point::new(0.0, 0.0));
        assert_eq!(*stroke.points.last().unwrap(), Point::new(4.0, 0.0));
    }

    #[test]
    fn test_simplify_keeps_corners() {
        let mut stroke = Stroke::from_points(
            vec![
                Point::new(0.0, 0.0),
                Point::new(50.0, 0.0),
                Point::new(50.0, 50.0),
            ],
            Rgba::white(),
            4.0,
        );
        stroke.simplify(1.0);
        assert_eq!(stroke.len(), 3);
    }
}
