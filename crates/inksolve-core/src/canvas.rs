//! The sketch document: committed strokes plus the canvas identity.

use crate::stroke::Stroke;
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// All strokes drawn since the last clear, plus the canvas identity.
///
/// The `epoch` is the identity token of the drawing surface: bumping it (via
/// [`SketchDocument::clear`]) tells the view that the surface it knew is gone
/// and stroke history is irrecoverable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SketchDocument {
    strokes: Vec<Stroke>,
    epoch: u64,
}

impl SketchDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed stroke.
    pub fn add_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Remove and return the most recently committed stroke.
    pub fn undo_last(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Discard all strokes and bump the canvas identity. Irreversible.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.epoch += 1;
    }

    /// Current canvas identity token.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Strokes in draw order (oldest first).
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// True when nothing has been painted since the last clear.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Number of committed strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Combined bounds of all strokes, or `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        self.strokes
            .iter()
            .map(Stroke::bounds)
            .reduce(|acc, b| acc.union(b))
    }
}
