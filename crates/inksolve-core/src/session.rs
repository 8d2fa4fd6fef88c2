//! The sketch session controller.
//!
//! One [`Session`] value owns everything a single interactive session
//! mutates: tool settings, the in-progress interaction, the sketch document,
//! and the submission state. Event handlers mutate it; rendering is a pure
//! projection of it.

use crate::canvas::SketchDocument;
use crate::color::Rgba;
use crate::solver::SolveClient;
use crate::stroke::Stroke;
use crate::tools::{ToolInteraction, ToolMode, ToolSettings};
use kurbo::Point;

/// The three mutually exclusive phases of a session.
///
/// The solve request blocks, so `Submitting` never outlives a single
/// [`Session::submit`] call; it exists so the projection can refuse solve
/// triggers while a request is on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Waiting for input.
    #[default]
    Idle,
    /// One solve request is in flight.
    Submitting,
}

/// Session-scoped state for one user's interactive sketch-and-solve run.
#[derive(Debug, Default)]
pub struct Session {
    /// Toolbar state.
    pub tools: ToolSettings,
    /// Pointer interaction state.
    pub interaction: ToolInteraction,
    /// Committed strokes and canvas identity.
    pub document: SketchDocument,
    /// Most recent interpreted/solved text.
    pending_answer: Option<String>,
    /// One-shot flag raised by the Enter key, consumed by the next solve
    /// evaluation.
    enter_triggered: bool,
    /// Error text from the last failed solve, cleared on success or clear.
    last_error: Option<String>,
    phase: SessionPhase,
}

impl Session {
    /// Create a session with default tool settings and a blank canvas.
    pub fn new() -> Self {
        Self::default()
    }

    // --- toolbar operations ---

    /// Switch the active tool. Idempotent; cancels any in-progress stroke.
    pub fn select_tool(&mut self, mode: ToolMode) {
        if self.tools.mode != mode {
            self.interaction.cancel();
        }
        self.tools.mode = mode;
    }

    /// Update the pen color. The value is stored even while erasing, but the
    /// eraser's effective color stays pinned to the background.
    pub fn set_color(&mut self, color: Rgba) {
        self.tools.color = color;
    }

    /// Update the stroke width (clamped).
    pub fn set_stroke_width(&mut self, width: u32) {
        self.tools.set_stroke_width(width);
    }

    /// Discard all strokes and the pending answer, bumping the canvas
    /// identity. Invoking twice observably equals invoking once.
    pub fn clear(&mut self) {
        self.interaction.cancel();
        self.document.clear();
        self.pending_answer = None;
        self.last_error = None;
    }

    // --- stroke capture ---

    /// Pointer pressed on the canvas.
    pub fn begin_stroke(&mut self, point: Point) {
        self.interaction.begin(point);
    }

    /// Pointer dragged across the canvas.
    pub fn extend_stroke(&mut self, point: Point) {
        self.interaction.update(point);
    }

    /// Pointer released: commit the captured stroke to the document.
    pub fn finish_stroke(&mut self, point: Point, background: Rgba) {
        if let Some(stroke) = self.interaction.end(point, &self.tools, background) {
            self.document.add_stroke(stroke);
        }
    }

    /// Drop the in-progress stroke without committing it.
    pub fn cancel_stroke(&mut self) {
        self.interaction.cancel();
    }

    /// Remove the most recently committed stroke.
    pub fn undo_last_stroke(&mut self) -> Option<Stroke> {
        self.document.undo_last()
    }

    // --- submission ---

    /// Raise the Enter-key solve trigger.
    pub fn trigger_enter(&mut self) {
        self.enter_triggered = true;
    }

    /// Whether the Enter trigger is currently raised.
    pub fn enter_triggered(&self) -> bool {
        self.enter_triggered
    }

    /// Decide whether a solve should run this cycle.
    ///
    /// The Enter trigger is consumed unconditionally, guaranteeing at most
    /// one solve per key press however often the surrounding render loop
    /// re-runs. Returns false while a request is already in flight.
    pub fn solve_requested(&mut self, button_pressed: bool) -> bool {
        let enter = std::mem::take(&mut self.enter_triggered);
        (button_pressed || enter) && self.phase == SessionPhase::Idle
    }

    /// Run one solve request against the inference collaborator.
    ///
    /// `png` is the encoded snapshot of the drawing surface, or `None` when
    /// the surface has never been painted on - in which case the whole call
    /// is a no-op and the collaborator is never invoked. On success the
    /// trimmed response text becomes the pending answer; on failure the
    /// error is surfaced and the pending answer is left unchanged.
    pub fn submit<C: SolveClient + ?Sized>(&mut self, png: Option<Vec<u8>>, client: &C) {
        let Some(png) = png else {
            log::debug!("solve requested on an untouched canvas; ignoring");
            return;
        };

        self.phase = SessionPhase::Submitting;
        let result = client.solve(&png);
        self.phase = SessionPhase::Idle;

        match result {
            Ok(text) => {
                log::info!("solve succeeded ({} bytes of answer text)", text.len());
                self.pending_answer = Some(text.trim().to_owned());
                self.last_error = None;
            }
            Err(err) => {
                log::error!("solve failed: {err}");
                self.last_error = Some(err.to_string());
            }
        }
    }

    // --- projection accessors ---

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The most recent answer text, if any.
    pub fn answer(&self) -> Option<&str> {
        self.pending_answer.as_deref()
    }

    /// The surfaced error from the last failed solve, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
