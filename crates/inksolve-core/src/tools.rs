//! Tool state for the sketch canvas.

use crate::color::Rgba;
use crate::stroke::Stroke;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Minimum stroke width.
pub const MIN_STROKE_WIDTH: u32 = 1;
/// Maximum stroke width.
pub const MAX_STROKE_WIDTH: u32 = 20;
/// Default stroke width for a fresh session.
pub const DEFAULT_STROKE_WIDTH: u32 = 4;

/// Tolerance for post-capture stroke simplification, in pixels.
const SIMPLIFY_TOLERANCE: f64 = 0.75;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolMode {
    #[default]
    Pen,
    Eraser,
}

/// Toolbar-controlled settings: active tool, pen color, stroke width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Currently selected tool.
    pub mode: ToolMode,
    /// Pen color. Ignored while erasing (see [`ToolSettings::effective_color`]).
    pub color: Rgba,
    /// Stroke width, kept within [`MIN_STROKE_WIDTH`]..=[`MAX_STROKE_WIDTH`].
    stroke_width: u32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            mode: ToolMode::Pen,
            color: Rgba::white(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl ToolSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Set the stroke width, clamped to the valid range.
    pub fn set_stroke_width(&mut self, width: u32) {
        self.stroke_width = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
    }

    /// The color strokes are actually painted with.
    ///
    /// The eraser paints in the background color regardless of the selected
    /// pen color; erasing is drawing over in background paint.
    pub fn effective_color(&self, background: Rgba) -> Rgba {
        match self.mode {
            ToolMode::Pen => self.color,
            ToolMode::Eraser => background,
        }
    }
}

/// State of the current pointer interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum InteractionState {
    /// Waiting for a pointer press.
    #[default]
    Idle,
    /// A stroke is being captured.
    Active,
}

/// Captures pointer input into strokes.
///
/// Press begins an interaction, drag extends it, release commits a stroke
/// built from the accumulated points with the tool settings in effect at
/// release time.
#[derive(Debug, Clone, Default)]
pub struct ToolInteraction {
    state: InteractionState,
    /// Accumulated points for the in-progress stroke.
    points: Vec<Point>,
}

impl ToolInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin capturing a stroke.
    pub fn begin(&mut self, point: Point) {
        self.points.clear();
        self.points.push(point);
        self.state = InteractionState::Active;
    }

    /// Extend the in-progress stroke. Ignored while idle; consecutive
    /// duplicate points are dropped.
    pub fn update(&mut self, point: Point) {
        if self.state != InteractionState::Active {
            return;
        }
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    /// Finish the interaction and commit the captured points as a stroke.
    ///
    /// A press-and-release without movement yields a single-point stroke (a
    /// dot, once rendered with round caps).
    pub fn end(&mut self, point: Point, settings: &ToolSettings, background: Rgba) -> Option<Stroke> {
        if self.state != InteractionState::Active {
            return None;
        }
        self.update(point);
        self.state = InteractionState::Idle;

        let points = std::mem::take(&mut self.points);
        if points.is_empty() {
            return None;
        }
        let mut stroke = Stroke::from_points(
            points,
            settings.effective_color(background),
            f64::from(settings.stroke_width()),
        );
        stroke.simplify(SIMPLIFY_TOLERANCE);
        Some(stroke)
    }

    /// Discard the in-progress stroke.
    pub fn cancel(&mut self) {
        self.state = InteractionState::Idle;
        self.points.clear();
    }

    /// Whether a stroke is currently being captured.
    pub fn is_active(&self) -> bool {
        self.state == InteractionState::Active
    }

    /// Points of the in-progress stroke, for live preview rendering.
    pub fn preview_points(&self) -> &[Point] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ToolSettings::new();
        assert_eq!(settings.mode, ToolMode::Pen);
        assert_eq!(settings.color, Rgba::white());
        assert_eq!(settings.stroke_width(), DEFAULT_STROKE_WIDTH);
    }

    #[test]
    fn test_stroke_width_clamp() {
        let mut settings = ToolSettings::new();

        settings.set_stroke_width(0);
        assert_eq!(settings.stroke_width(), MIN_STROKE_WIDTH);

        settings.set_stroke_width(99);
        assert_eq!(settings.stroke_width(), MAX_STROKE_WIDTH);

        settings.set_stroke_width(12);
        assert_eq!(settings.stroke_width(), 12);
    }

    #[test]
    fn test_eraser_color_override() {
        let background = Rgba::black();
        let mut settings = ToolSettings::new();
        settings.color = Rgba::new(255, 0, 0, 255);

        assert_eq!(settings.effective_color(background), settings.color);

        settings.mode = ToolMode::Eraser;
        assert_eq!(settings.effective_color(background), background);

        // The override holds for any selected color.
        settings.color = Rgba::new(0, 255, 0, 255);
        assert_eq!(settings.effective_color(background), background);
    }

    #[test]
    fn test_interaction_lifecycle() {
        let settings = ToolSettings::new();
        let mut interaction = ToolInteraction::new();
        assert!(!interaction.is_active());

        interaction.begin(Point::new(0.0, 0.0));
        assert!(interaction.is_active());

        interaction.update(Point::new(10.0, 0.0));
        interaction.update(Point::new(20.0, 0.0));
        assert_eq!(interaction.preview_points().len(), 3);

        let stroke = interaction.end(Point::new(30.0, 0.0), &settings, Rgba::black());
        let stroke = stroke.expect("stroke committed");
        assert!(!interaction.is_active());
        assert_eq!(stroke.color, Rgba::white());
        assert_eq!(stroke.width, f64::from(DEFAULT_STROKE_WIDTH));
        // Collinear capture simplifies to its endpoints.
        assert_eq!(stroke.len(), 2);
    }

    #[test]
    fn test_single_point_stroke() {
        let settings = ToolSettings::new();
        let mut interaction = ToolInteraction::new();

        interaction.begin(Point::new(5.0, 5.0));
        let stroke = interaction.end(Point::new(5.0, 5.0), &settings, Rgba::black());
        assert_eq!(stroke.expect("dot committed").len(), 1);
    }

    #[test]
    fn test_cancel_discards_points() {
        let settings = ToolSettings::new();
        let mut interaction = ToolInteraction::new();

        interaction.begin(Point::new(0.0, 0.0));
        interaction.update(Point::new(10.0, 10.0));
        interaction.cancel();

        assert!(!interaction.is_active());
        assert!(interaction.preview_points().is_empty());
        // A release after cancel commits nothing.
        assert!(interaction
            .end(Point::new(20.0, 20.0), &settings, Rgba::black())
            .is_none());
    }

    #[test]
    fn test_update_while_idle_is_ignored() {
        let mut interaction = ToolInteraction::new();
        interaction.update(Point::new(1.0, 1.0));
        assert!(interaction.preview_points().is_empty());
    }

    #[test]
    fn test_eraser_stroke_carries_background() {
        let mut settings = ToolSettings::new();
        settings.mode = ToolMode::Eraser;
        let mut interaction = ToolInteraction::new();

        interaction.begin(Point::new(0.0, 0.0));
        let stroke = interaction
            .end(Point::new(10.0, 0.0), &settings, Rgba::black())
            .expect("stroke committed");
        assert_eq!(stroke.color, Rgba::black());
    }
}
