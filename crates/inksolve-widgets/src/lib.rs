//! Reusable egui widget components for the InkSolve toolbar.
//!
//! - **Buttons**: labeled tool toggles and action buttons
//! - **Layout**: toolbar frame, separators, section labels

pub mod buttons;
pub mod layout;

pub use buttons::{ActionButton, ToolButton};
pub use layout::{answer_frame, section_label, status_line, toolbar_frame, vertical_separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Toolbar button height
    pub const BUTTON_HEIGHT: f32 = 28.0;
    /// Minimum toolbar button width
    pub const BUTTON_MIN_WIDTH: f32 = 64.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color on light chrome
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Destructive action color (red)
    pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
    /// Answer block background (dark, code-like)
    pub const ANSWER_BG: Color32 = Color32::from_rgb(24, 24, 27);
    /// Answer block text
    pub const ANSWER_TEXT: Color32 = Color32::from_rgb(228, 228, 231);
}
