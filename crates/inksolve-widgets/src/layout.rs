//! Layout helpers: toolbar frame, separators, section labels.

use egui::{vec2, Color32, CornerRadius, FontId, Frame, Margin, Sense, Stroke, Ui};

use crate::{sizing, theme};

/// Frame for the top toolbar strip.
pub fn toolbar_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .inner_margin(Margin::symmetric(12, 6))
        .stroke(Stroke::new(1.0, theme::BORDER))
}

/// Frame for the answer block beneath the canvas (dark, code-like).
pub fn answer_frame() -> Frame {
    Frame::new()
        .fill(theme::ANSWER_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .inner_margin(Margin::same(12))
}

/// A thin vertical separator between toolbar groups.
pub fn vertical_separator(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(vec2(1.0, sizing::BUTTON_HEIGHT), Sense::hover());
    ui.painter()
        .rect_filled(rect, CornerRadius::ZERO, theme::BORDER);
}

/// A small muted label introducing a control group.
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .font(FontId::proportional(12.0))
            .color(theme::TEXT_MUTED),
    );
}

/// A muted status line (e.g. surfaced errors render through this in red).
pub fn status_line(ui: &mut Ui, text: &str, color: Color32) {
    ui.label(
        egui::RichText::new(text)
            .font(FontId::monospace(12.0))
            .color(color),
    );
}
