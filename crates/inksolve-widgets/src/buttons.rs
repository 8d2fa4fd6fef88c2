//! Button components: tool toggles and action buttons.

use egui::{
    vec2, Color32, CornerRadius, CursorIcon, FontId, Pos2, Response, Sense, Stroke, StrokeKind, Ui,
};

use crate::{sizing, theme};

/// A labeled toggle button for selecting a tool.
///
/// Solid accent fill while selected, subtle hover background otherwise.
pub struct ToolButton<'a> {
    label: &'a str,
    tooltip: &'a str,
    selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(label: &'a str, tooltip: &'a str) -> Self {
        Self {
            label,
            tooltip,
            selected: false,
        }
    }

    /// Mark the button as the active selection.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the button; returns true on click.
    pub fn show(self, ui: &mut Ui) -> bool {
        let galley_width = button_text_width(ui, self.label);
        let size = vec2(
            galley_width.max(sizing::BUTTON_MIN_WIDTH),
            sizing::BUTTON_HEIGHT,
        );
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg = if self.selected {
                theme::ACCENT
            } else if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::TRANSPARENT
            };
            let text_color = if self.selected {
                Color32::WHITE
            } else {
                theme::TEXT
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg);
            if !self.selected {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    Stroke::new(1.0, theme::BORDER),
                    StrokeKind::Inside,
                );
            }
            paint_centered_label(ui, rect.center(), self.label, text_color);
        }

        decorate(response, self.tooltip).clicked()
    }
}

/// A plain labeled action button (clear, solve).
pub struct ActionButton<'a> {
    label: &'a str,
    tooltip: &'a str,
    fill: Color32,
    text_color: Color32,
    enabled: bool,
}

impl<'a> ActionButton<'a> {
    pub fn new(label: &'a str, tooltip: &'a str) -> Self {
        Self {
            label,
            tooltip,
            fill: Color32::TRANSPARENT,
            text_color: theme::TEXT,
            enabled: true,
        }
    }

    /// Accent-filled primary variant.
    pub fn primary(mut self) -> Self {
        self.fill = theme::ACCENT;
        self.text_color = Color32::WHITE;
        self
    }

    /// Red-tinted destructive variant.
    pub fn destructive(mut self) -> Self {
        self.text_color = theme::DANGER;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Show the button; returns true on click (never while disabled).
    pub fn show(self, ui: &mut Ui) -> bool {
        let galley_width = button_text_width(ui, self.label);
        let size = vec2(
            galley_width.max(sizing::BUTTON_MIN_WIDTH),
            sizing::BUTTON_HEIGHT,
        );
        let sense = if self.enabled {
            Sense::click()
        } else {
            Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(size, sense);

        if ui.is_rect_visible(rect) {
            let bg = if !self.enabled {
                Color32::TRANSPARENT
            } else if response.hovered() && self.fill == Color32::TRANSPARENT {
                theme::HOVER_BG
            } else {
                self.fill
            };
            let text_color = if self.enabled {
                self.text_color
            } else {
                theme::TEXT_MUTED
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg);
            if self.fill == Color32::TRANSPARENT {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    Stroke::new(1.0, theme::BORDER),
                    StrokeKind::Inside,
                );
            }
            paint_centered_label(ui, rect.center(), self.label, text_color);
        }

        self.enabled && decorate(response, self.tooltip).clicked()
    }
}

fn button_text_width(ui: &Ui, label: &str) -> f32 {
    let galley = ui.painter().layout_no_wrap(
        label.to_owned(),
        FontId::proportional(13.0),
        Color32::PLACEHOLDER,
    );
    galley.size().x + 20.0
}

fn paint_centered_label(ui: &Ui, center: Pos2, label: &str, color: Color32) {
    ui.painter().text(
        center,
        egui::Align2::CENTER_CENTER,
        label,
        FontId::proportional(13.0),
        color,
    );
}

fn decorate(response: Response, tooltip: &str) -> Response {
    let response = response.on_hover_cursor(CursorIcon::PointingHand);
    if tooltip.is_empty() {
        response
    } else {
        response.on_hover_text(tooltip)
    }
}
