//! Toolbar and result projection.

use egui::Ui;
use inksolve_core::{Rgba, Session, ToolMode};
use inksolve_widgets::{
    answer_frame, section_label, status_line, theme, vertical_separator, ActionButton, ToolButton,
};

use crate::shortcuts::ShortcutRegistry;

/// Mutations requested by toolbar interaction, applied by the app after the
/// panel closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SelectTool(ToolMode),
    SetColor(Rgba),
    SetStrokeWidth(u32),
    Clear,
    Solve,
}

/// Render the toolbar from the session state and collect requested actions.
pub fn toolbar(ui: &mut Ui, session: &Session, solving: bool, actions: &mut Vec<UiAction>) {
    ui.horizontal(|ui| {
        if ToolButton::new("Pen", "Draw strokes (P)")
            .selected(session.tools.mode == ToolMode::Pen)
            .show(ui)
        {
            actions.push(UiAction::SelectTool(ToolMode::Pen));
        }
        if ToolButton::new("Eraser", "Paint over in background color (E)")
            .selected(session.tools.mode == ToolMode::Eraser)
            .show(ui)
        {
            actions.push(UiAction::SelectTool(ToolMode::Eraser));
        }

        vertical_separator(ui);

        // The color picker only applies to the pen; it is hidden while the
        // eraser is active and the eraser paints background regardless.
        if session.tools.mode == ToolMode::Pen {
            section_label(ui, "Color");
            let color = session.tools.color;
            let mut rgb = [color.r, color.g, color.b];
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                actions.push(UiAction::SetColor(Rgba::new(rgb[0], rgb[1], rgb[2], 255)));
            }
        }

        section_label(ui, "Size");
        let mut width = session.tools.stroke_width();
        if ui
            .add(egui::Slider::new(&mut width, 1..=20).show_value(true))
            .changed()
        {
            actions.push(UiAction::SetStrokeWidth(width));
        }

        vertical_separator(ui);

        if ActionButton::new("Clear", "Discard the drawing and the answer")
            .destructive()
            .show(ui)
        {
            actions.push(UiAction::Clear);
        }
        if ActionButton::new("Solve", "Send the drawing to the model (Enter)")
            .primary()
            .enabled(!solving)
            .show(ui)
        {
            actions.push(UiAction::Solve);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            section_label(ui, "Shortcuts");
            ui.label("?").on_hover_text(shortcut_help());
        });
    });
}

/// Answer block and surfaced error beneath the canvas.
pub fn results(ui: &mut Ui, session: &Session) {
    if let Some(error) = session.last_error() {
        status_line(ui, &format!("solve failed: {error}"), theme::DANGER);
        ui.add_space(4.0);
    }

    if let Some(answer) = session.answer() {
        ui.heading("Answer");
        ui.add_space(4.0);
        answer_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(answer)
                    .monospace()
                    .color(theme::ANSWER_TEXT),
            );
        });
    }
}

fn shortcut_help() -> String {
    ShortcutRegistry::all()
        .iter()
        .map(|s| format!("{:10}  {}", s.format(), s.description))
        .collect::<Vec<_>>()
        .join("\n")
}
