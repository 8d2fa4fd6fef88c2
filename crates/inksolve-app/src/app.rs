//! Application state and the event → mutate → render loop.

use inksolve_core::{Session, SessionPhase, ToolMode};
use inksolve_infer::GeminiClient;
use inksolve_raster::{capture, encode_png, CanvasSpec};

use crate::canvas_view;
use crate::ui::{self, UiAction};

/// The InkSolve application: one interactive session plus its collaborators.
pub struct InkSolveApp {
    session: Session,
    client: GeminiClient,
    canvas: CanvasSpec,
}

impl InkSolveApp {
    pub fn new(cc: &eframe::CreationContext<'_>, client: GeminiClient) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self {
            session: Session::new(),
            client,
            canvas: CanvasSpec::default(),
        }
    }

    /// Translate global key presses into session mutations.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (enter, pen, eraser, escape, undo) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::P),
                i.key_pressed(egui::Key::E),
                i.key_pressed(egui::Key::Escape),
                i.modifiers.command && i.key_pressed(egui::Key::Z),
            )
        });

        // Enter anywhere behaves exactly like the Solve button.
        if enter {
            self.session.trigger_enter();
        }
        if pen {
            self.session.select_tool(ToolMode::Pen);
        }
        if eraser {
            self.session.select_tool(ToolMode::Eraser);
        }
        if escape {
            self.session.cancel_stroke();
        }
        if undo {
            self.session.undo_last_stroke();
        }
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::SelectTool(mode) => self.session.select_tool(mode),
            UiAction::SetColor(color) => self.session.set_color(color),
            UiAction::SetStrokeWidth(width) => self.session.set_stroke_width(width),
            UiAction::Clear => self.session.clear(),
            // Solve is evaluated in run_solve, after canvas input.
            UiAction::Solve => {}
        }
    }

    /// Evaluate the solve trigger and, if raised, run the blocking request.
    fn run_solve(&mut self, button_pressed: bool) {
        if !self.session.solve_requested(button_pressed) {
            return;
        }
        let png = match capture(&self.session.document, &self.canvas) {
            Ok(Some(snapshot)) => match encode_png(&snapshot) {
                Ok(png) => Some(png),
                Err(err) => {
                    log::error!("failed to encode snapshot: {err}");
                    return;
                }
            },
            Ok(None) => None,
            Err(err) => {
                log::error!("failed to capture snapshot: {err}");
                return;
            }
        };
        // Blocks until the collaborator answers or fails; the UI is
        // unresponsive for the duration (single suspension point).
        self.session.submit(png, &self.client);
    }
}

impl eframe::App for InkSolveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("toolbar")
            .frame(inksolve_widgets::toolbar_frame())
            .show(ctx, |ui| {
                let solving = self.session.phase() == SessionPhase::Submitting;
                ui::toolbar(ui, &self.session, solving, &mut actions);
            });

        let solve_clicked = actions.contains(&UiAction::Solve);
        for action in actions {
            self.apply(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                canvas_view::show(ui, &mut self.session, &self.canvas);
                ui.add_space(8.0);
                ui::results(ui, &self.session);
            });
        });

        // After canvas input, so a stroke finished this frame is included.
        self.run_solve(solve_clicked);
    }
}
