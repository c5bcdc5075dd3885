// Modal rendering: rename prompt and delete confirmation

use crate::action::Action;
use crate::app::Tansu;
use crate::state::AppMode;
use crate::style;
use eframe::egui;

impl Tansu {
    pub(crate) fn render_rename_modal(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        if self.mode.mode != AppMode::Rename {
            return;
        }
        egui::Window::new("Rename")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.label("Enter new name:");
                let response = ui.text_edit_singleline(&mut self.mode.input_buffer);
                if self.mode.focus_input {
                    response.request_focus();
                    self.mode.focus_input = false;
                }
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        actions.push(Action::Rename(self.mode.input_buffer.clone()));
                    }
                    if ui.button("Cancel").clicked() {
                        actions.push(Action::CancelPrompt);
                    }
                });
            });
    }

    pub(crate) fn render_delete_modal(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        if self.mode.mode != AppMode::DeleteConfirm {
            return;
        }
        let name = self
            .navigation
            .selected_entry()
            .map(|e| e.name.clone())
            .unwrap_or_default();

        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.label(format!("Delete {}?", name));
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes (y)").clicked() {
                        actions.push(Action::ConfirmDelete);
                    }
                    if ui.button("No (n)").clicked() {
                        actions.push(Action::CancelPrompt);
                    }
                });
            });
    }
}
