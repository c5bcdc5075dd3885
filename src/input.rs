// Keyboard input handling for Tansu

use crate::action::Action;
use crate::app::Tansu;
use crate::state::AppMode;
use eframe::egui;

impl Tansu {
    pub fn handle_input(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        match self.mode.mode {
            AppMode::Rename => {
                if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                    actions.push(Action::Rename(self.mode.input_buffer.clone()));
                }
                if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                    actions.push(Action::CancelPrompt);
                }
                return;
            }
            AppMode::DeleteConfirm => {
                if ctx.input(|i| i.key_pressed(egui::Key::Y) || i.key_pressed(egui::Key::Enter)) {
                    actions.push(Action::ConfirmDelete);
                }
                if ctx.input(|i| i.key_pressed(egui::Key::N) || i.key_pressed(egui::Key::Escape)) {
                    actions.push(Action::CancelPrompt);
                }
                return;
            }
            AppMode::Normal => {}
        }

        // The search field owns the keyboard while focused
        if ctx.wants_keyboard_input() {
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
            actions.push(Action::SelectDelta(1));
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
            actions.push(Action::SelectDelta(-1));
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            if let Some(idx) = self.navigation.selected_index {
                actions.push(Action::Activate(idx));
            }
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Backspace)) {
            actions.push(Action::Up);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Delete)) {
            actions.push(Action::RequestDelete);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::F2)) {
            actions.push(Action::RequestRename);
        }
    }
}
