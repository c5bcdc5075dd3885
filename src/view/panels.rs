// Panel rendering for Tansu
// Toolbar, operation buttons, entry table and status bar

use crate::action::Action;
use crate::app::Tansu;
use crate::style;
use eframe::egui;

impl Tansu {
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("📂 Open Folder").clicked() {
                    if let Some(folder) = self.pick_folder("Open Folder") {
                        actions.push(Action::OpenFolder(folder));
                    }
                }
                if ui.button("⬆ Back").clicked() {
                    actions.push(Action::Up);
                }
                if ui.button("⟳").on_hover_text("Refresh").clicked() {
                    actions.push(Action::Refresh);
                }
                ui.separator();
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(self.navigation.current_path.display().to_string())
                            .monospace(),
                    )
                    .truncate(),
                );
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Search:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.ui.search_query)
                        .desired_width(240.0)
                        .hint_text("part of a name"),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("🔍 Search").clicked() || submitted {
                    actions.push(Action::Search(self.ui.search_query.clone()));
                }
                if let Some(query) = &self.navigation.active_search {
                    ui.label(
                        egui::RichText::new(format!("filtered by \"{}\"", query)).weak(),
                    );
                }
            });
            ui.add_space(4.0);
        });
    }

    pub(crate) fn render_button_column(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        egui::SidePanel::left("operations_panel")
            .resizable(false)
            .exact_width(style::BUTTON_WIDTH + 16.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                let size = egui::vec2(style::BUTTON_WIDTH, 28.0);

                if ui.add_sized(size, egui::Button::new("🗑 Delete")).clicked() {
                    actions.push(Action::RequestDelete);
                }
                if ui.add_sized(size, egui::Button::new("✏ Rename")).clicked() {
                    actions.push(Action::RequestRename);
                }
                if ui.add_sized(size, egui::Button::new("📋 Copy")).clicked()
                    && self.require_selection().is_some()
                {
                    if let Some(dest) = self.pick_folder("Copy to") {
                        actions.push(Action::Copy(dest));
                    }
                }
                if ui.add_sized(size, egui::Button::new("📦 Move")).clicked()
                    && self.require_selection().is_some()
                {
                    if let Some(dest) = self.pick_folder("Move to") {
                        actions.push(Action::Move(dest));
                    }
                }
            });
    }

    pub(crate) fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} items", self.navigation.entries.len()));
                if let Some(entry) = self.navigation.selected_entry() {
                    ui.separator();
                    ui.label(entry.summary());
                }
                if let Some((err, _)) = &self.ui.error_message {
                    ui.separator();
                    ui.colored_label(egui::Color32::RED, err);
                } else if let Some((info, _)) = &self.ui.info_message {
                    ui.separator();
                    ui.label(info);
                }
            });
        });
    }

    pub(crate) fn render_entry_list(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            use egui_extras::{Column, TableBuilder};
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .resizable(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::initial(style::ICON_COL_WIDTH))
                .column(Column::remainder().clip(true));

            if let Some(idx) = self.navigation.selected_index {
                table = table.scroll_to_row(idx, None);
            }

            table
                .header(style::HEADER_HEIGHT, |mut header| {
                    header.col(|ui| {
                        ui.label("");
                    });
                    header.col(|ui| {
                        ui.label("Name");
                    });
                })
                .body(|body| {
                    body.rows(style::ROW_HEIGHT, self.navigation.entries.len(), |mut row| {
                        let row_index = row.index();
                        let entry = &self.navigation.entries[row_index];
                        row.set_selected(self.navigation.selected_index == Some(row_index));

                        row.col(|ui| {
                            ui.label(egui::RichText::new(entry.get_icon()).size(style::ICON_SIZE));
                        });

                        row.col(|ui| {
                            let mut text = egui::RichText::new(entry.display_name());
                            if entry.is_dir {
                                text = text.color(style::DIR_COLOR);
                            }
                            let response = style::truncated_label_with_sense(
                                ui,
                                text,
                                egui::Sense::click(),
                            );
                            if response.double_clicked() {
                                actions.push(Action::Activate(row_index));
                            } else if response.clicked() {
                                actions.push(Action::Select(row_index));
                            }
                        });
                    });
                });
        });
    }
}
