//! Input section: the three configuration fields

use eframe::egui;

use crate::state::FormState;

use super::super::constants::{ITEM_SPACING, TEXT_DEFAULT, TEXT_EDITED};

fn field_color(touched: bool) -> egui::Color32 {
    if touched { TEXT_EDITED } else { TEXT_DEFAULT }
}

/// Renders the configuration fields and returns true if any value changed
pub fn ui(ui: &mut egui::Ui, state: &mut FormState) -> bool {
    let mut changed = false;

    ui.group(|ui| {
        ui.label(egui::RichText::new("Configuration").heading().strong());
        ui.add_space(ITEM_SPACING);

        ui.label("Base URL:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut state.base_url)
                    .desired_width(f32::INFINITY)
                    .text_color(field_color(state.touched.base_url))
                    .hint_text("Enter base URL..."),
            )
            .changed()
        {
            state.touched.base_url = true;
            changed = true;
        }

        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Code:");
                if ui
                    .add(
                        egui::TextEdit::singleline(&mut state.code)
                            .text_color(field_color(state.touched.code))
                            .hint_text("Enter code..."),
                    )
                    .changed()
                {
                    state.touched.code = true;
                    changed = true;
                }
            });

            ui.add_space(ITEM_SPACING);

            ui.vertical(|ui| {
                ui.label("ID:");
                if ui
                    .add(
                        egui::TextEdit::singleline(&mut state.id)
                            .text_color(field_color(state.touched.id))
                            .hint_text("Enter ID..."),
                    )
                    .changed()
                {
                    state.touched.id = true;
                    changed = true;
                }
            });
        });
    });

    changed
}
